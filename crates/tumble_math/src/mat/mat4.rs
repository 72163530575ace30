use std::{ops::Mul, fmt::Display};
use crate::*;

impl<T: Real> Mat4<T> {
    /// Create a new matrix with the given values, written row by row (`mRC` is row `R`, column `C`)
    #[inline]
    #[must_use]
    pub fn new(m00: T, m01: T, m02: T, m03: T,
               m10: T, m11: T, m12: T, m13: T,
               m20: T, m21: T, m22: T, m23: T,
               m30: T, m31: T, m32: T, m33: T) -> Self {
        Self { vals: [m00, m10, m20, m30,
                      m01, m11, m21, m31,
                      m02, m12, m22, m32,
                      m03, m13, m23, m33] }
    }

    /// Create a new matrix with the given columns
    #[inline]
    #[must_use]
    pub fn from_columns(column0: Vec4<T>, column1: Vec4<T>, column2: Vec4<T>, column3: Vec4<T>) -> Self {
        Self { vals: [column0.x, column0.y, column0.z, column0.w,
                      column1.x, column1.y, column1.z, column1.w,
                      column2.x, column2.y, column2.z, column2.w,
                      column3.x, column3.y, column3.z, column3.w] }
    }

    /// Get the row at the given index
    #[inline]
    #[must_use]
    pub fn row(self, index: usize) -> Vec4<T> {
        debug_assert!(index < 4);
        Vec4::new(self.vals[index], self.vals[index + 4], self.vals[index + 8], self.vals[index + 12])
    }

    /// Get the column at the given index
    #[inline]
    #[must_use]
    pub fn column(self, index: usize) -> Vec4<T> {
        debug_assert!(index < 4);
        let idx = index * 4;
        Vec4::new(self.vals[idx], self.vals[idx + 1], self.vals[idx + 2], self.vals[idx + 3])
    }

    /// Get the upper-left 3x3 block
    #[must_use]
    pub fn upper_3x3(self) -> Mat3<T> {
        Mat3::from_columns(self.column(0).xyz(), self.column(1).xyz(), self.column(2).xyz())
    }

    /// Replace the matrix by `mat` embedded in the upper-left block, with the last row and column set to those of the identity
    pub fn assign_mat3(&mut self, mat: Mat3<T>) {
        *self = Self::from(mat);
    }

    /// Get the 3x3 matrix left after removing `row` and `column`
    #[must_use]
    pub fn submatrix(self, row: usize, column: usize) -> Mat3<T> {
        debug_assert!(row < 4);
        debug_assert!(column < 4);

        let mut res = Mat3::zero();
        let mut dst = 0;
        for src_column in (0..4).filter(|&c| c != column) {
            for src_row in (0..4).filter(|&r| r != row) {
                res[dst] = self[(src_row, src_column)];
                dst += 1;
            }
        }
        res
    }

    /// Calculate the minor of the element at (`row`, `column`): the determinant of the 3x3 submatrix
    #[inline]
    pub fn minor(self, row: usize, column: usize) -> T {
        self.submatrix(row, column).determinant()
    }

    /// Calculate the determinant, expanding along the first column using the cofactors of its 4 elements
    pub fn determinant(self) -> T {
        self[0] * self.cofactor(0, 0) +
        self[1] * self.cofactor(1, 0) +
        self[2] * self.cofactor(2, 0) +
        self[3] * self.cofactor(3, 0)
    }

    /// Transform a `Vec4`
    pub fn transform(self, vec: Vec4<T>) -> Vec4<T> {
        self.column(0) * vec.x + self.column(1) * vec.y + self.column(2) * vec.z + self.column(3) * vec.w
    }

    /// Transform a `Vec3` as a point (implicit w-coord of 1), without a perspective divide
    pub fn transform_point(self, point: Vec3<T>) -> Vec3<T> {
        self.transform(point.extend(T::one())).xyz()
    }

    /// Transform a `Vec3` as a direction (implicit w-coord of 0)
    pub fn transform_vector(self, vec: Vec3<T>) -> Vec3<T> {
        self.transform(vec.extend(T::zero())).xyz()
    }

    /// Create a 3d translation matrix
    pub fn create_translation(trans: Vec3<T>) -> Self {
        let zero = T::zero();
        let one = T::one();

        Self::new(one , zero, zero, trans.x,
                  zero, one , zero, trans.y,
                  zero, zero, one , trans.z,
                  zero, zero, zero, one    )
    }

    /// Create a 3d scale matrix
    pub fn create_scale(scale: Vec3<T>) -> Self {
        Mat3::create_scale(scale).into()
    }

    /// Create a matrix rotating `angle` around `axis`, `axis` must be normalized
    pub fn create_rotation(axis: Vec3<T>, angle: Radians<T>) -> Self {
        Mat3::create_rotation(axis, angle).into()
    }

    /// Create a rotation matrix from euler angles: `head` around the y-axis, `pitch` around the x-axis and `roll` around the z-axis
    pub fn create_rotation_euler(angles: EulerAngles<T>) -> Self {
        let (b, a) = angles.pitch.sin_cos();
        let (d, c) = angles.head.sin_cos();
        let (f, e) = angles.roll.sin_cos();

        let ad = a * d;
        let bd = b * d;

        let zero = T::zero();
        let one = T::one();

        Self::new( c * e          , -c * f          ,  d    , zero,
                   bd * e + a * f , -bd * f + a * e , -b * c, zero,
                  -ad * e + b * f ,  ad * f + b * e ,  a * c, zero,
                   zero           ,  zero           ,  zero , one )
    }

    /// Create a right-handed view matrix looking from `eye` at `center`, with `up` as the rough up direction.
    ///
    /// Equal to the matrix produced by the classic `gluLookAt`.
    pub fn create_look_at(eye: Vec3<T>, center: Vec3<T>, up: Vec3<T>) -> Self {
        let forward = (center - eye).normalized();
        let side = forward.cross(up).normalized();
        let up = side.cross(forward);

        let zero = T::zero();
        let one = T::one();

        Self::new( side.x   ,  side.y   ,  side.z   , -side.dot(eye),
                   up.x     ,  up.y     ,  up.z     , -up.dot(eye)  ,
                  -forward.x, -forward.y, -forward.z,  forward.dot(eye),
                   zero     ,  zero     ,  zero     ,  one          )
    }

    /// Create a right-handed perspective projection matrix, mapping the view volume to `[-1, 1]` on every axis.
    ///
    /// Equal to the matrix produced by the classic `gluPerspective`.
    pub fn create_perspective(fov_y: Radians<T>, aspect: T, near: T, far: T) -> Self {
        let two = T::from_i32(2);
        let f = (fov_y / two).tan().rcp();
        let depth = near - far;

        let zero = T::zero();

        Self::new(f / aspect, zero, zero                 , zero                     ,
                  zero      , f   , zero                 , zero                     ,
                  zero      , zero, (far + near) / depth , two * far * near / depth ,
                  zero      , zero, -T::one()            , zero                     )
    }
}

impl<T: Real> From<Mat3<T>> for Mat4<T> {
    fn from(mat: Mat3<T>) -> Self {
        let zero = T::zero();

        Self { vals: [mat[0], mat[1], mat[2], zero,
                      mat[3], mat[4], mat[5], zero,
                      mat[6], mat[7], mat[8], zero,
                      zero  , zero  , zero  , T::one()] }
    }
}

impl<T: Real> Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;

    #[inline]
    fn mul(self, rhs: Vec4<T>) -> Self::Output {
        self.transform(rhs)
    }
}

impl<T: Real + Display> Display for Mat4<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[[{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}]]",
                    self[0], self[4], self[ 8], self[12],
                    self[1], self[5], self[ 9], self[13],
                    self[2], self[6], self[10], self[14],
                    self[3], self[7], self[11], self[15]))
    }
}

#[allow(non_camel_case_types)] pub type f32m4 = Mat4<f32>;
#[allow(non_camel_case_types)] pub type f64m4 = Mat4<f64>;
