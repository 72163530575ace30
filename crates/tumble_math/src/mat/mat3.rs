use std::{ops::Mul, fmt::Display};
use crate::*;

impl<T: Real> Mat3<T> {
    /// Create a new matrix with the given values, written row by row (`mRC` is row `R`, column `C`)
    #[inline]
    #[must_use]
    pub fn new(m00: T, m01: T, m02: T, m10: T, m11: T, m12: T, m20: T, m21: T, m22: T) -> Self {
        Self { vals: [m00, m10, m20,
                      m01, m11, m21,
                      m02, m12, m22] }
    }

    /// Create a new matrix with the given rows
    #[inline]
    #[must_use]
    pub fn from_rows(row0: Vec3<T>, row1: Vec3<T>, row2: Vec3<T>) -> Self {
        Self { vals: [row0.x, row1.x, row2.x,
                      row0.y, row1.y, row2.y,
                      row0.z, row1.z, row2.z] }
    }

    /// Create a new matrix with the given columns
    #[inline]
    #[must_use]
    pub fn from_columns(column0: Vec3<T>, column1: Vec3<T>, column2: Vec3<T>) -> Self {
        Self { vals: [column0.x, column0.y, column0.z,
                      column1.x, column1.y, column1.z,
                      column2.x, column2.y, column2.z] }
    }

    /// Get the row at the given index
    #[inline]
    #[must_use]
    pub fn row(self, index: usize) -> Vec3<T> {
        debug_assert!(index < 3);
        Vec3::new(self.vals[index], self.vals[index + 3], self.vals[index + 6])
    }

    /// Get the column at the given index
    #[inline]
    #[must_use]
    pub fn column(self, index: usize) -> Vec3<T> {
        debug_assert!(index < 3);
        let idx = index * 3;
        Vec3::new(self.vals[idx], self.vals[idx + 1], self.vals[idx + 2])
    }

    /// Get the diagonal
    #[inline]
    #[must_use]
    pub fn diagonal(self) -> Vec3<T> {
        Vec3 { x: self.vals[0], y: self.vals[4], z: self.vals[8] }
    }

    /// Calculate the minor of the element at (`row`, `column`): the determinant of the 2x2 matrix left after removing that row and column
    pub fn minor(self, row: usize, column: usize) -> T {
        debug_assert!(row < 3);
        debug_assert!(column < 3);

        let (r0, r1) = match row { 0 => (1, 2), 1 => (0, 2), _ => (0, 1) };
        let (c0, c1) = match column { 0 => (1, 2), 1 => (0, 2), _ => (0, 1) };
        self[(r0, c0)] * self[(r1, c1)] - self[(r0, c1)] * self[(r1, c0)]
    }

    /// Calculate the determinant, expanding along the first column
    pub fn determinant(self) -> T {
        self[0] * (self[4] * self[8] - self[7] * self[5]) -
        self[1] * (self[3] * self[8] - self[6] * self[5]) +
        self[2] * (self[3] * self[7] - self[6] * self[4])
    }

    /// Transform a `Vec3`
    pub fn transform(self, vec: Vec3<T>) -> Vec3<T> {
        self.column(0) * vec.x + self.column(1) * vec.y + self.column(2) * vec.z
    }

    /// Create a 3d scale matrix
    pub fn create_scale(scale: Vec3<T>) -> Self {
        let zero = T::zero();

        Self::new(scale.x, zero   , zero   ,
                  zero   , scale.y, zero   ,
                  zero   , zero   , scale.z)
    }

    /// Create a matrix rotating `angle` around `axis` (counter-clockwise when looking down the axis), `axis` must be normalized
    pub fn create_rotation(axis: Vec3<T>, angle: Radians<T>) -> Self {
        let (sin, cos) = angle.sin_cos();
        let t = T::one() - cos;
        let Vec3 { x, y, z } = axis;

        Self::new(cos + t * x * x    , t * x * y - z * sin, t * x * z + y * sin,
                  t * x * y + z * sin, cos + t * y * y    , t * y * z - x * sin,
                  t * x * z - y * sin, t * y * z + x * sin, cos + t * z * z    )
    }

    /// Interpolate between 2 rotation matrices.
    ///
    /// The relative rotation `start^T * finish` is converted to an axis and angle, and `start` is rotated by `t` times that angle.
    /// A `t` of 0 returns `start`, a `t` of 1 returns `finish`.
    pub fn interpolate(start: Self, finish: Self, t: T) -> Self {
        let relative = Quat::from_matrix(start.transposed() * finish);
        start * Self::create_rotation(relative.axis(), relative.angle() * t)
    }
}

impl<T: Real> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        self.transform(rhs)
    }
}

impl<T: Real + Display> Display for Mat3<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[[{}, {}, {}], [{}, {}, {}], [{}, {}, {}]]",
                    self[0], self[3], self[6],
                    self[1], self[4], self[7],
                    self[2], self[5], self[8]))
    }
}

#[allow(non_camel_case_types)] pub type f32m3 = Mat3<f32>;
#[allow(non_camel_case_types)] pub type f64m3 = Mat3<f64>;

#[cfg(test)]
mod tests {
    use crate::*;

    fn sample() -> Mat3<f32> {
        Mat3::new(2.0, 0.0, 1.0,
                  1.0, 3.0, 2.0,
                  1.0, 1.0, 2.0)
    }

    #[test]
    fn test_create_convert() {
        let mat = Mat3::new(1.0f32, 2.0, 3.0,
                            4.0, 5.0, 6.0,
                            7.0, 8.0, 9.0);

        // column-major storage
        assert_eq!(mat.to_array(), [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
        assert_eq!(mat[(0, 1)], 2.0);
        assert_eq!(mat[(2, 0)], 7.0);
        assert_eq!(mat[1], 4.0);
        assert_eq!(mat.row(1), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(mat.column(2), Vec3::new(3.0, 6.0, 9.0));
        assert_eq!(mat.diagonal(), Vec3::new(1.0, 5.0, 9.0));
        assert_eq!(mat.trace(), 15.0);

        assert_eq!(Mat3::from_rows(mat.row(0), mat.row(1), mat.row(2)), mat);
        assert_eq!(Mat3::from_columns(mat.column(0), mat.column(1), mat.column(2)), mat);
        assert_eq!(Mat3::from_array(mat.to_array()), mat);

        assert_eq!(mat.get(8), Ok(9.0));
        assert_eq!(mat.get(9), Err(MathError::IndexOutOfRange { index: 9, len: 9 }));

        assert_eq!(Mat3::<f32>::default(), Mat3::identity());
        let mut other = Mat3::<f32>::identity();
        other.assign(mat);
        assert_eq!(other, mat);
        other.set_identity();
        assert_eq!(other, Mat3::identity());
    }

    #[test]
    fn test_ops() {
        let a = sample();
        let i = Mat3::<f32>::identity();

        assert_eq!(a * i, a);
        assert_eq!(i * a, a);
        assert_eq!(a + a, a * 2.0);
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a - a, Mat3::zero());
        assert_eq!(-a, a * -1.0);
        assert_eq!((a * 4.0) / 4.0, a);

        let b = Mat3::new(0.0f32, 1.0, 0.0,
                          -1.0, 0.0, 0.0,
                          0.0, 0.0, 1.0);
        let expected = Mat3::new(0.0, 2.0, 1.0,
                                 -3.0, 1.0, 2.0,
                                 -1.0, 1.0, 2.0);
        assert_eq!(a * b, expected);

        let mut c = a;
        c *= b;
        assert_eq!(c, expected);
        c += a;
        assert_eq!(c, expected + a);
        c -= a;
        assert_eq!(c, expected);
        c *= 0.5;
        assert_eq!(c, expected * 0.5);
    }

    #[test]
    fn test_transpose() {
        let a = sample();
        let t = a.transposed();
        assert_eq!(t.row(0), a.column(0));
        assert_eq!(t.transposed(), a);

        let mut m = a;
        m.transpose();
        assert_eq!(m, t);
    }

    #[test]
    fn test_determinant_inverse() {
        let a = sample();
        assert_eq!(a.determinant(), 6.0);
        assert_eq!(a.transposed().determinant(), a.determinant());

        let inv = a.inverse();
        assert!((a * inv).is_close_to(Mat3::identity(), 0.0001));
        assert!((inv * a).is_close_to(Mat3::identity(), 0.0001));

        let mut m = a;
        m.invert();
        assert_eq!(m, inv);

        assert_eq!(Mat3::<f32>::identity().inverse(), Mat3::identity());
    }

    #[test]
    fn test_singular_inverse() {
        let singular = Mat3::new(1.0f32, 2.0, 3.0,
                                 4.0, 5.0, 6.0,
                                 7.0, 8.0, 9.0);
        assert!(singular.is_near_singular());
        assert_eq!(singular.inverse(), Mat3::identity());

        // Determinant of 0.0004, inside the singular band
        let tiny = Mat3::create_scale(Vec3::new(0.1f32, 0.1, 0.04));
        assert_eq!(tiny.inverse(), Mat3::identity());

        // Determinant of 0.001, outside the singular band
        let small = Mat3::create_scale(Vec3::new(0.1f32, 0.1, 0.1));
        assert!(!small.is_near_singular());
        assert!(small.inverse().is_close_to(Mat3::create_scale(Vec3::set(10.0)), 0.001));

        let mut m = singular;
        m.invert();
        assert_eq!(m, Mat3::identity());
    }

    #[test]
    fn test_singular_band_edges() {
        // The band is open, a determinant of exactly +-0.0005 is still inverted
        let edge = Mat3::create_scale(Vec3::new(0.0005f64, 1.0, 1.0));
        assert!(!edge.is_near_singular());
        assert_ne!(edge.inverse(), Mat3::identity());
        assert!(edge.inverse().is_close_to(Mat3::create_scale(Vec3::new(2000.0, 1.0, 1.0)), 0.000001));

        let neg_edge = Mat3::create_scale(Vec3::new(-0.0005f64, 1.0, 1.0));
        assert!(!neg_edge.is_near_singular());
        assert!(neg_edge.inverse().is_close_to(Mat3::create_scale(Vec3::new(-2000.0, 1.0, 1.0)), 0.000001));

        let inside = Mat3::create_scale(Vec3::new(0.000499f64, 1.0, 1.0));
        assert!(inside.is_near_singular());
        assert_eq!(inside.inverse(), Mat3::identity());
    }

    #[test]
    fn test_transform() {
        let rot = Mat3::create_rotation(Vec3::new(0.0f32, 0.0, 1.0), Radians(f32::HALF_PI));
        let v = rot * Vec3::new(1.0, 0.0, 0.0);
        assert!(v.is_close_to(Vec3::new(0.0, 1.0, 0.0), 0.00001));
        assert_eq!(Vec3::new(1.0, 0.0, 0.0).transform(rot), v);

        let axis = Vec3::new(1.0f32, 2.0, -1.0).normalized();
        let rot = Mat3::create_rotation(axis, Radians(1.2));
        assert!((rot * axis).is_close_to(axis, 0.00001));
        assert!(rot.determinant().is_close_to(1.0, 0.0001));
        assert!((rot * rot.transposed()).is_close_to(Mat3::identity(), 0.0001));
    }

    #[test]
    fn test_interpolate() {
        let axis = Vec3::new(0.0f32, 1.0, 0.0);
        let start = Mat3::create_rotation(axis, Radians(0.2));
        let finish = Mat3::create_rotation(axis, Radians(1.0));

        assert!(Mat3::interpolate(start, finish, 0.0).is_close_to(start, 0.0001));
        assert!(Mat3::interpolate(start, finish, 1.0).is_close_to(finish, 0.0001));
        assert!(Mat3::interpolate(start, finish, 0.5).is_close_to(Mat3::create_rotation(axis, Radians(0.6)), 0.0001));
    }
}
