use core::ops::*;
use std::fmt::Display;
use crate::*;

/// Quaternion, stored as an imaginary part and a real part.
///
/// Only quaternions with a norm of 1 represent rotations.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Quat<T: Real> {
    pub img  : Vec3<T>,
    pub real : T,
}

impl<T: Real> Quat<T> {
    /// Create a new quaternion from its imaginary and real part
    #[inline]
    #[must_use]
    pub fn new(img: Vec3<T>, real: T) -> Self {
        Self { img, real }
    }

    /// Create a new quaternion from its 4 components, `w` being the real part
    #[inline]
    #[must_use]
    pub fn from_xyzw(x: T, y: T, z: T, w: T) -> Self {
        Self { img: Vec3::new(x, y, z), real: w }
    }

    /// Create an identity quaternion
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        Self { img: Vec3::zero(), real: T::one() }
    }

    /// Reset the quaternion to the identity
    #[inline]
    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    /// Create a quaternion rotating `angle` around `axis`, `axis` should be normalized
    #[must_use]
    pub fn from_axis_angle(axis: Vec3<T>, angle: Radians<T>) -> Self {
        let (sin, cos) = (angle / T::from_i32(2)).sin_cos();
        Self { img: axis * sin, real: cos }
    }

    /// Create a quaternion from euler angles (`head` around y, `pitch` around x, `roll` around z)
    pub fn from_euler(angles: EulerAngles<T>) -> Self {
        let two = T::from_i32(2);
        let (s1, c1) = (angles.head / two).sin_cos();
        let (s2, c2) = (angles.roll / two).sin_cos();
        let (s3, c3) = (angles.pitch / two).sin_cos();

        let c1c2 = c1 * c2;
        let s1s2 = s1 * s2;

        Self {
            img: Vec3 {
                x: c1c2 * s3 + s1s2 * c3,
                y: s1 * c2 * c3 + c1 * s2 * s3,
                z: c1 * s2 * c3 - s1 * c2 * s3,
            },
            real: c1c2 * c3 - s1s2 * s3,
        }
    }

    /// Create a quaternion from a 3x3 rotation matrix
    pub fn from_matrix(mat: Mat3<T>) -> Self {
        let half = T::from_f32(0.5);
        let trace = mat.trace();

        if trace > T::zero() {
            let s = (trace + T::one()).sqrt();
            let real = s * half;
            let s = half / s;
            return Self {
                img: Vec3 { x: (mat[5] - mat[7]) * s,
                            y: (mat[6] - mat[2]) * s,
                            z: (mat[1] - mat[3]) * s },
                real
            };
        }

        const NEXT: [usize; 3] = [1, 2, 0];

        let mut i = 0;
        if mat[4] > mat[0] {
            i = 1;
        }
        if mat[8] > mat[i * 4] {
            i = 2;
        }
        let j = NEXT[i];
        let k = NEXT[j];

        let mut s = (mat[i * 4] - (mat[j * 4] + mat[k * 4]) + T::one()).sqrt();
        let mut img = Vec3::<T>::zero();
        img[i] = s * half;
        if s != T::zero() {
            s = half / s;
        }
        img[j] = (mat[i * 3 + j] + mat[j * 3 + i]) * s;
        img[k] = (mat[i * 3 + k] + mat[k * 3 + i]) * s;
        Self { img, real: (mat[j * 3 + k] - mat[k * 3 + j]) * s }
    }

    /// Get the conjugate of the quaternion
    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self { img: -self.img, real: self.real }
    }

    /// Get the square norm (the sum of the squares of all 4 components)
    #[inline]
    pub fn norm_sq(self) -> T {
        self.img.len_sq() + self.real * self.real
    }

    /// Get the norm
    #[inline]
    pub fn norm(self) -> T {
        self.norm_sq().sqrt()
    }

    /// Normalize the quaternion in place, the norm must not be 0
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Get a normalized copy of the quaternion, the norm must not be 0
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Self {
        self * self.norm().rcp()
    }

    /// Get the inverse of the quaternion, the norm must not be 0
    #[inline]
    #[must_use]
    pub fn inverse(self) -> Self {
        self.conjugate() * self.norm_sq().rcp()
    }

    /// Get the rotation axis
    ///
    /// When the rotation angle is close to 0, the axis is undefined and the imaginary part of the normalized quaternion is returned as is.
    pub fn axis(self) -> Vec3<T> {
        let q = self.normalized();
        let sin = (T::one() - q.real * q.real).max(T::zero()).sqrt();
        if sin.abs() < T::from_f64(AXIS_SIN_EPSILON) {
            q.img
        } else {
            q.img / sin
        }
    }

    /// Get the rotation angle
    pub fn angle(self) -> Radians<T> {
        // Rounding may push the real part of a unit quaternion just outside of [-1, 1]
        let real = self.real.clamp(-T::one(), T::one());
        Radians::acos(real) * T::from_i32(2)
    }

    /// Get the quaternion as a 3x3 rotation matrix
    pub fn to_mat3(self) -> Mat3<T> {
        let s = T::from_i32(2) / self.norm_sq();
        let Vec3 { x, y, z } = self.img;
        let w = self.real;

        let (xs, ys, zs) = (x * s, y * s, z * s);
        let (wx, wy, wz) = (w * xs, w * ys, w * zs);
        let (xx, xy, xz) = (x * xs, x * ys, x * zs);
        let (yy, yz, zz) = (y * ys, y * zs, z * zs);

        let one = T::one();
        Mat3::from_array([one - (yy + zz), xy + wz        , xz - wy        ,
                          xy - wz        , one - (xx + zz), yz + wx        ,
                          xz + wy        , yz - wx        , one - (xx + yy)])
    }

    /// Get the quaternion as a 4x4 rotation matrix
    #[inline]
    pub fn to_mat4(self) -> Mat4<T> {
        self.to_mat3().into()
    }

    /// Rotate a vector by the quaternion
    #[inline]
    pub fn rotate(self, vec: Vec3<T>) -> Vec3<T> {
        self.to_mat3() * vec
    }
}

impl<T: Real> Default for Quat<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> From<Vec4<T>> for Quat<T> {
    fn from(vec: Vec4<T>) -> Self {
        Self { img: vec.xyz(), real: vec.w }
    }
}

impl<T: Real> From<Quat<T>> for Vec4<T> {
    fn from(quat: Quat<T>) -> Self {
        quat.img.extend(quat.real)
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<T: Real> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { img: -self.img, real: -self.real }
    }
}

impl<T: Real> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { img: self.img + rhs.img, real: self.real + rhs.real }
    }
}

impl<T: Real> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { img: self.img - rhs.img, real: self.real - rhs.real }
    }
}

impl<T: Real> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self { img: self.img * rhs, real: self.real * rhs }
    }
}

impl<T: Real> MulAssign<T> for Quat<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Hamilton product, `a * b` applies `b` first, then `a`
impl<T: Real> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            img: self.img.cross(rhs.img) + self.img * rhs.real + rhs.img * self.real,
            real: self.real * rhs.real - self.img.dot(rhs.img),
        }
    }
}

impl<T: Real> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

macro_rules! quat_pre_multiplication {
    {$($ty:ty),*} => {
        $(
            impl Mul<Quat<$ty>> for $ty {
                type Output = Quat<$ty>;

                fn mul(self, rhs: Quat<$ty>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}
quat_pre_multiplication!{f32, f64}

impl<T: Real> ApproxEq for Quat<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool {
        self.img.is_close_to(rhs.img, epsilon) && self.real.is_close_to(rhs.real, epsilon)
    }
}

impl<T: Real + Display> Display for Quat<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}, {})", self.img, self.real))
    }
}

#[allow(non_camel_case_types)] pub type f32quat = Quat<f32>;
#[allow(non_camel_case_types)] pub type f64quat = Quat<f64>;

#[cfg(test)]
mod tests {
    use crate::*;

    fn axes() -> [Vec3<f64>; 5] {
        [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0).normalized(),
            Vec3::new(-0.3, 2.0, 0.7).normalized(),
        ]
    }

    #[test]
    fn test_create() {
        let q = Quat::<f32>::default();
        assert_eq!(q, Quat::new(Vec3::zero(), 1.0));
        assert_eq!(q, Quat::identity());
        assert_eq!(q.to_mat3(), Mat3::identity());

        let q = Quat::from_xyzw(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(q.img, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(q.real, 4.0);
        assert_eq!(Quat::from(Vec4::new(1.0, 2.0, 3.0, 4.0)), q);
        assert_eq!(Vec4::from(q), Vec4::new(1.0, 2.0, 3.0, 4.0));

        let mut q = q;
        q.set_identity();
        assert_eq!(q, Quat::identity());
    }

    #[test]
    fn test_norm() {
        let q = Quat::from_xyzw(1.0f64, 2.0, 2.0, 4.0);
        assert_eq!(q.norm_sq(), 25.0);
        assert_eq!(q.norm(), 5.0);
        assert!(q.normalized().norm().is_close_to(1.0, 0.000001));

        let mut m = q;
        m.normalize();
        assert_eq!(m, q.normalized());

        assert_eq!(q.conjugate(), Quat::from_xyzw(-1.0, -2.0, -2.0, 4.0));
        assert!((q * q.inverse()).is_close_to(Quat::identity(), 0.000001));
        assert!((q.inverse() * q).is_close_to(Quat::identity(), 0.000001));
    }

    #[test]
    fn test_ops() {
        let a = Quat::from_xyzw(1.0f32, 2.0, 3.0, 4.0);
        let b = Quat::from_xyzw(0.5f32, -1.0, 0.0, 2.0);

        assert_eq!(a + b, Quat::from_xyzw(1.5, 1.0, 3.0, 6.0));
        assert_eq!(a - b, Quat::from_xyzw(0.5, 3.0, 3.0, 2.0));
        assert_eq!(a * 2.0, Quat::from_xyzw(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, a * -1.0);

        let mut c = a;
        c += b;
        c -= b;
        assert_eq!(c, a);
        c *= 0.5;
        assert_eq!(c, a * 0.5);

        // i * j = k, j * i = -k
        let i = Quat::from_xyzw(1.0f32, 0.0, 0.0, 0.0);
        let j = Quat::from_xyzw(0.0f32, 1.0, 0.0, 0.0);
        let k = Quat::from_xyzw(0.0f32, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, Quat::from_xyzw(0.0, 0.0, 0.0, -1.0));

        let mut m = i;
        m *= j;
        assert_eq!(m, k);

        assert_eq!(format!("{}", Quat::from_xyzw(1.0f32, 2.0, 3.0, 4.0)), "((1, 2, 3), 4)");
    }

    #[test]
    fn test_axis_angle() {
        for axis in axes() {
            for angle in [0.3f64, 1.0, 2.5] {
                let q = Quat::from_axis_angle(axis, Radians(angle));
                assert!(q.norm().is_close_to(1.0, 0.000001));
                assert!((q.to_mat3() * axis).is_close_to(axis, 0.000001));
                assert!(q.angle().0.is_close_to(angle, 0.000001));
                assert!(q.axis().is_close_to(axis, 0.000001));
            }
        }

        let q = Quat::<f32>::identity();
        assert_eq!(q.angle(), Radians(0.0));
        assert_eq!(q.axis(), Vec3::zero());
    }

    #[test]
    fn test_rotate() {
        let q = Quat::from_axis_angle(Vec3::new(0.0f32, 0.0, 1.0), Radians(f32::HALF_PI));
        assert!(q.rotate(Vec3::new(1.0, 0.0, 0.0)).is_close_to(Vec3::new(0.0, 1.0, 0.0), 0.00001));
        assert!(q.to_mat4().transform_point(Vec3::new(0.0, 1.0, 0.0)).is_close_to(Vec3::new(-1.0, 0.0, 0.0), 0.00001));

        // Composition applies the right-hand side first
        let a = Quat::from_axis_angle(Vec3::new(0.0f64, 1.0, 0.0), Radians(0.4));
        let b = Quat::from_axis_angle(Vec3::new(1.0f64, 0.0, 0.0), Radians(-1.3));
        assert!((a * b).to_mat3().is_close_to(a.to_mat3() * b.to_mat3(), 0.000001));
    }

    #[test]
    fn test_matrix_conversion() {
        for axis in axes() {
            for angle in [0.2f64, 1.5, 3.0, -2.8] {
                let mat = Mat3::create_rotation(axis, Radians(angle));
                assert!(Quat::from_axis_angle(axis, Radians(angle)).to_mat3().is_close_to(mat, 0.000001));

                let q = Quat::from_matrix(mat);
                assert!(q.norm().is_close_to(1.0, 0.000001));
                assert!(q.to_mat3().is_close_to(mat, 0.000001), "{axis} {angle}: {} vs {}", q.to_mat3(), mat);
            }
        }

        // Half turns have a trace of -1, going through the largest diagonal branch
        for axis in axes() {
            let mat = Mat3::create_rotation(axis, Radians(f64::PI));
            assert!(Quat::from_matrix(mat).to_mat3().is_close_to(mat, 0.000001));
        }
    }

    #[test]
    fn test_unnormalized_matrix() {
        let q = Quat::from_xyzw(0.0f64, 3.0, 0.0, 4.0);
        assert!(q.to_mat3().is_close_to(q.normalized().to_mat3(), 0.000001));
    }

    #[test]
    fn test_euler() {
        let head = Quat::from_euler(EulerAngles::new(Radians(0.7f64), Radians(0.0), Radians(0.0)));
        assert!(head.is_close_to(Quat::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), Radians(0.7)), 0.000001));

        let pitch = Quat::from_euler(EulerAngles::new(Radians(0.0f64), Radians(0.4), Radians(0.0)));
        assert!(pitch.is_close_to(Quat::from_axis_angle(Vec3::new(1.0, 0.0, 0.0), Radians(0.4)), 0.000001));

        let roll = Quat::from_euler(EulerAngles::new(Radians(0.0f64), Radians(0.0), Radians(-1.1)));
        assert!(roll.is_close_to(Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), Radians(-1.1)), 0.000001));

        let all = Quat::from_euler(EulerAngles::new(Radians(0.3f64), Radians(-0.2), Radians(0.9)));
        assert!(all.norm().is_close_to(1.0, 0.000001));
        assert_eq!(Quat::from_euler(EulerAngles::<f32>::default()), Quat::identity());
    }
}
