use std::{
    ops::*,
    fmt::Display
};
use crate::*;

impl<T: Copy> Vec3<T> {
    /// Extend a `Vec3` to a `Vec4`
    #[inline]
    #[must_use]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4 { x: self.x, y: self.y, z: self.z, w }
    }

    /// Calculate the cross product of 2 vectors (right-hand rule)
    #[inline]
    pub fn cross(self, rhs: Self) -> Self where
        T: Sub<Output = T> + Mul<Output = T>
    {
        Vec3 { x: self.y * rhs.z - self.z * rhs.y,
               y: self.z * rhs.x - self.x * rhs.z,
               z: self.x * rhs.y - self.y * rhs.x }
    }
}

impl<T: Real> Vec3<T> {
    /// Transform the vector by a matrix
    #[inline(always)]
    pub fn transform(self, mat: Mat3<T>) -> Self {
        mat.transform(self)
    }
}

impl<T: Copy + Display> Display for Vec3<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {})", self.x, self.y, self.z))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_create_convert() {
        let vec = Vec3{ x: 1, y: 2, z: 3 };
        assert_eq!(vec.x, 1);
        assert_eq!(vec.y, 2);
        assert_eq!(vec.z, 3);

        let vec = Vec3::new(1, 2, 3);
        assert_eq!(vec.to_array(), [1, 2, 3]);

        let vec = Vec3::set(1);
        assert_eq!(vec, Vec3::new(1, 1, 1));

        let vec: Vec3<_> = [4, 5, 6].into();
        assert_eq!(vec, Vec3::new(4, 5, 6));
        assert_eq!(vec.as_array(), &[4, 5, 6]);

        let mut vec = Vec3::new(0.0f32, 0.0, 0.0);
        vec.assign(1.0, 2.0, 3.0);
        assert_eq!(vec, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(vec.extend(4.0), Vec4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_index() {
        let mut vec = Vec3::new(1, 2, 3);
        assert_eq!(vec[0], 1);
        assert_eq!(vec[1], 2);
        assert_eq!(vec[2], 3);

        vec[1] = 7;
        assert_eq!(vec.y, 7);

        assert_eq!(vec.get(2), Ok(3));
        assert_eq!(vec.get(3), Err(MathError::IndexOutOfRange { index: 3, len: 3 }));

        if let Ok(z) = vec.get_mut(2) {
            *z = 9;
        }
        assert_eq!(vec.z, 9);
        assert!(vec.get_mut(5).is_err());
    }

    #[test]
    fn test_ops() {
        let a = Vec3::new(1.0f32, 2.0, 3.0);
        let b = Vec3::new(4.0f32, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vec3::new(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
        c *= 3.0;
        assert_eq!(c, a * 3.0);
        c /= 3.0;
        assert_eq!(c, a);
    }

    #[test]
    fn test_len_dot() {
        let v = Vec3::new(2.0f32, 3.0, 6.0);
        assert_eq!(v.len_sq(), 49.0);
        assert_eq!(v.len(), 7.0);
        assert_eq!(v.dot(Vec3::new(1.0, 0.0, -1.0)), -4.0);
        assert_eq!(v.dist(Vec3::new(2.0, 3.0, 0.0)), 6.0);
    }

    #[test]
    fn test_normalize() {
        let vecs = [
            Vec3::new(3.0f32, 4.0, 0.0),
            Vec3::new(-0.001, 0.002, 0.0005),
            Vec3::new(1000.0, -250.0, 12.5),
        ];

        for v in vecs {
            let n = v.normalized();
            assert!(n.len().is_close_to(1.0, 0.00001), "{v} normalized to {n}");
            assert!(n.dot(v) > 0.0);
            assert!(n.dot(v).is_close_to(v.len(), v.len() * 0.00001));

            let mut m = v;
            m.normalize();
            assert_eq!(m, n);
            assert!(m.is_close_to_normalized(0.0001));
        }

        let zero = Vec3::new(0.0f32, 0.0, 0.0);
        let fallback = Vec3::new(0.0f32, 1.0, 0.0);
        assert_eq!(zero.normalize_or(fallback), fallback);
    }

    #[test]
    fn test_cross() {
        let x = Vec3::new(1.0f32, 0.0, 0.0);
        let y = Vec3::new(0.0f32, 1.0, 0.0);
        let z = Vec3::new(0.0f32, 0.0, 1.0);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);

        let pairs = [
            (Vec3::new(1.0f32, 2.0, 3.0), Vec3::new(-4.0, 0.5, 2.0)),
            (Vec3::new(0.3f32, -7.0, 1.5), Vec3::new(2.0, 2.0, -9.0)),
        ];

        for (a, b) in pairs {
            let c = a.cross(b);
            assert!(c.dot(a).is_close_to(0.0, 0.0001));
            assert!(c.dot(b).is_close_to(0.0, 0.0001));
            assert_eq!(c, -b.cross(a));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Vec3::new(1, -2, 3)), "(1, -2, 3)");
    }
}
