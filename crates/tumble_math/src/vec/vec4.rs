use std::fmt::Display;
use crate::*;

impl<T: Copy> Vec4<T> {
    /// Shrink a `Vec4` to a `Vec3`, dropping `w`
    #[inline]
    #[must_use]
    pub fn xyz(self) -> Vec3<T> {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }
}

impl<T: Real> Vec4<T> {
    /// Normalize a plane stored as `(a, b, c, d)`, so that `(a, b, c)` is a unit normal.
    ///
    /// All 4 components are divided by the length of the normal, which must not be 0.
    #[must_use]
    pub fn normalize_plane(self) -> Self {
        self / self.xyz().len()
    }

    /// Transform the vector by a matrix
    #[inline(always)]
    pub fn transform(self, mat: Mat4<T>) -> Self {
        mat.transform(self)
    }
}

impl<T: Copy + Display> Display for Vec4<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {}, {})", self.x, self.y, self.z, self.w))
    }
}
