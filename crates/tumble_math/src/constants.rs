/// Trait that defines common math constants
pub trait MathConsts {
    /// pi
    const PI : Self;
    /// pi / 2
    const HALF_PI : Self;
    /// pi / 4
    const QUARTER_PI : Self;

    /// pi / 180
    const DEG_TO_RAD : Self;
    /// 180 / pi
    const RAD_TO_DEG : Self;
}

macro_rules! impl_math_constants {
    {$($ty:ty),*} => {
        $(
            impl MathConsts for $ty {
                const PI                : $ty = 3.14159265358979323846264338327950288 as $ty;
                const HALF_PI           : $ty = 1.57079632679489661923132169163975144 as $ty;
                const QUARTER_PI        : $ty = 0.785398163397448309615660845819875721 as $ty;

                const DEG_TO_RAD        : $ty = (3.14159265358979323846264338327950288f64 / 180.0) as $ty;
                const RAD_TO_DEG        : $ty = (180.0 / 3.14159265358979323846264338327950288f64) as $ty;
            }
        )*
    };
}

impl_math_constants!{ i8, i16, i32, i64, u8, u16, u32, u64, f32, f64 }

/// Half-width of the determinant band around 0 in which a matrix is treated as singular.
///
/// `inverse` and `invert` return the identity matrix for any determinant in `(-0.0005, 0.0005)`.
pub const SINGULAR_DETERMINANT_BAND : f64 = 0.0005;

/// Below this magnitude, `sin(angle / 2)` is replaced by 1 when recovering a quaternion's axis.
pub const AXIS_SIN_EPSILON : f64 = 0.00005;
