use std::ops::*;
use crate::MathConsts;

/// Defines a type which has a 0-value, i.e. the additive identity
pub trait Zero {
    fn zero() -> Self;
}

/// Defines a type which has a 1-value, i.e. the multiplicative identity
pub trait One {
    fn one() -> Self;
}

macro_rules! impl_zero_one {
    {$($ty:ty),*} => {
        $(
            impl Zero for $ty {
                #[inline(always)]
                fn zero() -> Self { 0 as $ty }
            }

            impl One for $ty {
                #[inline(always)]
                fn one() -> Self { 1 as $ty }
            }
        )*
    };
}
impl_zero_one!{ i8, i16, i32, i64, u8, u16, u32, u64, f32, f64 }

/// Defines a type that is a partial implementation of a `Numeric`
pub trait NumericBase : Sized + Clone + Copy + One + Zero + PartialEq + PartialOrd +
                    Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> + Rem<Output = Self> +
                    AddAssign + SubAssign + MulAssign + DivAssign + RemAssign
{
    /// Machine epsilon
    const EPSILON : Self;

    /// Get the minimum of 2 `Numeric`s
    fn min(self, rhs: Self) -> Self;
    /// Get the maximum of 2 `Numeric`s
    fn max(self, rhs: Self) -> Self;

    /// Clamp a value between 2 values
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Calculate the absolute difference of 2 values
    fn abs_diff(self, rhs: Self) -> Self;
    /// Calculate the absolute value
    fn abs(self) -> Self;

    /// Get the sign of the value: 0 for 0, +1 for positive, and -1 for negative
    fn sign(self) -> Self;

    /// Calculate the square root of a value
    fn sqrt(self) -> Self;
    /// Calculate the reciprocal of the value
    fn rcp(self) -> Self {
        Self::one() / self
    }

    /// Create a numeric from an `i32`
    fn from_i32(val: i32) -> Self;
}

macro_rules! impl_numeric {
    {@signed $ty:ty} => {
        impl NumericBase for $ty {
            const EPSILON : Self = 0;

            fn min(self, rhs: Self) -> Self {
                core::cmp::min(self, rhs)
            }

            fn max(self, rhs: Self) -> Self {
                core::cmp::max(self, rhs)
            }

            fn abs_diff(self, rhs: Self) -> Self {
                <$ty>::abs_diff(self, rhs) as $ty
            }

            fn abs(self) -> Self {
                <$ty>::abs(self)
            }

            fn sign(self) -> Self {
                <$ty>::signum(self)
            }

            fn sqrt(self) -> Self {
                (self as f64).sqrt() as $ty
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }
        }
    };
    {@unsigned $ty:ty} => {
        impl NumericBase for $ty {
            const EPSILON : Self = 0;

            fn min(self, rhs: Self) -> Self {
                core::cmp::min(self, rhs)
            }

            fn max(self, rhs: Self) -> Self {
                core::cmp::max(self, rhs)
            }

            fn abs_diff(self, rhs: Self) -> Self {
                <$ty>::abs_diff(self, rhs)
            }

            fn abs(self) -> Self {
                self
            }

            fn sign(self) -> Self {
                if self == 0 { 0 } else { 1 }
            }

            fn sqrt(self) -> Self {
                (self as f64).sqrt() as $ty
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }
        }
    };
    {@fp $ty:ty} => {
        impl NumericBase for $ty {
            const EPSILON : Self = <$ty>::EPSILON;

            fn min(self, rhs: Self) -> Self {
                <$ty>::min(self, rhs)
            }

            fn max(self, rhs: Self) -> Self {
                <$ty>::max(self, rhs)
            }

            fn abs_diff(self, rhs: Self) -> Self {
                (self - rhs).abs()
            }

            fn abs(self) -> Self {
                <$ty>::abs(self)
            }

            fn sign(self) -> Self {
                if self == 0 as $ty { 0 as $ty } else { self.signum() }
            }

            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }
        }
    };
}

impl_numeric!{ @signed i8 }
impl_numeric!{ @signed i16 }
impl_numeric!{ @signed i32 }
impl_numeric!{ @signed i64 }
impl_numeric!{ @unsigned u8 }
impl_numeric!{ @unsigned u16 }
impl_numeric!{ @unsigned u32 }
impl_numeric!{ @unsigned u64 }
impl_numeric!{ @fp f32 }
impl_numeric!{ @fp f64 }

/// Defines a type that can check if it's approximately equal to another value
pub trait ApproxEq : Sized {
    type Epsilon : NumericBase;

    /// Check if `self` is approximately equal to another value, given an `epsilon`
    fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool;

    /// Check if `self` is approximately equal to another, using the machine epsilon
    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, Self::Epsilon::EPSILON)
    }
}

/// Defines a type that can check if it's approximately equal to it's zero identity
pub trait ApproxZero : Sized {
    type Epsilon: NumericBase;

    /// Check if `self` is approximately equal to 0, given an `epsilon`
    fn is_close_to_zero(self, epsilon: Self::Epsilon) -> bool;

    /// Check if `self` is approximately equal to 0, using the machine epsilon
    fn is_zero(self) -> bool {
        self.is_close_to_zero(Self::Epsilon::EPSILON)
    }
}

macro_rules! impl_approx {
    {$($ty:ty),*} => {
        $(
            impl ApproxEq for $ty {
                type Epsilon = $ty;

                fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool {
                    NumericBase::abs_diff(self, rhs) <= epsilon
                }
            }

            impl ApproxZero for $ty {
                type Epsilon = $ty;

                fn is_close_to_zero(self, epsilon: Self::Epsilon) -> bool {
                    NumericBase::abs_diff(self, 0 as $ty) <= epsilon
                }
            }
        )*
    };
}
impl_approx!{ i8, i16, i32, i64, u8, u16, u32, u64, f32, f64 }

/// Defines a type that is numeric
pub trait Numeric : NumericBase + ApproxEq<Epsilon = Self> + ApproxZero<Epsilon = Self> + MathConsts {}

impl Numeric for i8 {}
impl Numeric for i16 {}
impl Numeric for i32 {}
impl Numeric for i64 {}
impl Numeric for u8 {}
impl Numeric for u16 {}
impl Numeric for u32 {}
impl Numeric for u64 {}
impl Numeric for f32 {}
impl Numeric for f64 {}

/// Arithmatic type representing a signed number
pub trait Signed : Numeric + Neg<Output = Self> {}

impl Signed for i8 {}
impl Signed for i16 {}
impl Signed for i32 {}
impl Signed for i64 {}
impl Signed for f32 {}
impl Signed for f64 {}

/// Arithmatic type representing a real number
pub trait Real : Signed + core::fmt::Display + core::fmt::Debug {
    /// Check that the value is neither infinite nor NaN
    fn is_finite(self) -> bool;

    /// Calculate the sine of the value
    fn sin(self) -> Self;
    /// Calculate the cosine of the value
    fn cos(self) -> Self;
    /// Calculate the sine and cosine simultaniously (this may result in a faster calculation)
    fn sin_cos(self) -> (Self, Self);
    /// Calculate the tangent of the value
    fn tan(self) -> Self;
    /// Calculate the arccosine of the value
    fn acos(self) -> Self;

    /// Create a numeric from an f32
    fn from_f32(val: f32) -> Self;
    /// Create a numeric from an f64
    fn from_f64(val: f64) -> Self;
    /// Convert the value to an f64
    fn to_f64(self) -> f64;
}

macro_rules! impl_real {
    {$($ty:ty),*} => {
        $(
            impl Real for $ty {
                fn is_finite(self) -> bool {
                    <$ty>::is_finite(self)
                }

                fn sin(self) -> Self {
                    <$ty>::sin(self)
                }

                fn cos(self) -> Self {
                    <$ty>::cos(self)
                }

                fn sin_cos(self) -> (Self, Self) {
                    <$ty>::sin_cos(self)
                }

                fn tan(self) -> Self {
                    <$ty>::tan(self)
                }

                fn acos(self) -> Self {
                    <$ty>::acos(self)
                }

                fn from_f32(val: f32) -> Self {
                    val as $ty
                }

                fn from_f64(val: f64) -> Self {
                    val as $ty
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}
impl_real!{ f32, f64 }

#[cfg(test)]
mod tests {
    use crate::numeric::*;

    #[test]
    fn test_approx() {
        assert!(1.0f32.is_close_to(1.00001, 0.0001));
        assert!(!1.0f32.is_close_to(1.01, 0.0001));
        assert!(0.0f64.is_zero());
        assert!(5u32.is_close_to(3, 2));
        assert!(!(-5i32).is_close_to(5, 9));
    }

    #[test]
    fn test_numeric_base() {
        assert_eq!(NumericBase::sqrt(16i32), 4);
        assert_eq!(NumericBase::sign(-3.0f32), -1.0);
        assert_eq!(NumericBase::sign(0.0f32), 0.0);
        assert_eq!(NumericBase::clamp(7u8, 1, 5), 5);
        assert_eq!(NumericBase::rcp(4.0f64), 0.25);
    }
}
