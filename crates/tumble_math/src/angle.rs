use crate::{Real, ApproxEq, Zero, MathConsts};
use core::ops::*;
use std::fmt::Display;

macro_rules! angle_common {
    {$name:ident} => {
        impl<T: Copy + Add<Output = T>> Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl<T: Copy + AddAssign> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl<T: Copy + Sub<Output = T>> Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl<T: Copy + SubAssign> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        //--------------------------------------------------------------

        impl<T: Copy + Mul<Output = T>> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl<T: Copy + Div<Output = T>> Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl<T: Copy + Neg<Output = T>> Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        //--------------------------------------------------------------

        impl<T: Copy + ApproxEq> ApproxEq for $name<T> {
            type Epsilon = T::Epsilon;

            fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool {
                self.0.is_close_to(rhs.0, epsilon)
            }
        }

        impl<T: Copy + Zero> Zero for $name<T> {
            fn zero() -> Self {
                Self(T::zero())
            }
        }
    };
}

macro_rules! angle_pre_multiplication {
    {$name:ident, $($ty:ty),*} => {
        $(
            impl Mul<$name<$ty>> for $ty {
                type Output = $name<$ty>;

                fn mul(self, rhs: $name<$ty>) -> Self::Output {
                    $name(self * rhs.0)
                }
            }
        )*
    };
}

//------------------------------------------------------------------------------------------------------------------------------

/// An angle represented as degrees
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Degrees<T: Copy>(pub T);
angle_common!{Degrees}
angle_pre_multiplication!{Degrees, f32, f64}

impl<T: Copy + MathConsts + Mul<Output = T>> Degrees<T> {
    /// Convert degrees to radians, using the fixed `pi / 180` factor
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians<T> {
        Radians(self.0 * T::DEG_TO_RAD)
    }
}

impl<T: Real> From<Radians<T>> for Degrees<T> {
    fn from(rads: Radians<T>) -> Self {
        rads.to_degrees()
    }
}

impl<T: Copy + Display> Display for Degrees<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}°", self.0))
    }
}

//------------------------------------------------------------------------------------------------------------------------------

/// An angle represented as radians
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Radians<T: Copy>(pub T);
angle_common!{Radians}
angle_pre_multiplication!{Radians, f32, f64}

impl<T: Copy + MathConsts + Mul<Output = T>> Radians<T> {
    /// Convert radians to degrees
    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> Degrees<T> {
        Degrees(self.0 * T::RAD_TO_DEG)
    }
}

impl<T: Real> Radians<T> {
    /// Calculate the sine of the angle
    #[inline]
    pub fn sin(self) -> T {
        self.0.sin()
    }

    /// Calculate the cosine of the angle
    #[inline]
    pub fn cos(self) -> T {
        self.0.cos()
    }

    /// Calculate the sine and cosine of the angle
    #[inline]
    pub fn sin_cos(self) -> (T, T) {
        self.0.sin_cos()
    }

    /// Calculate the tangent of the angle
    #[inline]
    pub fn tan(self) -> T {
        self.0.tan()
    }

    /// Create an angle from its cosine
    #[inline]
    pub fn acos(val: T) -> Self {
        Self(val.acos())
    }
}

impl<T: Real> From<Degrees<T>> for Radians<T> {
    fn from(degs: Degrees<T>) -> Self {
        degs.to_radians()
    }
}

impl<T: Copy + Display> Display for Radians<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}rads", self.0))
    }
}

//------------------------------------------------------------------------------------------------------------------------------

/// Rotation represented as 3 euler angles (can go into gimbal-lock)
///
/// `head` rotates around the y-axis, `pitch` around the x-axis and `roll` around the z-axis.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct EulerAngles<T: Real> {
    pub head  : Radians<T>,
    pub pitch : Radians<T>,
    pub roll  : Radians<T>,
}

impl<T: Real> EulerAngles<T> {
    /// Create a set of euler angles in radians
    #[inline]
    #[must_use]
    pub fn new(head: Radians<T>, pitch: Radians<T>, roll: Radians<T>) -> Self {
        Self { head, pitch, roll }
    }
}

impl<T: Real> Default for EulerAngles<T> {
    fn default() -> Self {
        Self { head: Radians::zero(), pitch: Radians::zero(), roll: Radians::zero() }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_convert() {
        let rads = Degrees(180.0f32).to_radians();
        assert!(rads.0.is_close_to(f32::PI, 0.00001));

        let degs: Degrees<f64> = Radians(f64::HALF_PI).into();
        assert!(degs.0.is_close_to(90.0, 0.000001));

        let rads: Radians<f32> = Degrees(-45.0).into();
        assert!(rads.is_close_to(Radians(-f32::QUARTER_PI), 0.00001));
    }

    #[test]
    fn test_ops() {
        let a = Degrees(30.0f32);
        let b = Degrees(15.0f32);
        assert_eq!(a + b, Degrees(45.0));
        assert_eq!(a - b, Degrees(15.0));
        assert_eq!(a * 2.0, Degrees(60.0));
        assert_eq!(2.0 * a, Degrees(60.0));
        assert_eq!(a / 3.0, Degrees(10.0));
        assert_eq!(-a, Degrees(-30.0));
    }
}
