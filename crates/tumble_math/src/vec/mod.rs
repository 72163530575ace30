use std::ops::*;
use crate::{
    numeric::*,
    MathError,
};

mod vec3;
mod vec4;

macro_rules! generic_vec {
    {
        $docs:meta;
        $name:ident,
        $elem_cnt:literal,
        $($comp:ident),+;
        $($alias_ty:ident => $base_ty:ty),*
    } => {
        #[$docs]
        #[repr(C)]
        #[derive(Clone, Copy, PartialEq, Debug, Default)]
        pub struct $name<T: Copy> {
            $(pub $comp: T,)+
        }

        impl<T: Copy> $name<T> {
            /// Create a new vector
            #[inline(always)]
            #[must_use]
            pub fn new($($comp: T),+) -> Self {
                Self{ $($comp: $comp),+ }
            }

            /// Create a vector with all components set to `val`
            #[inline(always)]
            #[must_use]
            pub fn set(val: T) -> Self {
                Self{ $($comp: val),+ }
            }

            /// Overwrite all components of the vector
            #[inline(always)]
            pub fn assign(&mut self, $($comp: T),+) {
                $(self.$comp = $comp;)+
            }

            /// Create a vector from an array
            #[inline(always)]
            #[must_use]
            pub fn from_array(arr: [T; $elem_cnt]) -> Self {
                let [$($comp),+] = arr;
                Self{ $($comp),+ }
            }

            /// Get the content of the vector as an array
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $elem_cnt] {
                [$(self.$comp),+]
            }

            /// Interpret a reference to an vector as a reference to a array
            #[inline(always)]
            #[must_use]
            pub fn as_array(&self) -> &[T; $elem_cnt] {
                // SAFETY: `#[repr(C)]` with only `T` fields has the same layout as `[T; N]`
                unsafe { &*(self as *const Self as *const [T; $elem_cnt]) }
            }

            /// Interpret a mutable reference to an vector as a mutable reference to a array
            #[inline(always)]
            #[must_use]
            pub fn as_mut_array(&mut self) -> &mut [T; $elem_cnt] {
                // SAFETY: `#[repr(C)]` with only `T` fields has the same layout as `[T; N]`
                unsafe { &mut *(self as *mut Self as *mut [T; $elem_cnt]) }
            }

            /// Get a pointer to the first component, for handing the vector to a graphics API
            #[inline(always)]
            pub fn as_ptr(&self) -> *const T {
                self.as_array().as_ptr()
            }

            /// Get the component at `index`, or an error when `index` is out of range
            #[inline]
            pub fn get(&self, index: usize) -> Result<T, MathError> {
                self.as_array().get(index).copied().ok_or(MathError::IndexOutOfRange { index, len: $elem_cnt })
            }

            /// Get a mutable reference to the component at `index`, or an error when `index` is out of range
            #[inline]
            pub fn get_mut(&mut self, index: usize) -> Result<&mut T, MathError> {
                self.as_mut_array().get_mut(index).ok_or(MathError::IndexOutOfRange { index, len: $elem_cnt })
            }
        }

        impl<T: Numeric> $name<T> {
            /// Calculate the dot product of 2 vectors
            #[inline]
            pub fn dot(self, rhs: Self) -> T {
                crate::utils::strip_plus!($(+ self.$comp * rhs.$comp)+)
            }

            /// Calculate the square length of the vector
            #[inline]
            pub fn len_sq(self) -> T {
                self.dot(self)
            }

            /// Calculate the length of the vector
            #[inline]
            pub fn len(self) -> T {
                self.len_sq().sqrt()
            }

            /// Calculate the square distance between 2 vectors
            pub fn dist_sq(self, other: Self) -> T {
                (other - self).len_sq()
            }

            /// Calculate the distance between 2 vectors
            pub fn dist(self, other: Self) -> T {
                self.dist_sq(other).sqrt()
            }

            /// Normalize the vector in place.
            ///
            /// The vector must not have a length of 0, no check is done.
            #[inline]
            pub fn normalize(&mut self) {
                *self = self.normalized();
            }

            /// Get a normalized copy of the vector.
            ///
            /// The vector must not have a length of 0, no check is done.
            #[inline]
            #[must_use]
            pub fn normalized(self) -> Self {
                self / self.len()
            }

            /// Normalize the vector if the length is not 0, return `or` otherwise
            pub fn normalize_or(self, or: Self) -> Self {
                if self.len_sq().is_zero() {
                    or
                } else {
                    self.normalized()
                }
            }

            /// Check if the vector is close to being normalized, using a given epsilon, which defines the max difference `len` can be relative to 1
            pub fn is_close_to_normalized(self, epsilon: T) -> bool {
                self.len_sq().is_close_to(T::one(), epsilon)
            }

            /// Ckeck if the vector is normalized, using the machine epsilon
            pub fn is_normalized(self) -> bool {
                self.len_sq().is_approx_eq(T::one())
            }
        }

        impl<T: Copy> Index<usize> for $name<T> {
            type Output = T;

            #[inline(always)]
            fn index(&self, index: usize) -> &Self::Output {
                &self.as_array()[index]
            }
        }

        impl<T: Copy> IndexMut<usize> for $name<T> {
            #[inline(always)]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.as_mut_array()[index]
            }
        }

        impl<T: Copy + Zero> Zero for $name<T> {
            fn zero() -> Self {
                Self{ $($comp: T::zero()),+ }
            }
        }

        impl<T: Copy + One> One for $name<T> {
            fn one() -> Self {
                Self{ $($comp: T::one()),+ }
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Copy + Add<Output = T>> Add for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp + rhs.$comp),+ }
            }
        }

        impl<T: Copy + AddAssign> AddAssign for $name<T> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$comp += rhs.$comp;)+
            }
        }

        //--------------------------------------------------------------

        impl<T: Copy + Sub<Output = T>> Sub for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp - rhs.$comp),+ }
            }
        }

        impl<T: Copy + SubAssign> SubAssign for $name<T> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$comp -= rhs.$comp;)+
            }
        }

        //--------------------------------------------------------------

        impl<T: Copy + Mul<Output = T>> Mul for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp * rhs.$comp),+ }
            }
        }

        impl<T: Copy + MulAssign> MulAssign for $name<T> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: Self) {
                $(self.$comp *= rhs.$comp;)+
            }
        }

        impl<T: Copy + Mul<Output = T>> Mul<T> for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: T) -> Self {
                Self{ $($comp: self.$comp * rhs),+ }
            }
        }

        impl<T: Copy + MulAssign> MulAssign<T> for $name<T> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$comp *= rhs;)+
            }
        }

        // We can't implement pre-multipy genericly here, so `impl_vec_premul` is used instead

        //--------------------------------------------------------------

        impl<T: Copy + Div<Output = T>> Div for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp / rhs.$comp),+ }
            }
        }

        impl<T: Copy + DivAssign> DivAssign for $name<T> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: Self) {
                $(self.$comp /= rhs.$comp;)+
            }
        }

        impl<T: Copy + Div<Output = T>> Div<T> for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: T) -> Self {
                Self{ $($comp: self.$comp / rhs),+ }
            }
        }

        impl<T: Copy + DivAssign> DivAssign<T> for $name<T> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: T) {
                $(self.$comp /= rhs;)+
            }
        }

        //--------------------------------------------------------------

        impl<T: Copy + Neg<Output = T>> Neg for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self{ $($comp: -self.$comp),+ }
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Numeric> ApproxEq for $name<T> {
            type Epsilon = T;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                $(self.$comp.is_close_to(rhs.$comp, epsilon))&&+
            }
        }

        impl<T: Numeric> ApproxZero for $name<T> {
            type Epsilon = T;

            fn is_close_to_zero(self, epsilon: T) -> bool {
                $(self.$comp.is_close_to_zero(epsilon))&&+
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Copy> From<[T; $elem_cnt]> for $name<T> {
            fn from(arr: [T; $elem_cnt]) -> Self {
                Self::from_array(arr)
            }
        }

        impl<T: Copy> From<$name<T>> for [T; $elem_cnt] {
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        // Serialized as a plain array, e.g. `position = [0.0, 5.0, 50.0]`
        #[cfg(feature = "serde")]
        impl<T: Copy + serde::Serialize> serde::Serialize for $name<T> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.to_array().serialize(serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de, T: Copy + serde::Deserialize<'de>> serde::Deserialize<'de> for $name<T> {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <[T; $elem_cnt]>::deserialize(deserializer).map(Self::from_array)
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        $(
            #[allow(non_camel_case_types)]
            pub type $alias_ty = $name<$base_ty>;
        )*
    };
}

generic_vec!{ doc = "3D Vector"; Vec3, 3, x, y, z; i32v3 => i32, f32v3 => f32, f64v3 => f64 }
generic_vec!{ doc = "4D Vector, also used for homogeneous coordinates and planes"; Vec4, 4, x, y, z, w; i32v4 => i32, f32v4 => f32, f64v4 => f64 }

macro_rules! impl_vec_premul {
    ($iden:ident, $($ty:ty)*) => {
        $(
            impl Mul<$iden<$ty>> for $ty {
                type Output = $iden<$ty>;

                fn mul(self, rhs: $iden<$ty>) -> $iden<$ty> {
                    rhs * self
                }
            }
        )*
    };
}
impl_vec_premul!{ Vec3, i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 }
impl_vec_premul!{ Vec4, i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 }
