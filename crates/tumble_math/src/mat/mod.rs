use crate::*;

use core::ops::*;

mod mat3;
pub use mat3::*;

mod mat4;
pub use mat4::*;

macro_rules! matrix_pre_multiplication {
    {$name:ident, $($ty:ty),*} => {
        $(
            impl Mul<$name<$ty>> for $ty {
                type Output = $name<$ty>;

                fn mul(self, rhs: $name<$ty>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

/// Square matrix with `$n` rows and columns, stored column-major: element (row, column) lives at `column * $n + row`
macro_rules! generic_matrix {
    {$docs:meta; $name:ident, $n:literal} => {
        #[$docs]
        #[derive(Clone, Copy, PartialEq, Debug)]
        pub struct $name<T: Real> {
            vals : [T; $n * $n]
        }

        impl<T: Real> $name<T> {
            /// Create a matrix from an array in column-major order
            #[inline(always)]
            #[must_use]
            pub fn from_array(vals: [T; $n * $n]) -> Self {
                Self { vals }
            }

            /// Get the content of the matrix as a column-major array
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $n * $n] {
                self.vals
            }

            /// Get a reference to the column-major backing store
            #[inline(always)]
            #[must_use]
            pub fn as_array(&self) -> &[T; $n * $n] {
                &self.vals
            }

            /// Get a mutable reference to the column-major backing store
            #[inline(always)]
            #[must_use]
            pub fn as_mut_array(&mut self) -> &mut [T; $n * $n] {
                &mut self.vals
            }

            /// Get a pointer to the first element, for uploading the matrix to a graphics API expecting column-major data
            #[inline(always)]
            pub fn as_ptr(&self) -> *const T {
                self.vals.as_ptr()
            }

            /// Get the element at the flat column-major `index`, or an error when `index` is out of range
            #[inline]
            pub fn get(&self, index: usize) -> Result<T, MathError> {
                self.vals.get(index).copied().ok_or(MathError::IndexOutOfRange { index, len: $n * $n })
            }

            /// Get a mutable reference to the element at the flat column-major `index`, or an error when `index` is out of range
            #[inline]
            pub fn get_mut(&mut self, index: usize) -> Result<&mut T, MathError> {
                self.vals.get_mut(index).ok_or(MathError::IndexOutOfRange { index, len: $n * $n })
            }

            /// Overwrite the matrix with the values of `other`
            #[inline]
            pub fn assign(&mut self, other: Self) {
                self.vals = other.vals;
            }

            /// Get the identity matrix
            #[must_use]
            pub fn identity() -> Self {
                let mut vals = [T::zero(); $n * $n];
                for i in 0..$n {
                    vals[i * $n + i] = T::one();
                }
                Self { vals }
            }

            /// Reset the matrix to the identity
            #[inline]
            pub fn set_identity(&mut self) {
                *self = Self::identity();
            }

            /// Get a transposed copy of the matrix
            #[must_use]
            pub fn transposed(self) -> Self {
                let mut res = self;
                for column in 0..$n {
                    for row in 0..$n {
                        res[(row, column)] = self[(column, row)];
                    }
                }
                res
            }

            /// Transpose the matrix in place
            #[inline]
            pub fn transpose(&mut self) -> &mut Self {
                *self = self.transposed();
                self
            }

            /// Calculate the algebraic cofactor of the element at (`row`, `column`)
            #[inline]
            pub fn cofactor(self, row: usize, column: usize) -> T {
                let minor = self.minor(row, column);
                if (row + column) % 2 == 0 { minor } else { -minor }
            }

            /// Calculate the adjugate (transposed cofactor matrix)
            pub fn adjugate(self) -> Self {
                let mut res = Self::zero();
                for column in 0..$n {
                    for row in 0..$n {
                        res[(row, column)] = self.cofactor(column, row);
                    }
                }
                res
            }

            /// Check whether the determinant lies inside the singular band `(-0.0005, 0.0005)`
            #[inline]
            pub fn is_near_singular(self) -> bool {
                self.determinant().abs() < T::from_f64(SINGULAR_DETERMINANT_BAND)
            }

            /// Calculate the inverse.
            ///
            /// A matrix with a determinant inside `(-0.0005, 0.0005)` is treated as singular, and the identity matrix is returned instead.
            #[must_use]
            pub fn inverse(self) -> Self {
                let det = self.determinant();
                if det.abs() < T::from_f64(SINGULAR_DETERMINANT_BAND) {
                    Self::identity()
                } else {
                    self.adjugate() / det
                }
            }

            /// Invert the matrix in place, see [`Self::inverse`] for the singularity fallback
            #[inline]
            pub fn invert(&mut self) -> &mut Self {
                *self = self.inverse();
                self
            }

            /// Calculate the trace
            pub fn trace(self) -> T {
                let mut sum = T::zero();
                for i in 0..$n {
                    sum += self.vals[i * $n + i];
                }
                sum
            }
        }

        impl<T: Real> Default for $name<T> {
            fn default() -> Self {
                Self::identity()
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> Index<usize> for $name<T> {
            type Output = T;

            #[inline(always)]
            fn index(&self, index: usize) -> &Self::Output {
                &self.vals[index]
            }
        }

        impl<T: Real> IndexMut<usize> for $name<T> {
            #[inline(always)]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.vals[index]
            }
        }

        /// Index by (row, column)
        impl<T: Real> Index<(usize, usize)> for $name<T> {
            type Output = T;

            #[inline(always)]
            fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
                debug_assert!(row < $n);
                debug_assert!(column < $n);
                &self.vals[column * $n + row]
            }
        }

        impl<T: Real> IndexMut<(usize, usize)> for $name<T> {
            #[inline(always)]
            fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
                debug_assert!(row < $n);
                debug_assert!(column < $n);
                &mut self.vals[column * $n + row]
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self { vals: self.vals.map(|val| -val) }
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> Add for $name<T> {
            type Output = Self;

            fn add(mut self, rhs: Self) -> Self::Output {
                self += rhs;
                self
            }
        }

        impl<T: Real> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                for i in 0..($n * $n) {
                    self.vals[i] += rhs.vals[i];
                }
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> Sub for $name<T> {
            type Output = Self;

            fn sub(mut self, rhs: Self) -> Self::Output {
                self -= rhs;
                self
            }
        }

        impl<T: Real> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                for i in 0..($n * $n) {
                    self.vals[i] -= rhs.vals[i];
                }
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self { vals: self.vals.map(|val| val * rhs) }
            }
        }

        impl<T: Real> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                for val in &mut self.vals {
                    *val *= rhs;
                }
            }
        }

        impl<T: Real> Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self { vals: self.vals.map(|val| val / rhs) }
            }
        }

        impl<T: Real> DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                for val in &mut self.vals {
                    *val /= rhs;
                }
            }
        }

        //--------------------------------------------------------------

        // Row-by-column product, accumulated into a fresh matrix so `self` and `rhs` are never read after being written
        impl<T: Real> Mul for $name<T> {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                let mut res = Self::zero();
                for column in 0..$n {
                    for row in 0..$n {
                        let mut sum = T::zero();
                        for k in 0..$n {
                            sum += self[(row, k)] * rhs[(k, column)];
                        }
                        res[(row, column)] = sum;
                    }
                }
                res
            }
        }

        impl<T: Real> MulAssign for $name<T> {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> Zero for $name<T> {
            fn zero() -> Self {
                Self { vals: [T::zero(); $n * $n] }
            }
        }

        impl<T: Real> ApproxEq for $name<T> {
            type Epsilon = T;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                self.vals.iter().zip(rhs.vals.iter()).all(|(a, b)| a.is_close_to(*b, epsilon))
            }
        }

        impl<T: Real> From<[T; $n * $n]> for $name<T> {
            fn from(vals: [T; $n * $n]) -> Self {
                Self { vals }
            }
        }

        impl<T: Real> From<$name<T>> for [T; $n * $n] {
            fn from(mat: $name<T>) -> Self {
                mat.vals
            }
        }

        //--------------------------------------------------------------

        matrix_pre_multiplication!{$name, f32, f64}
    };
}

generic_matrix!{doc = "4x4 matrix (column-major order)"; Mat4, 4}
generic_matrix!{doc = "3x3 matrix (column-major order)"; Mat3, 3}
