//! A generic math library for interactive 3D viewers: vectors, column-major matrices and quaternions.
//!
//! Matrices use the OpenGL conventions: column vectors, right-handed view space looking down -z,
//! and a flat storage layout that can be handed to a graphics API as is.

mod numeric;
pub use numeric::*;

mod constants;
pub use constants::*;

mod angle;
pub use angle::*;

mod error;
pub use error::*;

mod utils;

mod vec;
pub use vec::*;

mod mat;
pub use mat::*;

mod quat;
pub use quat::*;
