//! Orbit/tumble camera for interactive 3D viewers.
//!
//! The camera keeps a position, a target and an orthonormal basis, and emits a right-handed view matrix every frame.

use tumble_logging::LogCategory;

mod error;
pub use error::*;

mod settings;
pub use settings::*;

mod camera;
pub use camera::*;

const LOG_CAT: LogCategory = LogCategory::new("Camera");
