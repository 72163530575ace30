/// Camera error
#[derive(Clone, Copy, PartialEq, Debug, thiserror::Error)]
pub enum Error {
    /// The distance between the camera and its target must be finite and larger than 0
    #[error("invalid target distance {0}, expected a finite value larger than 0")]
    InvalidTargetDistance(f64),
    /// All components of the camera position must be finite
    #[error("invalid camera position {0:?}, all components must be finite")]
    InvalidPosition([f64; 3]),
}

/// Camera result
pub type Result<T, E = Error> = core::result::Result<T, E>;
