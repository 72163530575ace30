/// Math error
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum MathError {
    /// Checked element access outside of the value's storage
    #[error("index {index} is out of range for a value with {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Math result
pub type Result<T, E = MathError> = core::result::Result<T, E>;
