use std::{io, path::PathBuf};

/// Driver error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid camera settings: {0}")]
    Camera(#[from] tumble_camera::Error),
    #[error("failed to open log file '{}': {source}", path.display())]
    LogFile { path: PathBuf, source: io::Error },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
