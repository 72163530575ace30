use std::path::{Path, PathBuf};

use serde::Deserialize;
use tumble_camera::CameraSettings;
use tumble_logging::LogLevel;

use crate::{
    app::{Event, Mode},
    Error, Result,
};

/// Logger setup
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Most detailed level that is still logged
    pub level        : LogLevel,
    /// Flush after every message instead of when the cache is full
    pub always_flush : bool,
    /// Write to stdout
    pub console      : bool,
    /// Optional file receiving a copy of the log
    pub file         : Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Verbose,
            always_flush: false,
            console: true,
            file: None,
        }
    }
}

/// How raw input maps onto camera movement
#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Degrees of rotation per pixel of mouse motion
    pub mouse_scale : f32,
    /// Distance moved per key press
    pub step        : f32,
    /// Navigation mode at start-up
    pub start_mode  : Mode,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            mouse_scale: 0.3,
            step: 1.0,
            start_mode: Mode::Tumble,
        }
    }
}

/// Session settings: logger, initial camera, input mapping and the recorded events to replay
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging : LoggingSettings,
    pub camera  : CameraSettings<f32>,
    pub input   : InputSettings,
    pub events  : Vec<Event>,
}

impl Settings {
    /// Parse and validate settings from TOML
    pub fn load(toml: &str) -> Result<Settings> {
        let settings: Settings = toml::from_str(toml)?;
        settings.camera.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file
    pub fn load_file(path: &Path) -> Result<Settings> {
        let toml = std::fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        Self::load(&toml)
    }
}
