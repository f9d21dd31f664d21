use crate::prelude::*;

use std::process::ExitCode;

#[derive(Clone, Debug)]
pub enum ClockError {
    Io,
    /// A stored record could not be decoded.
    Decode(String),
    InvalidHour(u8),
    InvalidTime(String),
    ConfigError(String),
    /// Writing a record to shared storage failed.
    Persist(String),
    /// The store was opened as a viewer and can't be edited.
    ReadOnly,
    InvalidAngle(f64),
}

impl std::fmt::Display for ClockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClockError::Io => write!(f, "I/O error"),
            ClockError::Decode(msg) => write!(f, "Failed to decode positions: {}", msg),
            ClockError::InvalidHour(hour) => {
                write!(f, "Invalid hour {}, expected a value from 1 to 12", hour)
            }
            ClockError::InvalidTime(msg) => write!(f, "Invalid display time: {}", msg),
            ClockError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ClockError::Persist(msg) => write!(f, "Failed to persist positions: {}", msg),
            ClockError::ReadOnly => write!(f, "Position store is read-only"),
            ClockError::InvalidAngle(angle) => write!(f, "Invalid marker angle {}", angle),
        }
    }
}

impl std::error::Error for ClockError {}

impl From<std::io::Error> for ClockError {
    fn from(err: std::io::Error) -> Self {
        error!("IoError: {}", err);
        ClockError::Io
    }
}

impl From<serde_json::Error> for ClockError {
    fn from(err: serde_json::Error) -> Self {
        ClockError::Decode(err.to_string())
    }
}

impl From<ClockError> for ExitCode {
    fn from(value: ClockError) -> Self {
        match value {
            ClockError::Io => ExitCode::from(1),
            ClockError::Decode(_) => ExitCode::from(2),
            ClockError::ConfigError(_) => ExitCode::from(3),
            ClockError::InvalidHour(_) => ExitCode::from(4),
            ClockError::InvalidTime(_) => ExitCode::from(5),
            ClockError::Persist(_) => ExitCode::from(6),
            ClockError::ReadOnly => ExitCode::from(7),
            ClockError::InvalidAngle(_) => ExitCode::from(8),
        }
    }
}
