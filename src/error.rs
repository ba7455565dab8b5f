//! Error types for settings loading and validation.
//!
//! The engine itself never fails at runtime: bounds violations are corrected
//! every tick and degenerate geometry is guarded. Errors only come from the
//! outside world (a settings file that is missing, malformed or out of range).

use std::fmt;
use std::path::PathBuf;

/// Top-level error enum for the sandbox.
#[derive(Debug)]
pub enum SimError {
    /// The settings file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for [`crate::Settings`].
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A setting is outside the range the engine can work with.
    InvalidSetting {
        /// Field name as it appears in the settings file.
        name: &'static str,
        /// Offending value, formatted for logging.
        value: String,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, value: impl fmt::Debug, expected: &'static str) -> Self {
        SimError::InvalidSetting {
            name,
            value: format!("{:?}", value),
            expected,
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Io { path, source } => {
                write!(f, "failed to read settings from {}: {}", path.display(), source)
            }
            SimError::Parse { path, source } => {
                write!(f, "failed to parse settings in {}: {}", path.display(), source)
            }
            SimError::InvalidSetting {
                name,
                value,
                expected,
            } => write!(f, "setting '{}' = {} is invalid, expected {}", name, value, expected),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io { source, .. } => Some(source),
            SimError::Parse { source, .. } => Some(source),
            SimError::InvalidSetting { .. } => None,
        }
    }
}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;
