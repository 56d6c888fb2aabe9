use ssr_shell_core::ShellError;

use std::{panic::Location, path::PathBuf, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the ssr-shell binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Tray controller error from ssr-shell-core.
    #[error("Tray error: {source} {location}")]
    Shell {
        /// The underlying tray error.
        #[source]
        source: ShellError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to hand a command to the UI thread.
    #[error("Channel send failed: {message} {location}")]
    ChannelSendFailed {
        /// Human-readable error message.
        message: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to open a file or directory with the desktop handler.
    #[error("Failed to open {path:?}: {reason} {location}")]
    OpenFailed {
        /// Path that was passed to the desktop handler.
        path: PathBuf,
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration loading or saving error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to watch the configuration file for changes.
    #[error("Config watch failed: {reason} {location}")]
    WatchFailed {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From<ShellError> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<ShellError> for AppError {
    #[track_caller]
    fn from(source: ShellError) -> Self {
        AppError::Shell {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        AppError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
