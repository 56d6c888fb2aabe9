use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Release pipeline errors.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// The host operating system has no packaging target.
    #[error("Not support current platform: {platform} {location}")]
    UnsupportedPlatform {
        /// OS name as reported by the standard library.
        platform: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// The application bundling command exited unsuccessfully.
    #[error("Bundling command `{command}` failed with exit code {code:?} {location}")]
    BundleFailed {
        /// Command line that was run.
        command: String,
        /// Exit code, `None` when killed by a signal.
        code: Option<i32>,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// The packager exited unsuccessfully.
    #[error("Packager `{command}` failed with exit code {code:?} {location}")]
    PackagerFailed {
        /// Command line that was run.
        command: String,
        /// Exit code, `None` when killed by a signal.
        code: Option<i32>,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Release configuration could not be read or written.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from filesystem or process operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for ReleaseError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        ReleaseError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `ReleaseError`.
pub type Result<T> = StdResult<T, ReleaseError>;
