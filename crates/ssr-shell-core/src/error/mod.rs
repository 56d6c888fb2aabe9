use error_location::ErrorLocation;
use thiserror::Error;

/// Tray shell errors with source location tracking.
#[derive(Error, Debug)]
pub enum ShellError {
    /// A call into the host tray API failed.
    #[error("Tray host {operation} failed: {reason} {location}")]
    HostOperationFailed {
        /// Host operation that was attempted.
        operation: &'static str,
        /// Description of the host failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The tray icon has not been created or was already destroyed.
    #[error("Tray icon is not created {location}")]
    IconNotCreated {
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`ShellError`].
pub type Result<T> = std::result::Result<T, ShellError>;
