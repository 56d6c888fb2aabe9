//! Watches the config file for edits made outside the tray.

use crate::{AppError, AppResult};

use std::{
    ffi::OsString,
    panic::Location,
    path::Path,
    time::Duration,
};

use error_location::ErrorLocation;
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use notify_debouncer_mini::{DebounceEventResult, Debouncer, new_debouncer};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Window used to coalesce the burst of events an editor save produces.
const DEBOUNCE_TIMEOUT: Duration = Duration::from_millis(500);

/// One message per debounced batch touching the config file.
pub(crate) type ConfigChanges = mpsc::UnboundedReceiver<()>;

/// Keeps the platform watcher alive. Dropping it stops notifications.
pub struct ConfigWatcher {
    _debouncer: Debouncer<RecommendedWatcher>,
}

impl ConfigWatcher {
    /// Start watching `config_path`.
    ///
    /// The parent directory is watched because saves replace the file
    /// through a rename, which would end a watch on the file itself.
    #[track_caller]
    #[instrument]
    pub(crate) fn spawn(config_path: &Path) -> AppResult<(Self, ConfigChanges)> {
        let (Some(dir), Some(file_name)) = (config_path.parent(), config_path.file_name()) else {
            return Err(AppError::WatchFailed {
                reason: format!("Not a file path: {:?}", config_path),
                location: ErrorLocation::from(Location::caller()),
            });
        };
        let file_name: OsString = file_name.to_os_string();

        let (tx, rx) = mpsc::unbounded_channel();

        let mut debouncer = new_debouncer(DEBOUNCE_TIMEOUT, move |result: DebounceEventResult| {
            match result {
                Ok(events) => {
                    let touched = events
                        .iter()
                        .any(|event| event.path.file_name() == Some(file_name.as_os_str()));
                    if touched && tx.send(()).is_err() {
                        debug!("Config change dropped, consumer is gone");
                    }
                }
                Err(e) => warn!(error = ?e, "Config watcher error"),
            }
        })
        .map_err(|e| AppError::WatchFailed {
            reason: format!("Failed to create watcher: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        debouncer
            .watcher()
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(|e| AppError::WatchFailed {
                reason: format!("Failed to watch {:?}: {}", dir, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(config_path = ?config_path, "Watching configuration file");

        Ok((
            Self {
                _debouncer: debouncer,
            },
            rx,
        ))
    }
}
