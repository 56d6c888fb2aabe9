//! Tracing setup: console output plus a daily rolling log file.

use std::path::Path;

use tracing::warn;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "ssr_shell=debug,ssr_shell_core=debug";
const LOG_FILE_PREFIX: &str = "ssr-shell";

/// Install the global subscriber.
///
/// The returned guard flushes the file writer and must outlive the event
/// loop. `None` means the log directory was unusable and only console
/// logging is active.
pub(crate) fn init(log_dir: &Path) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(log_dir);

    let (file_layer, guard, init_error) = match appender {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
                None,
            )
        }
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if let Some(e) = init_error {
        warn!(log_dir = ?log_dir, error = %e, "File logging disabled");
    }

    guard
}
