//! ssr-release: builds installers for macOS, Windows and Linux.
//!
//! Run from the project root. `PLATFORM_TARGET=clean` empties the output
//! directory instead of building.

mod builder_config;
mod clean;
mod command_runner;
mod error;
mod host_platform;
mod pipeline;
mod release_config;

pub(crate) use {
    builder_config::BuilderConfig,
    clean::clean_output_dir,
    command_runner::{CommandRunner, ShellCommandRunner},
    error::{ReleaseError, Result as ReleaseResult},
    host_platform::HostPlatform,
    pipeline::{Pipeline, ReleaseMode},
    release_config::ReleaseConfig,
};

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Release entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ssr_release=info")),
        )
        .with_target(false)
        .init();

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!("Failed to resolve project root: {:?}", e);
            std::process::exit(1);
        }
    };

    let config = match ReleaseConfig::load(&root) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load release config: {}", e);
            std::process::exit(1);
        }
    };

    let mode = ReleaseMode::from_env_value(std::env::var(ReleaseMode::ENV_VAR).ok().as_deref());
    let mut pipeline = Pipeline::new(root, config, ShellCommandRunner);

    let result = pipeline.run(mode, std::env::consts::OS);
    debug!(?mode, state = ?pipeline.state(), "Release pipeline finished");

    match result {
        Ok(()) => {}
        Err(e @ ReleaseError::UnsupportedPlatform { .. }) => {
            error!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            error!("Build error: {}", e);
            std::process::exit(1);
        }
    }
}
