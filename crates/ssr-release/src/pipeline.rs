//! Sequential release pipeline: clean, or bundle then package.

use crate::{
    BuilderConfig, CommandRunner, HostPlatform, ReleaseConfig, ReleaseError, ReleaseResult,
    clean_output_dir,
};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{info, instrument};

/// Name of the packager configuration file written into the output directory.
const BUILDER_CONFIG_FILE: &str = ".builder-config.json";

/// What the pipeline does on this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseMode {
    /// Empty the output directory.
    Clean,
    /// Bundle the app and build installers for the host platform.
    Build,
}

impl ReleaseMode {
    /// Environment variable selecting the mode.
    pub const ENV_VAR: &'static str = "PLATFORM_TARGET";

    /// `clean` selects [`ReleaseMode::Clean`], anything else builds.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("clean") => ReleaseMode::Clean,
            _ => ReleaseMode::Build,
        }
    }
}

/// Pipeline progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Not started.
    Idle,
    /// Removing old artifacts.
    Cleaning,
    /// Running the bundling command.
    Packaging,
    /// Running the packager.
    Building,
    /// Finished successfully.
    Done,
    /// Stopped on an error.
    Failed,
}

/// One-shot release pipeline for the project at `root`.
pub struct Pipeline<R: CommandRunner> {
    root: PathBuf,
    config: ReleaseConfig,
    runner: R,
    state: PipelineState,
}

impl<R: CommandRunner> Pipeline<R> {
    /// Create an idle pipeline.
    pub fn new(root: PathBuf, config: ReleaseConfig, runner: R) -> Self {
        Self {
            root,
            config,
            runner,
            state: PipelineState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> PipelineState {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn runner(&self) -> &R {
        &self.runner
    }

    /// Run the pipeline in `mode` on a host reporting OS name `os`.
    #[instrument(skip(self))]
    pub fn run(&mut self, mode: ReleaseMode, os: &str) -> ReleaseResult<()> {
        let result = match mode {
            ReleaseMode::Clean => self.clean(),
            ReleaseMode::Build => self.build(os),
        };

        self.state = match result {
            Ok(()) => PipelineState::Done,
            Err(_) => PipelineState::Failed,
        };

        result
    }

    fn output_dir(&self) -> PathBuf {
        self.root.join(&self.config.output_dir)
    }

    fn clean(&mut self) -> ReleaseResult<()> {
        self.state = PipelineState::Cleaning;

        let removed = clean_output_dir(&self.output_dir())?;
        info!(removed, "`{}` directory cleaned.", self.config.output_dir);

        Ok(())
    }

    #[track_caller]
    fn build(&mut self, os: &str) -> ReleaseResult<()> {
        let platform = HostPlatform::from_os(os)?;

        self.state = PipelineState::Packaging;
        info!("Building app bundle in production mode...");

        let pack_command = self.config.pack_command.clone();
        let outcome = self.runner.run(&pack_command, &self.root)?;
        if !outcome.success {
            return Err(ReleaseError::BundleFailed {
                command: pack_command,
                code: outcome.code,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.state = PipelineState::Building;
        info!(targets = ?platform.targets(), "Building installers...");

        let config_path = self.write_builder_config()?;
        let builder_command = format!(
            "{} --config \"{}\" {}",
            self.config.builder_command,
            config_path.display(),
            platform.builder_flag()
        );

        let outcome = self.runner.run(&builder_command, &self.root)?;
        if !outcome.success {
            return Err(ReleaseError::PackagerFailed {
                command: builder_command,
                code: outcome.code,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!("Done");
        Ok(())
    }

    #[track_caller]
    fn write_builder_config(&self) -> ReleaseResult<PathBuf> {
        let output_dir = self.output_dir();
        fs::create_dir_all(&output_dir)?;

        let config = BuilderConfig::new(&self.config, &self.root);
        let json = serde_json::to_string_pretty(&config).map_err(|e| ReleaseError::ConfigError {
            reason: format!("Failed to serialize packager config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let path = builder_config_path(&self.root, &self.config);
        fs::write(&path, json)?;
        Ok(path)
    }
}

/// Path of the packager configuration written for a project at `root`.
pub fn builder_config_path(root: &Path, config: &ReleaseConfig) -> PathBuf {
    root.join(&config.output_dir).join(BUILDER_CONFIG_FILE)
}
