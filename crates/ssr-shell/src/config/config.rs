//! Configuration management for ssr-shell.
//!
//! Handles loading and saving the TOML configuration file with
//! cross-platform paths and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{DEFAULT_AUTO_LAUNCH, DEFAULT_ENABLE, ServerConfig, default_auto_launch, default_enable},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use ssr_shell_core::{MenuState, ServerEntry};
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether the system proxy is enabled.
    #[serde(default = "default_enable")]
    pub enable: bool,
    /// Whether the client launches at login.
    #[serde(default = "default_auto_launch")]
    pub auto_launch: bool,
    /// Index into `servers` of the active server.
    #[serde(default)]
    pub selected: Option<usize>,
    /// Configured servers, in menu order.
    #[serde(default)]
    pub servers: Vec<ServerConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable: DEFAULT_ENABLE,
            auto_launch: DEFAULT_AUTO_LAUNCH,
            selected: None,
            servers: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, creating a default file if missing.
    #[track_caller]
    #[instrument]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to read config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to parse config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            info!(config_path = ?path, servers = config.servers.len(), "Configuration loaded");

            Ok(config)
        } else {
            info!(config_path = ?path, "No config found, creating default");
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to `path` using the atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!(config_path = ?path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Initial tray menu flags.
    pub fn menu_state(&self) -> MenuState {
        MenuState::new(self.enable, self.auto_launch, self.selected)
    }

    /// Servers in tray menu form.
    pub fn server_entries(&self) -> Vec<ServerEntry> {
        self.servers.iter().map(ServerEntry::from).collect()
    }

    /// Path of the configuration file.
    #[track_caller]
    pub fn config_path() -> AppResult<PathBuf> {
        let config_dir = Self::project_dirs()?.config_dir().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Directory the rolling log files are written to.
    #[track_caller]
    pub fn log_dir() -> AppResult<PathBuf> {
        Ok(Self::project_dirs()?.data_dir().join("logs"))
    }

    #[track_caller]
    fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("me", "erguotou", "ShadowsocksR").ok_or_else(|| AppError::ConfigError {
            reason: "Failed to get project directories".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
