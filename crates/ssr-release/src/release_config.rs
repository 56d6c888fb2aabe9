//! Project-level release settings, read from `release.toml`.

use crate::{ReleaseError, ReleaseResult};

use std::{fs, panic::Location, path::Path};

use error_location::ErrorLocation;
use serde::Deserialize;
use tracing::{debug, instrument};

/// File name of the optional release settings in the project root.
pub const RELEASE_CONFIG_FILE: &str = "release.toml";

/// Release settings. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Product name shown by installers.
    pub product_name: String,
    /// Project homepage embedded in the app metadata.
    pub homepage: String,
    /// Directory the packager writes installers to.
    pub output_dir: String,
    /// Directory holding the bundled application.
    pub app_dir: String,
    /// License file shown by the Windows installer.
    pub license: String,
    /// Command that bundles the application sources.
    pub pack_command: String,
    /// Command that invokes the packager.
    pub builder_command: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            product_name: "ShadowsocksR".to_string(),
            homepage: "https://github.com/erguotou520/electron-ssr".to_string(),
            output_dir: "builds".to_string(),
            app_dir: "app".to_string(),
            license: "LICENSE".to_string(),
            pack_command: "npm run pack".to_string(),
            builder_command: "npx electron-builder".to_string(),
        }
    }
}

impl ReleaseConfig {
    /// Load `release.toml` from `root`, falling back to defaults when absent.
    #[track_caller]
    #[instrument]
    pub fn load(root: &Path) -> ReleaseResult<Self> {
        let path = root.join(RELEASE_CONFIG_FILE);
        if !path.exists() {
            debug!(config_path = ?path, "No release config, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| ReleaseError::ConfigError {
            reason: format!("Failed to read {}: {}", RELEASE_CONFIG_FILE, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        toml::from_str(&contents).map_err(|e| ReleaseError::ConfigError {
            reason: format!("Failed to parse {}: {}", RELEASE_CONFIG_FILE, e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
