use crate::{ReleaseError, ReleaseResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Desktop platforms installers are built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    /// macOS: dmg and zip.
    Mac,
    /// Windows: NSIS installer and zip.
    Windows,
    /// Linux: rpm and tarball.
    Linux,
}

impl HostPlatform {
    /// Map an OS name as reported by `std::env::consts::OS`.
    #[track_caller]
    pub fn from_os(os: &str) -> ReleaseResult<Self> {
        match os {
            "macos" => Ok(HostPlatform::Mac),
            "windows" => Ok(HostPlatform::Windows),
            "linux" => Ok(HostPlatform::Linux),
            other => Err(ReleaseError::UnsupportedPlatform {
                platform: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Packager command-line switch selecting this platform.
    pub fn builder_flag(&self) -> &'static str {
        match self {
            HostPlatform::Mac => "--mac",
            HostPlatform::Windows => "--win",
            HostPlatform::Linux => "--linux",
        }
    }

    /// Installer formats produced for this platform.
    pub fn targets(&self) -> &'static [&'static str] {
        match self {
            HostPlatform::Mac => &["dmg", "zip"],
            HostPlatform::Windows => &["nsis", "zip"],
            HostPlatform::Linux => &["rpm", "tar.gz"],
        }
    }
}
