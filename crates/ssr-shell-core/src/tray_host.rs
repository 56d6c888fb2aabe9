//! Capability interface to the host tray API.

use crate::{MenuTree, ShellResult};

/// Tray icon image, chosen by host operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconAsset {
    /// Template-style icon for the macOS menu bar.
    Mac,
    /// Colored icon for Windows and Linux notification areas.
    Windows,
}

impl TrayIconAsset {
    /// Pick the asset for an OS name as reported by `std::env::consts::OS`.
    pub fn for_os(os: &str) -> Self {
        match os {
            "macos" => TrayIconAsset::Mac,
            _ => TrayIconAsset::Windows,
        }
    }

    /// Asset for the running host.
    pub fn for_current_os() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    /// File name of the image asset.
    pub fn file_name(&self) -> &'static str {
        match self {
            TrayIconAsset::Mac => "tray_mac.png",
            TrayIconAsset::Windows => "tray_win.png",
        }
    }
}

/// Operations the tray controller needs from the platform.
///
/// Click delivery is not part of the trait: the embedding event loop feeds
/// clicks into [`crate::TrayController::handle_menu_click`].
pub trait TrayHost {
    /// Create the tray icon showing `asset`.
    fn create_icon(&mut self, asset: TrayIconAsset) -> ShellResult<()>;

    /// Set the hover text of the icon.
    fn set_tooltip(&mut self, tooltip: &str) -> ShellResult<()>;

    /// Build native menu objects from `menu` and attach them to the icon,
    /// replacing any previous menu.
    fn set_context_menu(&mut self, menu: &MenuTree) -> ShellResult<()>;

    /// Remove the icon from the notification area.
    fn destroy(&mut self) -> ShellResult<()>;
}
