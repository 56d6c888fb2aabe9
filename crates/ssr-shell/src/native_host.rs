//! `tray-icon` backed implementation of the tray host.

use std::panic::Location;

use error_location::ErrorLocation;
use ssr_shell_core::{MenuNode, MenuTree, ShellError, ShellResult, TrayHost, TrayIconAsset};
use tracing::{debug, instrument};
use tray_icon::menu::{CheckMenuItem, IsMenuItem, Menu, MenuItem, Submenu};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

/// Native system tray icon.
///
/// Must be created and used on the thread running the `tao` event loop.
#[derive(Default)]
pub struct NativeTrayHost {
    tray_icon: Option<TrayIcon>,
}

impl NativeTrayHost {
    /// Create a host with no icon yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load icon from compile-time embedded PNG bytes.
    #[track_caller]
    fn load_icon(asset: TrayIconAsset) -> ShellResult<Icon> {
        let png_bytes: &[u8] = match asset {
            TrayIconAsset::Mac => include_bytes!("../resources/trayicons/tray_mac.png"),
            TrayIconAsset::Windows => include_bytes!("../resources/trayicons/tray_win.png"),
        };

        let img = image::load_from_memory(png_bytes).map_err(|e| host_error("decode_icon", e))?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| host_error("create_icon", e))
    }

    #[track_caller]
    fn build_menu(tree: &MenuTree) -> ShellResult<Menu> {
        let menu = Menu::new();
        for node in tree.nodes() {
            let item = Self::build_item(node)?;
            menu.append(item.as_ref())
                .map_err(|e| host_error("build_menu", e))?;
        }
        Ok(menu)
    }

    #[track_caller]
    fn build_item(node: &MenuNode) -> ShellResult<Box<dyn IsMenuItem>> {
        let item: Box<dyn IsMenuItem> = match node {
            MenuNode::Checkbox {
                action,
                label,
                checked,
            } => Box::new(CheckMenuItem::with_id(action.id(), label, true, *checked, None)),
            MenuNode::Action { action, label } => {
                Box::new(MenuItem::with_id(action.id(), label, true, None))
            }
            MenuNode::Submenu { label, children } => {
                let submenu = Submenu::new(label, true);
                for child in children {
                    let item = Self::build_item(child)?;
                    submenu
                        .append(item.as_ref())
                        .map_err(|e| host_error("build_menu", e))?;
                }
                Box::new(submenu)
            }
        };
        Ok(item)
    }

    #[track_caller]
    fn icon(&self) -> ShellResult<&TrayIcon> {
        self.tray_icon.as_ref().ok_or_else(|| ShellError::IconNotCreated {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl TrayHost for NativeTrayHost {
    #[track_caller]
    #[instrument(skip(self))]
    fn create_icon(&mut self, asset: TrayIconAsset) -> ShellResult<()> {
        let icon = Self::load_icon(asset)?;

        let tray_icon = TrayIconBuilder::new()
            .with_icon(icon)
            .build()
            .map_err(|e| host_error("create_icon", e))?;

        self.tray_icon = Some(tray_icon);
        debug!(asset = asset.file_name(), "Native tray icon created");
        Ok(())
    }

    #[track_caller]
    fn set_tooltip(&mut self, tooltip: &str) -> ShellResult<()> {
        self.icon()?
            .set_tooltip(Some(tooltip))
            .map_err(|e| host_error("set_tooltip", e))
    }

    #[track_caller]
    fn set_context_menu(&mut self, menu: &MenuTree) -> ShellResult<()> {
        let native_menu = Self::build_menu(menu)?;
        self.icon()?.set_menu(Some(Box::new(native_menu)));
        Ok(())
    }

    #[track_caller]
    fn destroy(&mut self) -> ShellResult<()> {
        match self.tray_icon.take() {
            Some(tray_icon) => {
                drop(tray_icon);
                Ok(())
            }
            None => Err(ShellError::IconNotCreated {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

#[track_caller]
fn host_error(operation: &'static str, error: impl std::fmt::Display) -> ShellError {
    ShellError::HostOperationFailed {
        operation,
        reason: error.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
