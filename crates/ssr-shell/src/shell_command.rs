use crate::{AppError, AppResult};

use std::{panic::Location, sync::mpsc};

use error_location::ErrorLocation;
use ssr_shell_core::ServerEntry;
use tao::event_loop::EventLoopProxy;
use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// User events delivered to the main UI thread.
///
/// The main thread owns the tray controller (because `TrayIcon` is `!Send`),
/// so host clicks and all tray mutations flow through this enum.
#[derive(Debug)]
pub enum ShellCommand {
    /// A menu item was clicked.
    Menu(MenuEvent),
    /// The tray icon itself was clicked or hovered.
    TrayIcon(TrayIconEvent),
    /// Replace the server submenu.
    RefreshServers {
        /// New server list in menu order.
        servers: Vec<ServerEntry>,
        /// Server to mark as checked.
        selected: Option<usize>,
    },
    /// Destroy the tray icon and exit the event loop.
    Shutdown,
}

/// Delivers [`ShellCommand`]s to the UI thread from the async runtime.
pub trait UiNotifier: Send + 'static {
    /// Queue a command for the UI thread.
    fn notify(&self, command: ShellCommand) -> AppResult<()>;
}

impl UiNotifier for EventLoopProxy<ShellCommand> {
    #[track_caller]
    fn notify(&self, command: ShellCommand) -> AppResult<()> {
        self.send_event(command)
            .map_err(|_| AppError::ChannelSendFailed {
                message: "UI event loop is closed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl UiNotifier for mpsc::Sender<ShellCommand> {
    #[track_caller]
    fn notify(&self, command: ShellCommand) -> AppResult<()> {
        self.send(command).map_err(|e| AppError::ChannelSendFailed {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
