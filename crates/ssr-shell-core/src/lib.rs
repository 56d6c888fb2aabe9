//! ssr-shell core library
//!
//! Tray controller for the ShadowsocksR desktop client: the menu model, the
//! immutable menu tree handed to the host tray API, and the typed event
//! channel that relays user clicks.
//!
//! # Example
//!
//! ```no_run
//! use ssr_shell_core::{MenuState, ServerEntry, ShellResult, TrayController, TrayHost};
//!
//! fn run<H: TrayHost>(host: H) -> ShellResult<()> {
//!     let servers = vec![ServerEntry::new("tokyo", "203.0.113.7", 8388)];
//!     let state = MenuState::new(true, false, Some(0));
//!
//!     let (mut controller, mut events) = TrayController::setup(host, state, servers)?;
//!     controller.handle_menu_click("enable")?;
//!
//!     while let Ok(event) = events.try_recv() {
//!         println!("{:?}", event);
//!     }
//!
//!     controller.teardown()
//! }
//! ```

mod error;
mod menu;
mod tray_controller;
mod tray_event;
mod tray_host;

pub use {
    error::Result as ShellResult,
    error::ShellError,
    menu::{MenuAction, MenuNode, MenuState, MenuTree, ServerEntry, labels},
    tray_controller::TrayController,
    tray_event::{EventReceiver, EventSender, TrayEvent, event_channel},
    tray_host::{TrayHost, TrayIconAsset},
};

#[cfg(test)]
mod tests;
