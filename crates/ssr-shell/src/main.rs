//! ssr-shell: system tray shell for the ShadowsocksR desktop client.

mod app;
mod config;
mod config_watcher;
mod error;
mod logging;
mod native_host;
mod shell_command;

pub(crate) use {
    app::App,
    config_watcher::ConfigWatcher,
    error::{AppError, Result as AppResult},
    native_host::NativeTrayHost,
    shell_command::{ShellCommand, UiNotifier},
};

use crate::config::Config;

use ssr_shell_core::{EventReceiver, TrayController, TrayHost};
use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::{debug, error, info, warn};
use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent, menu::MenuEvent};

/// Application entry point.
fn main() {
    let log_dir = match Config::log_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to resolve log directory: {}", e);
            std::process::exit(1);
        }
    };
    // Flushes the log file on drop, so it lives in the event loop closure.
    let log_guard = logging::init(&log_dir);

    let event_loop = EventLoopBuilder::<ShellCommand>::with_user_event().build();

    MenuEvent::set_event_handler(Some({
        let proxy = event_loop.create_proxy();
        move |event| {
            if proxy.send_event(ShellCommand::Menu(event)).is_err() {
                debug!("Menu event dropped, event loop is closed");
            }
        }
    }));

    TrayIconEvent::set_event_handler(Some({
        let proxy = event_loop.create_proxy();
        move |event| {
            if proxy.send_event(ShellCommand::TrayIcon(event)).is_err() {
                debug!("Tray icon event dropped, event loop is closed");
            }
        }
    }));

    let ui_proxy = event_loop.create_proxy();

    // TrayController lives on the main thread - TrayIcon is !Send on all platforms.
    let mut controller: Option<TrayController<NativeTrayHost>> = None;
    // Dropping the watcher stops config change notifications.
    let mut config_watcher: Option<ConfigWatcher> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(tao::event::StartCause::Init) => {
                let config_path = match Config::config_path() {
                    Ok(path) => path,
                    Err(e) => {
                        error!("Failed to resolve config path: {:?}", e);
                        std::process::exit(1);
                    }
                };

                let config = match Config::load_from(&config_path) {
                    Ok(c) => c,
                    Err(e) => {
                        error!("Failed to load config: {:?}", e);
                        std::process::exit(1);
                    }
                };

                let (tray, events) = match start_tray(NativeTrayHost::new(), &config) {
                    Ok(pair) => pair,
                    Err(e) => {
                        error!("Failed to create tray icon: {:?}", e);
                        std::process::exit(1);
                    }
                };
                controller = Some(tray);

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let config_changes = match ConfigWatcher::spawn(&config_path) {
                    Ok((watcher, changes)) => {
                        config_watcher = Some(watcher);
                        changes
                    }
                    Err(e) => {
                        warn!(error = ?e, "External config edits will not be picked up");
                        tokio::sync::mpsc::unbounded_channel().1
                    }
                };

                let app = App::new(
                    config,
                    config_path,
                    log_dir.clone(),
                    events,
                    config_changes,
                    ui_proxy.clone(),
                );

                // Spawn tokio runtime on separate thread.
                // The tray controller stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        if let Err(e) = app.run().await {
                            error!(error = ?e, "App error");
                        }
                    });
                });
            }
            Event::UserEvent(ShellCommand::Shutdown) => {
                if let Some(tray) = controller.take() {
                    if let Err(e) = tray.teardown() {
                        error!(error = ?e, "Failed to destroy tray icon");
                    }
                }
                info!("Exiting event loop");
                *control_flow = ControlFlow::ExitWithCode(0);
            }
            Event::UserEvent(command) => {
                let Some(tray) = controller.as_mut() else {
                    return;
                };

                if let Err(e) = dispatch(tray, command) {
                    error!(error = ?e, "Failed to update tray");
                }
            }
            _ => {}
        }

        // Keep the log writer and config watcher alive for the app's lifetime.
        let _ = (&log_guard, &config_watcher);
    });
}

/// Create the tray icon from the loaded configuration.
fn start_tray<H: TrayHost>(host: H, config: &Config) -> AppResult<(TrayController<H>, EventReceiver)> {
    Ok(TrayController::setup(
        host,
        config.menu_state(),
        config.server_entries(),
    )?)
}

/// Route a UI-thread command to the tray controller.
fn dispatch<H: TrayHost>(tray: &mut TrayController<H>, command: ShellCommand) -> AppResult<()> {
    match command {
        ShellCommand::Menu(event) => tray.handle_menu_click(&event.id.0)?,
        ShellCommand::TrayIcon(TrayIconEvent::Click {
            button: MouseButton::Left,
            button_state: MouseButtonState::Up,
            ..
        }) => tray.handle_icon_click(),
        ShellCommand::RefreshServers { servers, selected } => tray.refresh(servers, selected)?,
        ShellCommand::TrayIcon(_) | ShellCommand::Shutdown => {}
    }
    Ok(())
}
