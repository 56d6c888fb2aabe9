//! Owned tray controller with an explicit setup/teardown lifecycle.

use crate::{
    EventReceiver, EventSender, MenuAction, MenuState, MenuTree, ServerEntry, ShellResult,
    TrayEvent, TrayHost, TrayIconAsset, event_channel, labels,
};

use tracing::{debug, info, instrument};

/// Owns the tray icon and translates clicks into [`TrayEvent`]s.
///
/// Must stay on the thread that runs the host event loop.
pub struct TrayController<H: TrayHost> {
    host: H,
    servers: Vec<ServerEntry>,
    state: MenuState,
    menu: MenuTree,
    events: EventSender,
}

impl<H: TrayHost> TrayController<H> {
    /// Create the tray icon and its menu, returning the event receiver.
    ///
    /// Each call creates a separate icon on the host.
    #[instrument(skip(host, servers), fields(servers = servers.len()))]
    pub fn setup(
        mut host: H,
        initial_state: MenuState,
        servers: Vec<ServerEntry>,
    ) -> ShellResult<(Self, EventReceiver)> {
        host.create_icon(TrayIconAsset::for_current_os())?;
        host.set_tooltip(labels::TOOLTIP)?;

        let state = initial_state.clamp_selection(servers.len());
        let menu = MenuTree::build(&state, &servers);
        host.set_context_menu(&menu)?;

        let (events, receiver) = event_channel();

        info!("Tray icon initialized");

        Ok((
            Self {
                host,
                servers,
                state,
                menu,
                events,
            },
            receiver,
        ))
    }

    /// Replace the server list and selection, keeping the other flags.
    #[instrument(skip(self, servers), fields(servers = servers.len()))]
    pub fn refresh(&mut self, servers: Vec<ServerEntry>, selected: Option<usize>) -> ShellResult<()> {
        self.servers = servers;
        self.state = MenuState {
            selected,
            ..self.state
        }
        .clamp_selection(self.servers.len());

        self.render()
    }

    /// Current flags as shown by the menu.
    pub fn read_state(&self) -> MenuState {
        self.menu.state()
    }

    /// The menu currently attached to the icon.
    pub fn menu(&self) -> &MenuTree {
        &self.menu
    }

    /// Route a click on the menu item with the given id.
    ///
    /// The event is emitted before the menu is re-applied. Unknown ids are
    /// ignored.
    #[instrument(skip(self))]
    pub fn handle_menu_click(&mut self, id: &str) -> ShellResult<()> {
        let Some(action) = MenuAction::from_id(id) else {
            debug!("Ignoring click on unknown menu item");
            return Ok(());
        };

        match action {
            MenuAction::ToggleEnable => {
                self.state.enable = !self.state.enable;
                self.events.emit(TrayEvent::EnableToggled(self.state.enable));
                self.render()
            }
            MenuAction::ToggleAutoLaunch => {
                self.state.auto_launch = !self.state.auto_launch;
                self.events
                    .emit(TrayEvent::AutoLaunchToggled(self.state.auto_launch));
                self.render()
            }
            MenuAction::SelectServer(index) if index < self.servers.len() => {
                self.state.selected = Some(index);
                self.events.emit(TrayEvent::ServerSelected(index));
                self.render()
            }
            MenuAction::SelectServer(index) => {
                debug!(index, "Ignoring click on stale server item");
                Ok(())
            }
            MenuAction::EditServers => {
                self.events.emit(TrayEvent::OpenRequested);
                Ok(())
            }
            MenuAction::QrScan => {
                self.events.emit(TrayEvent::QrScanRequested);
                Ok(())
            }
            MenuAction::ViewLog => {
                self.events.emit(TrayEvent::OpenLogRequested);
                Ok(())
            }
            MenuAction::OpenConfig => {
                self.events.emit(TrayEvent::OpenConfigRequested);
                Ok(())
            }
            MenuAction::Exit => {
                self.events.emit(TrayEvent::ExitRequested);
                Ok(())
            }
        }
    }

    /// A click on the icon itself opens the main window.
    pub fn handle_icon_click(&self) {
        self.events.emit(TrayEvent::OpenRequested);
    }

    /// Remove the tray icon.
    #[instrument(skip(self))]
    pub fn teardown(mut self) -> ShellResult<()> {
        self.host.destroy()?;
        info!("Tray icon destroyed");
        Ok(())
    }

    fn render(&mut self) -> ShellResult<()> {
        self.menu = MenuTree::build(&self.state, &self.servers);
        self.host.set_context_menu(&self.menu)
    }
}
