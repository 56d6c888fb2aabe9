use crate::{AppError, AppResult, ShellCommand, UiNotifier, config::Config, config_watcher::ConfigChanges};

use std::{
    fs,
    ops::ControlFlow,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use ssr_shell_core::{EventReceiver, TrayEvent};
use tracing::{debug, error, info, instrument, warn};

/// Opens a file or directory with the desktop's default handler.
pub(crate) type PathOpener = Box<dyn Fn(&Path) -> std::io::Result<()> + Send>;

/// Consumer of tray events.
///
/// Runs on the async runtime thread. Talks back to the main thread through
/// `ui` because the tray controller is `!Send` and must remain on the UI
/// thread.
pub struct App<N: UiNotifier> {
    pub(crate) config: Config,
    pub(crate) config_path: PathBuf,
    pub(crate) log_dir: PathBuf,
    pub(crate) events: EventReceiver,
    pub(crate) config_changes: ConfigChanges,
    pub(crate) ui: N,
    pub(crate) opener: PathOpener,
}

impl<N: UiNotifier> App<N> {
    /// Create the consumer with the desktop opener.
    pub(crate) fn new(
        config: Config,
        config_path: PathBuf,
        log_dir: PathBuf,
        events: EventReceiver,
        config_changes: ConfigChanges,
        ui: N,
    ) -> Self {
        Self {
            config,
            config_path,
            log_dir,
            events,
            config_changes,
            ui,
            opener: Box::new(|path: &Path| open::that(path)),
        }
    }

    /// Run until the user exits or the tray goes away.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("ssr-shell starting");

        loop {
            tokio::select! {
                event = self.events.recv() => {
                    let Some(event) = event else {
                        info!("Tray event channel closed, shutting down");
                        break;
                    };
                    match self.handle_event(event) {
                        Ok(ControlFlow::Continue(())) => {}
                        Ok(ControlFlow::Break(())) => break,
                        Err(e) => error!(?event, error = ?e, "Failed to handle tray event"),
                    }
                }

                // A closed watcher channel yields None and disables this branch.
                Some(()) = self.config_changes.recv() => {
                    if let Err(e) = self.reload_if_changed() {
                        error!(error = ?e, "Failed to reload configuration");
                    }
                }
            }
        }

        info!("ssr-shell shut down successfully");

        Ok(())
    }

    /// Apply one tray event. `Break` ends the consumer loop.
    #[instrument(skip(self))]
    pub(crate) fn handle_event(&mut self, event: TrayEvent) -> AppResult<ControlFlow<()>> {
        match event {
            TrayEvent::EnableToggled(enable) => {
                self.persist(|config| config.enable = enable)?;
                info!(enable, "System proxy toggled");
            }
            TrayEvent::AutoLaunchToggled(auto_launch) => {
                self.persist(|config| config.auto_launch = auto_launch)?;
                info!(auto_launch, "Launch at login toggled");
            }
            TrayEvent::ServerSelected(index) => {
                self.persist(|config| config.selected = Some(index))?;
                match self.config.servers.get(index) {
                    Some(server) => info!(index, remark = %server.remark, host = %server.host, "Server selected"),
                    None => warn!(index, "Selected server is not in the configuration"),
                }
            }
            TrayEvent::OpenRequested => {
                info!("Main window requested");
            }
            TrayEvent::QrScanRequested => {
                info!("QR code scan requested");
            }
            TrayEvent::OpenLogRequested => {
                fs::create_dir_all(&self.log_dir)?;
                self.open_path(&self.log_dir)?;
                info!(log_dir = ?self.log_dir, "Opened log directory");
            }
            TrayEvent::OpenConfigRequested => {
                self.open_path(&self.config_path)?;
                info!(config_path = ?self.config_path, "Opened configuration file");
            }
            TrayEvent::ExitRequested => {
                info!("Exit requested from tray menu");
                if let Err(e) = self.ui.notify(ShellCommand::Shutdown) {
                    error!(error = ?e, "Failed to send shutdown command");
                }
                return Ok(ControlFlow::Break(()));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Reload the config file after an external edit and push the server
    /// list to the tray.
    ///
    /// Our own saves land here too; they match the in-memory config and
    /// are ignored.
    #[instrument(skip(self))]
    pub(crate) fn reload_if_changed(&mut self) -> AppResult<()> {
        // Missing file: the next save recreates it.
        if !self.config_path.exists() {
            return Ok(());
        }

        let config = Config::load_from(&self.config_path)?;
        if config == self.config {
            debug!("Configuration unchanged");
            return Ok(());
        }

        let servers_changed =
            config.servers != self.config.servers || config.selected != self.config.selected;
        self.config = config;
        info!("Configuration reloaded");

        if servers_changed {
            self.ui.notify(ShellCommand::RefreshServers {
                servers: self.config.server_entries(),
                selected: self.config.selected,
            })?;
            info!(servers = self.config.servers.len(), "Server list reloaded");
        }

        Ok(())
    }

    /// Apply one field change on top of the file's current contents and save.
    ///
    /// Reloading first keeps edits the watcher has not delivered yet.
    #[track_caller]
    fn persist(&mut self, apply: impl FnOnce(&mut Config)) -> AppResult<()> {
        self.reload_if_changed()?;
        apply(&mut self.config);
        self.config.save_to(&self.config_path)?;
        Ok(())
    }

    #[track_caller]
    fn open_path(&self, path: &Path) -> AppResult<()> {
        (self.opener)(path).map_err(|e| AppError::OpenFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
