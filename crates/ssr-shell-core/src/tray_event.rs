use tokio::sync::mpsc;
use tracing::warn;

/// Events emitted by the tray controller in response to user clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayEvent {
    /// The system proxy toggle changed to the given value.
    EnableToggled(bool),
    /// The launch-at-login toggle changed to the given value.
    AutoLaunchToggled(bool),
    /// The server at the given position was selected.
    ServerSelected(usize),
    /// The main window was requested (icon click or "edit servers").
    OpenRequested,
    /// A QR code scan was requested.
    QrScanRequested,
    /// The log viewer was requested.
    OpenLogRequested,
    /// The configuration file was requested.
    OpenConfigRequested,
    /// The user asked to quit.
    ExitRequested,
}

/// Receiving half of the tray event channel. Single consumer.
pub type EventReceiver = mpsc::UnboundedReceiver<TrayEvent>;

/// Sending half of the tray event channel.
///
/// Emission never blocks and never fails: with the consumer gone the event
/// is dropped and a warning logged.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<TrayEvent>,
}

impl EventSender {
    /// Deliver an event to the consumer.
    pub fn emit(&self, event: TrayEvent) {
        if self.tx.send(event).is_err() {
            warn!(?event, "Tray event dropped, consumer is gone");
        }
    }
}

/// Create a connected sender/receiver pair.
pub fn event_channel() -> (EventSender, EventReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSender { tx }, rx)
}
