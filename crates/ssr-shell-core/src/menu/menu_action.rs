/// Prefix of server submenu item ids, followed by the server index.
const SERVER_ID_PREFIX: &str = "server_";

/// What a menu item does when clicked. Doubles as the item id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Toggle the system proxy.
    ToggleEnable,
    /// Select the server at the given position.
    SelectServer(usize),
    /// Open the server editor.
    EditServers,
    /// Toggle launch at login.
    ToggleAutoLaunch,
    /// Start a QR code scan.
    QrScan,
    /// Open the log viewer.
    ViewLog,
    /// Open the configuration file.
    OpenConfig,
    /// Quit the application.
    Exit,
}

impl MenuAction {
    /// Stable id handed to the host menu API.
    pub fn id(&self) -> String {
        match self {
            MenuAction::ToggleEnable => "enable".to_string(),
            MenuAction::SelectServer(index) => format!("{}{}", SERVER_ID_PREFIX, index),
            MenuAction::EditServers => "edit_servers".to_string(),
            MenuAction::ToggleAutoLaunch => "auto_launch".to_string(),
            MenuAction::QrScan => "qr_scan".to_string(),
            MenuAction::ViewLog => "view_log".to_string(),
            MenuAction::OpenConfig => "open_config".to_string(),
            MenuAction::Exit => "exit".to_string(),
        }
    }

    /// Parse an id produced by [`MenuAction::id`].
    pub fn from_id(id: &str) -> Option<Self> {
        let action = match id {
            "enable" => MenuAction::ToggleEnable,
            "edit_servers" => MenuAction::EditServers,
            "auto_launch" => MenuAction::ToggleAutoLaunch,
            "qr_scan" => MenuAction::QrScan,
            "view_log" => MenuAction::ViewLog,
            "open_config" => MenuAction::OpenConfig,
            "exit" => MenuAction::Exit,
            other => {
                let index = other.strip_prefix(SERVER_ID_PREFIX)?.parse().ok()?;
                MenuAction::SelectServer(index)
            }
        };
        Some(action)
    }
}
