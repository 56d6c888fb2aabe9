mod menu_action;
mod menu_state;
mod menu_tree;
mod server_entry;

pub use {
    menu_action::MenuAction,
    menu_state::MenuState,
    menu_tree::{MenuNode, MenuTree},
    server_entry::ServerEntry,
};

/// Fixed menu labels shown to the user.
pub mod labels {
    /// Tray icon tooltip.
    pub const TOOLTIP: &str = "ShadowsocksR client";
    /// Enable system proxy toggle.
    pub const ENABLE: &str = "启用系统代理";
    /// Server submenu title.
    pub const SERVERS: &str = "服务器";
    /// Trailing "edit servers" entry of the server submenu.
    pub const EDIT_SERVERS: &str = "编辑服务器";
    /// Launch at login toggle.
    pub const AUTO_LAUNCH: &str = "开机自启";
    /// QR code scan.
    pub const QR_SCAN: &str = "二维码扫描";
    /// Open the log viewer.
    pub const VIEW_LOG: &str = "查看日志";
    /// Open the configuration file.
    pub const OPEN_CONFIG: &str = "打开配置文件";
    /// Quit the application.
    pub const EXIT: &str = "退出";
}
