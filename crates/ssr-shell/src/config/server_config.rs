use ssr_shell_core::ServerEntry;

use serde::{Deserialize, Serialize};

/// A configured ShadowsocksR server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Display name shown in the tray menu.
    #[serde(default)]
    pub remark: String,
    /// Server hostname or address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl From<&ServerConfig> for ServerEntry {
    fn from(server: &ServerConfig) -> Self {
        ServerEntry::new(server.remark.clone(), server.host.clone(), server.port)
    }
}
