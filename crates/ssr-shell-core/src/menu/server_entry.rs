use std::fmt;

/// A configured proxy server as shown in the server submenu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEntry {
    /// User-facing remark for the server.
    pub remark: String,
    /// Server hostname or address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl ServerEntry {
    /// Create a server entry.
    pub fn new(remark: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            remark: remark.into(),
            host: host.into(),
            port,
        }
    }

    /// Label used for the submenu item, e.g. `tokyo(203.0.113.7:8388)`.
    pub fn menu_label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ServerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}:{})", self.remark, self.host, self.port)
    }
}
