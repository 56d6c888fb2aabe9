mod server_config;
#[allow(clippy::module_inception)]
mod config;

pub(crate) use {config::Config, server_config::ServerConfig};

pub(crate) const DEFAULT_ENABLE: bool = false;
pub(crate) const DEFAULT_AUTO_LAUNCH: bool = false;

pub(crate) fn default_enable() -> bool {
    DEFAULT_ENABLE
}

pub(crate) fn default_auto_launch() -> bool {
    DEFAULT_AUTO_LAUNCH
}
