//! Immutable description of the tray context menu.
//!
//! The tree is rebuilt from [`MenuState`] and the server list on every
//! change and handed to the host as a whole. Nothing holds references into
//! host menu objects.

use crate::menu::{MenuAction, MenuState, ServerEntry, labels};

/// One entry of the context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    /// Item with a check mark.
    Checkbox {
        /// Click action and item id.
        action: MenuAction,
        /// Displayed text.
        label: String,
        /// Whether the check mark is shown.
        checked: bool,
    },
    /// Plain clickable item.
    Action {
        /// Click action and item id.
        action: MenuAction,
        /// Displayed text.
        label: String,
    },
    /// Nested list of items.
    Submenu {
        /// Displayed text.
        label: String,
        /// Items inside the submenu.
        children: Vec<MenuNode>,
    },
}

impl MenuNode {
    fn checkbox(action: MenuAction, label: impl Into<String>, checked: bool) -> Self {
        MenuNode::Checkbox {
            action,
            label: label.into(),
            checked,
        }
    }

    fn action(action: MenuAction, label: impl Into<String>) -> Self {
        MenuNode::Action {
            action,
            label: label.into(),
        }
    }

    /// Displayed text of the node.
    pub fn label(&self) -> &str {
        match self {
            MenuNode::Checkbox { label, .. }
            | MenuNode::Action { label, .. }
            | MenuNode::Submenu { label, .. } => label,
        }
    }

    /// Click action, `None` for submenus.
    pub fn menu_action(&self) -> Option<MenuAction> {
        match self {
            MenuNode::Checkbox { action, .. } | MenuNode::Action { action, .. } => Some(*action),
            MenuNode::Submenu { .. } => None,
        }
    }

    /// Check mark state, `None` for nodes that are not checkboxes.
    pub fn checked(&self) -> Option<bool> {
        match self {
            MenuNode::Checkbox { checked, .. } => Some(*checked),
            _ => None,
        }
    }
}

/// The full context menu: enable toggle, server submenu, auto-launch toggle,
/// QR scan, view log, open config, exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
}

impl MenuTree {
    /// Position of the server submenu among the top-level nodes.
    const SERVERS_POSITION: usize = 1;

    /// Build the menu for the given state and server list.
    ///
    /// A selection outside the server list leaves every server unchecked.
    pub fn build(state: &MenuState, servers: &[ServerEntry]) -> Self {
        let nodes = vec![
            MenuNode::checkbox(MenuAction::ToggleEnable, labels::ENABLE, state.enable),
            MenuNode::Submenu {
                label: labels::SERVERS.to_string(),
                children: Self::server_submenu(servers, state.selected),
            },
            MenuNode::checkbox(MenuAction::ToggleAutoLaunch, labels::AUTO_LAUNCH, state.auto_launch),
            MenuNode::action(MenuAction::QrScan, labels::QR_SCAN),
            MenuNode::action(MenuAction::ViewLog, labels::VIEW_LOG),
            MenuNode::action(MenuAction::OpenConfig, labels::OPEN_CONFIG),
            MenuNode::action(MenuAction::Exit, labels::EXIT),
        ];

        Self { nodes }
    }

    /// One checkbox per server followed by the "edit servers" item.
    pub fn server_submenu(servers: &[ServerEntry], selected: Option<usize>) -> Vec<MenuNode> {
        servers
            .iter()
            .enumerate()
            .map(|(index, server)| {
                MenuNode::checkbox(
                    MenuAction::SelectServer(index),
                    server.menu_label(),
                    selected == Some(index),
                )
            })
            .chain(std::iter::once(MenuNode::action(
                MenuAction::EditServers,
                labels::EDIT_SERVERS,
            )))
            .collect()
    }

    /// Top-level nodes in display order.
    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    /// Items of the server submenu, including the trailing edit entry.
    pub fn server_items(&self) -> &[MenuNode] {
        match self.nodes.get(Self::SERVERS_POSITION) {
            Some(MenuNode::Submenu { children, .. }) => children,
            _ => &[],
        }
    }

    /// Check mark of the top-level checkbox bound to `action`.
    pub fn is_checked(&self, action: MenuAction) -> bool {
        self.nodes
            .iter()
            .find(|node| node.menu_action() == Some(action))
            .and_then(MenuNode::checked)
            .unwrap_or(false)
    }

    /// Position of the first checked server item.
    pub fn checked_server(&self) -> Option<usize> {
        self.server_items()
            .iter()
            .position(|node| node.checked() == Some(true))
    }

    /// Read the flags back out of the tree.
    pub fn state(&self) -> MenuState {
        MenuState {
            enable: self.is_checked(MenuAction::ToggleEnable),
            auto_launch: self.is_checked(MenuAction::ToggleAutoLaunch),
            selected: self.checked_server(),
        }
    }
}
