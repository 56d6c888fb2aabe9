/// Checked flags of the tray menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    /// System proxy enabled.
    pub enable: bool,
    /// Launch at login enabled.
    pub auto_launch: bool,
    /// Index of the checked server, if any.
    pub selected: Option<usize>,
}

impl MenuState {
    /// Create a menu state.
    pub fn new(enable: bool, auto_launch: bool, selected: Option<usize>) -> Self {
        Self {
            enable,
            auto_launch,
            selected,
        }
    }

    /// Selected server as a signed index, `-1` when nothing is checked.
    pub fn selected_index(&self) -> i64 {
        self.selected
            .and_then(|index| i64::try_from(index).ok())
            .unwrap_or(-1)
    }

    /// Drop the selection when it does not point into a list of `len` servers.
    pub(crate) fn clamp_selection(mut self, len: usize) -> Self {
        self.selected = self.selected.filter(|index| *index < len);
        self
    }
}
