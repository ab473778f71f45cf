//! Local UI chrome state (theme, sidebar).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of page data so the shell can change
//! without touching the CRUD views.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Sidebar visibility on narrow screens.
    pub sidebar_open: bool,
}

impl UiState {
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self { dark_mode, ..Self::default() }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Navigating closes the mobile sidebar.
    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}
