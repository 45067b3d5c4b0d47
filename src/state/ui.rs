//! Local UI chrome state (navigation menu, notification preference).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the saved-movie store so
//! rendering controls can evolve independently of persisted data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug)]
pub struct UiState {
    pub mobile_menu_open: bool,
    /// When off, success and info banners are only logged. Errors always show.
    pub notifications_enabled: bool,
    /// Bumped after every successful saved-list mutation so mounted sections rebind.
    pub saved_revision: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self { mobile_menu_open: false, notifications_enabled: true, saved_revision: 0 }
    }
}

impl UiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn bump_saved_revision(&mut self) {
        self.saved_revision = self.saved_revision.wrapping_add(1);
    }

    pub fn notifications_label(&self) -> &'static str {
        if self.notifications_enabled { "Notifications: ON" } else { "Notifications: OFF" }
    }
}
