use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_menu_closed() {
    let state = UiState::default();
    assert!(!state.mobile_menu_open);
}

#[test]
fn ui_state_default_notifications_on() {
    let state = UiState::default();
    assert!(state.notifications_enabled);
    assert_eq!(state.notifications_label(), "Notifications: ON");
}

#[test]
fn ui_state_default_revision_zero() {
    assert_eq!(UiState::default().saved_revision, 0);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn toggle_mobile_menu_flips_and_close_resets() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.mobile_menu_open);
    state.toggle_mobile_menu();
    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn bump_saved_revision_increments() {
    let mut state = UiState::default();
    state.bump_saved_revision();
    state.bump_saved_revision();
    assert_eq!(state.saved_revision, 2);
}

#[test]
fn notifications_label_reflects_preference() {
    let state = UiState { notifications_enabled: false, ..UiState::default() };
    assert_eq!(state.notifications_label(), "Notifications: OFF");
}
