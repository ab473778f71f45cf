use super::*;

#[test]
fn default_is_light_with_sidebar_closed() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.sidebar_open);
}

#[test]
fn with_dark_mode_keeps_sidebar_closed() {
    let state = UiState::with_dark_mode(true);
    assert!(state.dark_mode);
    assert!(!state.sidebar_open);
}

#[test]
fn sidebar_toggles_and_closes() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
    state.toggle_sidebar();
    state.close_sidebar();
    assert!(!state.sidebar_open);
}
