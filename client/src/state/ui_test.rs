use super::*;

#[test]
fn ui_state_default_theme_is_dark() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Dark);
}
