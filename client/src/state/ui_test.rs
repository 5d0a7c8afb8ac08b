use super::*;

#[test]
fn default_has_no_warning_or_flash() {
    let ui = UiState::default();
    assert!(!ui.idle_warning);
    assert_eq!(ui.flash, None);
}

#[test]
fn flash_is_taken_once() {
    let mut ui = UiState::default();
    ui.set_flash("Your password has expired.");
    assert_eq!(ui.take_flash().as_deref(), Some("Your password has expired."));
    assert_eq!(ui.take_flash(), None);
}
