//! Transient, app-wide presentation state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Shown after 55 idle minutes until the next pointer activity.
    pub idle_warning: bool,
    /// One-shot message carried across a navigation (e.g. "Password expired").
    pub flash: Option<String>,
}

impl UiState {
    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash = Some(message.into());
    }

    pub fn take_flash(&mut self) -> Option<String> {
        self.flash.take()
    }
}
