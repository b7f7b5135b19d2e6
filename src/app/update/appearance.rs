use super::super::state::{App, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::config::ThemeMode;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_font_size_changed(&mut self, size: u32) {
        let clamped = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if clamped == self.config.font_size {
            return;
        }
        debug!(
            old = self.config.font_size,
            new = clamped,
            "Font size changed"
        );
        self.config.font_size = clamped;
        self.relayout_page();
    }

    pub(super) fn handle_toggle_theme(&mut self) {
        self.config.theme = match self.config.theme {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        };
        info!(theme = %self.config.theme, "Toggled theme");
    }
}
