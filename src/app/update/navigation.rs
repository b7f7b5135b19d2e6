use super::super::state::App;
use super::Effect;
use std::time::Instant;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_open_guide(&mut self, guide_idx: usize, effects: &mut Vec<Effect>) {
        if self.mount_guide(guide_idx) {
            effects.push(Effect::ResetScroll);
            effects.push(Effect::MeasureWindow);
        } else {
            warn!(guide_idx, "Requested guide does not exist");
        }
    }

    pub(super) fn handle_close_guide(&mut self) {
        if let Some(page) = self.page.take() {
            info!(guide = %page.guide.title, "Closed guide");
        }
    }

    pub(super) fn handle_section_selected(&mut self, section_id: &str) {
        let Some(page) = self.page.as_mut() else {
            return;
        };
        if !page.sync.select(section_id, Instant::now()) {
            debug!(section = section_id, "Section not on this page");
        }
    }

    pub(super) fn handle_step_section(&mut self, forward: bool) {
        if let Some(page) = self.page.as_mut() {
            page.sync.step_section(forward, Instant::now());
        }
    }

    pub(super) fn handle_faq_toggled(&mut self, section: usize, item: usize) {
        let Some(page) = self.page.as_mut() else {
            return;
        };
        if !page.toggle_faq(section, item) {
            warn!(section, item, "FAQ item does not exist");
            return;
        }
        debug!(
            section,
            item,
            open = page.is_faq_open(section, item),
            "FAQ toggled"
        );
        // Opening an answer pushes every later section down.
        self.relayout_page();
    }
}
