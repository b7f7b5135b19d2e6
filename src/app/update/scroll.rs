use super::super::state::{App, WindowState};
use super::Effect;
use crate::layout::PageLayout;
use crate::nav::ScrollSample;
use std::time::Instant;
use tracing::debug;

/// Width changes smaller than this do not reflow the page.
const WIDTH_EPSILON_PX: f32 = 0.5;
/// Reported content height drifting further than this from the known layout
/// triggers a fresh read of the section bounds.
const HEIGHT_EPSILON_PX: f32 = 0.5;

impl App {
    pub(super) fn handle_scrolled(
        &mut self,
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        content_height: f32,
    ) {
        let Some(page) = self.page.as_mut() else {
            return;
        };

        let width_changed = viewport_width.is_finite()
            && viewport_width > 0.0
            && page
                .measured_width
                .is_none_or(|width| (width - viewport_width).abs() > WIDTH_EPSILON_PX);
        if width_changed {
            debug!(
                old = ?page.measured_width,
                new = viewport_width,
                "Content width changed"
            );
            page.measured_width = Some(viewport_width);
        }

        if content_height.is_finite()
            && (content_height - page.layout.content_height).abs() > HEIGHT_EPSILON_PX
        {
            page.request_measure();
        }

        page.sync.record_scroll(ScrollSample::new(
            offset_y,
            viewport_height,
            content_height,
        ));

        if width_changed {
            self.relayout_page();
        }
    }

    pub(super) fn handle_sections_measured(
        &mut self,
        guide_idx: usize,
        layout: Option<PageLayout>,
    ) {
        let Some(page) = self.page.as_mut() else {
            return;
        };
        if page.guide_idx != guide_idx {
            debug!(guide_idx, open = page.guide_idx, "Dropping bounds of a closed guide");
            return;
        }
        match layout {
            Some(layout) => {
                page.apply_rendered_layout(layout);
            }
            None => debug!(guide_idx, "Section containers not laid out yet"),
        }
    }

    pub(super) fn handle_frame(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let Some(page) = self.page.as_mut() else {
            return;
        };
        let output = page.sync.on_frame(now);
        if output.state_changed {
            let state = page.sync.state();
            debug!(
                active = ?state.active_section_id,
                ratio = state.progress_ratio,
                "Scroll state changed"
            );
        }
        if let Some(offset) = output.scroll_to {
            effects.push(Effect::ScrollTo(offset));
        }
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        self.window = WindowState::new(width, height);
        debug!(width, height, "Window resized");
        if let Some(page) = self.page.as_mut() {
            // Fall back to the window estimate until the scroll surface
            // reports its new bounds.
            page.measured_width = None;
            self.relayout_page();
        }
    }
}
