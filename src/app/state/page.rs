use crate::guide_loader::GuidePage;
use crate::layout::{LayoutMetrics, PageLayout, layout_page};
use crate::nav::{NavSettings, ScrollSync};
use tracing::{debug, warn};

/// Everything that lives only while a guide page is mounted.
pub(in crate::app) struct PageSession {
    pub(in crate::app) guide_idx: usize,
    pub(in crate::app) guide: GuidePage,
    /// Open state per section, per FAQ item.
    pub(in crate::app) expanded: Vec<Vec<bool>>,
    pub(in crate::app) layout: PageLayout,
    /// Width reported by the scroll surface; `None` until the first scroll
    /// event after mount or resize.
    pub(in crate::app) measured_width: Option<f32>,
    pub(in crate::app) sync: ScrollSync,
    /// Set whenever the rendered geometry may have drifted from `layout`.
    measure_requested: bool,
}

impl PageSession {
    pub(in crate::app) fn mount(
        guide_idx: usize,
        guide: GuidePage,
        settings: NavSettings,
        metrics: LayoutMetrics,
    ) -> Self {
        let expanded = guide
            .sections
            .iter()
            .map(|section| vec![false; section.faq_count()])
            .collect::<Vec<_>>();
        let sync = ScrollSync::mount(guide.section_descriptors(), settings);
        let mut session = PageSession {
            guide_idx,
            guide,
            expanded,
            layout: PageLayout::default(),
            measured_width: None,
            sync,
            measure_requested: false,
        };
        session.relayout(metrics);
        session
    }

    /// Re-estimate section geometry and ask for the rendered bounds.
    pub(in crate::app) fn relayout(&mut self, metrics: LayoutMetrics) {
        let layout = layout_page(&self.guide, &self.expanded, &metrics);
        self.sync.remeasure(layout.section_offsets.clone());
        debug!(
            width = metrics.viewport_width,
            content_height = layout.content_height,
            measured = self.sync.registry().is_measured(),
            replaced_rendered = self.layout.rendered,
            "Guide page estimated"
        );
        self.layout = layout;
        self.measure_requested = true;
    }

    /// Replace the estimate with bounds read back from the laid-out page.
    pub(in crate::app) fn apply_rendered_layout(&mut self, layout: PageLayout) -> bool {
        if layout.section_offsets.len() != self.guide.sections.len() {
            warn!(
                measured = layout.section_offsets.len(),
                sections = self.guide.sections.len(),
                "Ignoring section bounds for a different page"
            );
            return false;
        }
        self.sync.remeasure(layout.section_offsets.clone());
        debug!(
            content_height = layout.content_height,
            drift = layout.content_height - self.layout.content_height,
            "Guide page measured"
        );
        self.layout = layout;
        true
    }

    pub(in crate::app) fn request_measure(&mut self) {
        self.measure_requested = true;
    }

    pub(in crate::app) fn take_measure_request(&mut self) -> bool {
        std::mem::take(&mut self.measure_requested)
    }

    pub(in crate::app) fn is_faq_open(&self, section: usize, item: usize) -> bool {
        self.expanded
            .get(section)
            .and_then(|items| items.get(item))
            .copied()
            .unwrap_or(false)
    }

    /// Flip one FAQ item. Returns `false` when the item does not exist.
    pub(in crate::app) fn toggle_faq(&mut self, section: usize, item: usize) -> bool {
        match self
            .expanded
            .get_mut(section)
            .and_then(|items| items.get_mut(item))
        {
            Some(open) => {
                *open = !*open;
                true
            }
            None => false,
        }
    }
}
