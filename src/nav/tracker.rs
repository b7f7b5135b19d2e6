use super::section::SectionRegistry;
use tracing::trace;

/// Fraction of the scrollable distance already traversed, clamped to `[0, 1]`.
///
/// Content shorter than the viewport (no scrollable distance) and non-finite
/// input both report 0.
pub fn compute_progress_ratio(scroll_offset: f32, scrollable_height: f32) -> f32 {
    if !scroll_offset.is_finite() || !scrollable_height.is_finite() || scrollable_height <= 0.0 {
        return 0.0;
    }
    (scroll_offset / scrollable_height).clamp(0.0, 1.0)
}

/// Id of the last section (document order) whose top has crossed the
/// activation line, falling back to the first section near the top of the
/// page. `None` only when no sections are registered.
pub fn compute_active_section(
    scroll_offset: f32,
    sections: &SectionRegistry,
    activation_line: f32,
) -> Option<&str> {
    let first = sections.first()?;
    let offset = if scroll_offset.is_finite() {
        scroll_offset
    } else {
        0.0
    };
    let line = if activation_line.is_finite() {
        activation_line
    } else {
        0.0
    };
    let threshold = offset + line;

    let mut active = first;
    for (section, top) in sections.iter() {
        // Equal offsets keep replacing, so the later section wins ties.
        if top.is_finite() && top <= threshold {
            active = section;
        }
    }
    Some(active.id.as_str())
}

/// Raw reading from the scroll surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    pub offset: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ScrollSample {
    pub fn new(offset: f32, viewport_height: f32, content_height: f32) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        ScrollSample {
            offset: clean(offset),
            viewport_height: clean(viewport_height),
            content_height: clean(content_height),
        }
    }

    pub fn scrollable_height(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

/// Derived reading state for one page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollState {
    pub progress_ratio: f32,
    pub active_section_id: Option<String>,
}

/// Coalesces scroll samples and recomputes [`ScrollState`] once per frame.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    pending: Option<ScrollSample>,
    last_sample: Option<ScrollSample>,
    generation: u64,
    processed_generation: u64,
    coalesced: u64,
    dirty: bool,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(sections: &SectionRegistry) -> Self {
        ScrollTracker {
            state: ScrollState {
                progress_ratio: 0.0,
                active_section_id: sections.first().map(|section| section.id.clone()),
            },
            ..ScrollTracker::default()
        }
    }

    /// Store a sample for the next frame. A newer sample replaces one that no
    /// frame has consumed yet.
    pub fn record(&mut self, sample: ScrollSample) {
        if self.pending.replace(sample).is_some() {
            self.coalesced += 1;
        }
        self.generation += 1;
    }

    /// Recompute from the last sample on the next frame, e.g. after offsets
    /// were re-measured.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some() || self.dirty
    }

    /// Number of samples recorded so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Generation of the newest sample that a frame has consumed.
    pub fn processed_generation(&self) -> u64 {
        self.processed_generation
    }

    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }

    pub fn last_offset(&self) -> Option<f32> {
        self.pending.or(self.last_sample).map(|sample| sample.offset)
    }

    pub fn last_sample(&self) -> Option<ScrollSample> {
        self.pending.or(self.last_sample)
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Consume the pending sample (if any) and recompute. Returns `true` when
    /// the derived state changed.
    pub fn sample_frame(&mut self, sections: &SectionRegistry, activation_line: f32) -> bool {
        match self.pending.take() {
            Some(sample) => {
                self.last_sample = Some(sample);
                self.processed_generation = self.generation;
            }
            None if self.dirty => {}
            None => return false,
        }
        self.dirty = false;

        let sample = self.last_sample.unwrap_or_default();
        let next = ScrollState {
            progress_ratio: compute_progress_ratio(sample.offset, sample.scrollable_height()),
            active_section_id: compute_active_section(sample.offset, sections, activation_line)
                .map(str::to_string),
        };
        if next == self.state {
            return false;
        }
        trace!(
            offset = sample.offset,
            ratio = next.progress_ratio,
            active = ?next.active_section_id,
            "Scroll state recomputed"
        );
        self.state = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::section::SectionDescriptor;

    fn sections(offsets: &[f32]) -> SectionRegistry {
        let names = ["first", "second", "third", "fourth"];
        let mut registry = SectionRegistry::new(
            offsets
                .iter()
                .enumerate()
                .map(|(idx, _)| SectionDescriptor::new(names[idx], names[idx].to_uppercase()))
                .collect(),
        );
        registry.replace_offsets(offsets.to_vec());
        registry
    }

    #[test]
    fn ratio_stays_in_bounds_and_hits_endpoints() {
        let height = 2400.0;
        assert_eq!(compute_progress_ratio(0.0, height), 0.0);
        assert_eq!(compute_progress_ratio(height, height), 1.0);
        for step in 0..=48 {
            let offset = step as f32 * 50.0;
            let ratio = compute_progress_ratio(offset, height);
            assert!((0.0..=1.0).contains(&ratio), "ratio {ratio} out of bounds");
        }
        assert_eq!(compute_progress_ratio(height * 2.0, height), 1.0);
    }

    #[test]
    fn ratio_guards_against_empty_scroll_range() {
        assert_eq!(compute_progress_ratio(120.0, 0.0), 0.0);
        assert_eq!(compute_progress_ratio(0.0, 0.0), 0.0);
        assert_eq!(compute_progress_ratio(f32::NAN, 100.0), 0.0);
        assert_eq!(compute_progress_ratio(10.0, f32::NAN), 0.0);
    }

    #[test]
    fn ratio_is_monotonic_in_offset() {
        let mut previous = -1.0f32;
        for step in 0..400 {
            let ratio = compute_progress_ratio(step as f32 * 7.5, 2000.0);
            assert!(ratio >= previous, "scrolling down decreased progress");
            previous = ratio;
        }
    }

    #[test]
    fn activation_line_picks_expected_sections() {
        let registry = sections(&[0.0, 400.0, 900.0]);
        assert_eq!(compute_active_section(0.0, &registry, 300.0), Some("first"));
        assert_eq!(compute_active_section(150.0, &registry, 300.0), Some("second"));
        assert_eq!(compute_active_section(700.0, &registry, 300.0), Some("third"));
    }

    #[test]
    fn falls_back_to_first_section_above_every_top() {
        let registry = sections(&[500.0, 900.0]);
        assert_eq!(compute_active_section(0.0, &registry, 300.0), Some("first"));
    }

    #[test]
    fn identical_offsets_resolve_to_the_later_section() {
        let registry = sections(&[0.0, 400.0, 400.0]);
        assert_eq!(compute_active_section(200.0, &registry, 300.0), Some("third"));
    }

    #[test]
    fn single_section_is_always_active() {
        let registry = sections(&[250.0]);
        for offset in [0.0, 100.0, 10_000.0, f32::NAN] {
            assert_eq!(compute_active_section(offset, &registry, 300.0), Some("first"));
        }
    }

    #[test]
    fn empty_section_list_has_no_active_id() {
        let registry = SectionRegistry::default();
        assert_eq!(compute_active_section(300.0, &registry, 300.0), None);
        let mut tracker = ScrollTracker::new(&registry);
        tracker.record(ScrollSample::new(300.0, 600.0, 1800.0));
        tracker.sample_frame(&registry, 300.0);
        assert_eq!(tracker.state().active_section_id, None);
        assert!((tracker.state().progress_ratio - 0.25).abs() < 1e-6);
    }

    #[test]
    fn unmeasured_sections_report_first_as_active() {
        let registry = SectionRegistry::new(vec![
            SectionDescriptor::new("a", "A"),
            SectionDescriptor::new("b", "B"),
        ]);
        assert_eq!(compute_active_section(5000.0, &registry, 300.0), Some("a"));
    }

    #[test]
    fn frames_coalesce_samples_and_skip_idle_frames() {
        let registry = sections(&[0.0, 400.0, 900.0]);
        let mut tracker = ScrollTracker::new(&registry);
        assert_eq!(tracker.state().active_section_id.as_deref(), Some("first"));

        tracker.record(ScrollSample::new(50.0, 600.0, 2000.0));
        tracker.record(ScrollSample::new(120.0, 600.0, 2000.0));
        tracker.record(ScrollSample::new(700.0, 600.0, 2000.0));
        assert_eq!(tracker.coalesced(), 2);
        assert!(tracker.sample_frame(&registry, 300.0));
        assert_eq!(tracker.state().active_section_id.as_deref(), Some("third"));
        assert_eq!(tracker.processed_generation(), 3);

        assert!(!tracker.has_pending());
        assert!(!tracker.sample_frame(&registry, 300.0));
    }

    #[test]
    fn invalidate_recomputes_against_new_offsets() {
        let mut registry = sections(&[0.0, 400.0, 900.0]);
        let mut tracker = ScrollTracker::new(&registry);
        tracker.record(ScrollSample::new(150.0, 600.0, 2000.0));
        tracker.sample_frame(&registry, 300.0);
        assert_eq!(tracker.state().active_section_id.as_deref(), Some("second"));

        registry.replace_offsets(vec![0.0, 800.0, 1600.0]);
        tracker.invalidate();
        assert!(tracker.sample_frame(&registry, 300.0));
        assert_eq!(tracker.state().active_section_id.as_deref(), Some("first"));
        assert_eq!(tracker.processed_generation(), 1);
    }

    #[test]
    fn samples_sanitize_degenerate_geometry() {
        let sample = ScrollSample::new(f32::NAN, -20.0, f32::INFINITY);
        assert_eq!(sample.offset, 0.0);
        assert_eq!(sample.scrollable_height(), 0.0);
    }
}
