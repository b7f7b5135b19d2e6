use super::navigator::{NavEntry, SectionNavigator};
use super::progress::ProgressIndicator;
use super::section::{SectionDescriptor, SectionRegistry};
use super::smooth_scroll::ScrollAnimation;
use super::spring::SpringParams;
use super::tracker::{ScrollSample, ScrollState, ScrollTracker};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// A sample further than this outside the path the animation has travelled
/// means the reader grabbed the scrollbar or wheel mid-animation.
const USER_SCROLL_TOLERANCE_PX: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavSettings {
    /// Distance below the viewport top at which a section becomes active.
    pub activation_line: f32,
    /// Space kept above a section after navigating to it.
    pub header_clearance: f32,
    pub spring: SpringParams,
    pub scroll_duration: Duration,
}

impl Default for NavSettings {
    fn default() -> Self {
        NavSettings {
            activation_line: 300.0,
            header_clearance: 120.0,
            spring: SpringParams::default(),
            scroll_duration: Duration::from_millis(450),
        }
    }
}

/// Work produced by a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameOutput {
    /// Absolute offset the scroll surface should move to.
    pub scroll_to: Option<f32>,
    /// Whether the computed scroll state changed this frame.
    pub state_changed: bool,
}

/// Scroll-synchronized navigation for one mounted page.
///
/// Owns the tracker, the progress spring and the navigator. Created when a
/// page mounts and dropped when it unmounts.
#[derive(Debug)]
pub struct ScrollSync {
    settings: NavSettings,
    registry: SectionRegistry,
    tracker: ScrollTracker,
    progress: ProgressIndicator,
    navigator: SectionNavigator,
    animation: Option<ScrollAnimation>,
    /// Lowest and highest offsets requested since the animation started.
    /// Samples may trail the newest request by any number of redraws.
    travelled: Option<(f32, f32)>,
    last_frame_at: Option<Instant>,
}

impl ScrollSync {
    pub fn mount(sections: Vec<SectionDescriptor>, settings: NavSettings) -> Self {
        let registry = SectionRegistry::new(sections);
        info!(
            sections = registry.len(),
            activation_line = settings.activation_line,
            header_clearance = settings.header_clearance,
            damping_ratio = settings.spring.damping / settings.spring.critical_damping(),
            "Mounted scroll sync"
        );
        ScrollSync {
            tracker: ScrollTracker::new(&registry),
            progress: ProgressIndicator::new(settings.spring),
            navigator: SectionNavigator::default(),
            animation: None,
            travelled: None,
            last_frame_at: None,
            registry,
            settings,
        }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn state(&self) -> &ScrollState {
        self.tracker.state()
    }

    /// Replace every section offset; the next frame recomputes the state.
    pub fn remeasure(&mut self, offsets: Vec<f32>) {
        if self.registry.replace_offsets(offsets) {
            debug!(sections = self.registry.len(), "Section offsets re-measured");
            self.tracker.invalidate();
        }
    }

    pub fn record_scroll(&mut self, sample: ScrollSample) {
        if let Some(animation) = self.animation {
            let (low, high) = self
                .travelled
                .unwrap_or((animation.origin(), animation.origin()));
            if sample.offset < low - USER_SCROLL_TOLERANCE_PX
                || sample.offset > high + USER_SCROLL_TOLERANCE_PX
            {
                debug!(
                    offset = sample.offset,
                    low,
                    high,
                    "Manual scroll interrupted section navigation"
                );
                self.animation = None;
                self.travelled = None;
            }
        }
        self.tracker.record(sample);
    }

    /// Advance one animation frame.
    pub fn on_frame(&mut self, now: Instant) -> FrameOutput {
        let dt = self
            .last_frame_at
            .map(|previous| now.saturating_duration_since(previous).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame_at = Some(now);

        let was_animating = self.animation.is_some();
        let mut scroll_to = None;
        if let Some(animation) = self.animation {
            let offset = self.clamp_to_scroll_range(animation.sample(now));
            scroll_to = Some(offset);
            self.extend_travelled(offset);
            if animation.is_finished(now) {
                debug!(offset = animation.target(), "Section navigation finished");
                self.animation = None;
                self.travelled = None;
            }
        }

        let state_changed = self
            .tracker
            .sample_frame(&self.registry, self.settings.activation_line);
        // Samples produced by our own animation do not count as confirmation;
        // a manual scroll cancels the animation and is reconciled right away.
        if !was_animating {
            self.navigator
                .reconcile(self.tracker.processed_generation());
        }

        self.progress.set_target(self.tracker.state().progress_ratio);
        self.progress.tick(dt);
        if state_changed {
            trace!(
                progress_target = self.progress.target(),
                coalesced = self.tracker.coalesced(),
                "Frame applied new scroll state"
            );
        }

        FrameOutput {
            scroll_to,
            state_changed,
        }
    }

    /// Navigate to `section_id`. Returns `false` for unknown ids.
    pub fn select(&mut self, section_id: &str, now: Instant) -> bool {
        let Some(target) = self.navigator.select(
            section_id,
            &self.registry,
            self.settings.header_clearance,
            self.tracker.generation(),
        ) else {
            return false;
        };
        let target = self.clamp_to_scroll_range(target);
        let duration = self.settings.scroll_duration;
        match self.animation.as_mut() {
            Some(animation) => animation.retarget(now, target, duration),
            None => {
                let from = self.tracker.last_offset().unwrap_or(0.0);
                self.animation = Some(ScrollAnimation::new(from, target, now, duration));
                self.travelled = Some((from, from));
            }
        }
        info!(section = section_id, target, "Navigating to section");
        true
    }

    /// Move to the next (or previous) section relative to the active one.
    pub fn step_section(&mut self, forward: bool, now: Instant) -> bool {
        if self.registry.is_empty() {
            return false;
        }
        let current = self
            .active_id()
            .and_then(|id| self.registry.index_of(id))
            .unwrap_or(0);
        let next = if forward {
            current + 1
        } else {
            match current.checked_sub(1) {
                Some(idx) => idx,
                None => return false,
            }
        };
        let Some(id) = self.registry.get(next).map(|section| section.id.clone()) else {
            return false;
        };
        self.select(&id, now)
    }

    /// Whether a frame ticker is needed to make progress.
    pub fn needs_frames(&self) -> bool {
        self.tracker.has_pending() || !self.progress.is_settled() || self.animation.is_some()
    }

    pub fn is_animating_scroll(&self) -> bool {
        self.animation.is_some()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.navigator
            .active_id(self.tracker.state().active_section_id.as_deref())
    }

    /// Smoothed progress in `[0, 1]` for the bar.
    pub fn progress(&self) -> f32 {
        self.progress.display_value()
    }

    pub fn entries(&self) -> Vec<NavEntry> {
        self.navigator.entries(
            &self.registry,
            self.tracker.state().active_section_id.as_deref(),
        )
    }

    fn extend_travelled(&mut self, offset: f32) {
        self.travelled = Some(match self.travelled {
            Some((low, high)) => (low.min(offset), high.max(offset)),
            None => (offset, offset),
        });
    }

    fn clamp_to_scroll_range(&self, offset: f32) -> f32 {
        let offset = if offset.is_finite() {
            offset.max(0.0)
        } else {
            0.0
        };
        match self.tracker.last_sample() {
            Some(sample) if sample.content_height > 0.0 => offset.min(sample.scrollable_height()),
            _ => offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f32 = 600.0;
    const CONTENT: f32 = 2400.0;

    fn mounted() -> ScrollSync {
        let mut sync = ScrollSync::mount(
            vec![
                SectionDescriptor::new("first", "First"),
                SectionDescriptor::new("second", "Second"),
                SectionDescriptor::new("third", "Third"),
            ],
            NavSettings::default(),
        );
        sync.remeasure(vec![0.0, 400.0, 900.0]);
        sync
    }

    fn scroll(sync: &mut ScrollSync, offset: f32) {
        sync.record_scroll(ScrollSample::new(offset, VIEWPORT, CONTENT));
    }

    fn run_frames(sync: &mut ScrollSync, start: Instant, frames: u64) -> Instant {
        let mut now = start;
        for _ in 0..frames {
            now += Duration::from_millis(16);
            if let Some(offset) = sync.on_frame(now).scroll_to {
                scroll(sync, offset);
            }
        }
        now
    }

    #[test]
    fn mount_starts_on_first_section_with_zero_progress() {
        let sync = mounted();
        assert_eq!(sync.active_id(), Some("first"));
        assert_eq!(sync.progress(), 0.0);
        assert!(sync.needs_frames(), "re-measure should schedule a frame");
    }

    #[test]
    fn scroll_samples_drive_active_section() {
        let mut sync = mounted();
        let now = Instant::now();
        scroll(&mut sync, 150.0);
        assert!(sync.on_frame(now).state_changed);
        assert_eq!(sync.active_id(), Some("second"));
        scroll(&mut sync, 700.0);
        sync.on_frame(now + Duration::from_millis(16));
        assert_eq!(sync.active_id(), Some("third"));
    }

    #[test]
    fn click_highlights_target_before_any_new_sample() {
        let mut sync = mounted();
        let now = Instant::now();
        scroll(&mut sync, 0.0);
        sync.on_frame(now);
        assert!(sync.select("third", now));
        assert_eq!(sync.active_id(), Some("third"));
        let active: Vec<_> = sync
            .entries()
            .into_iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.id)
            .collect();
        assert_eq!(active, vec!["third".to_string()]);
    }

    #[test]
    fn computed_section_overrides_stale_click() {
        let mut sync = mounted();
        let now = Instant::now();
        scroll(&mut sync, 0.0);
        sync.on_frame(now);

        sync.select("third", now);
        // Reader immediately scrolls somewhere that computes to "second".
        scroll(&mut sync, 150.0);
        sync.on_frame(now + Duration::from_millis(16));
        assert_eq!(sync.active_id(), Some("second"));
        assert!(!sync.is_animating_scroll(), "manual scroll cancels navigation");
    }

    #[test]
    fn sample_recorded_before_click_does_not_clear_intent() {
        let mut sync = mounted();
        let now = Instant::now();
        scroll(&mut sync, 10.0);
        sync.select("third", now);
        sync.on_frame(now);
        assert_eq!(sync.active_id(), Some("third"));
    }

    #[test]
    fn navigation_animates_to_offset_minus_clearance() {
        let mut sync = mounted();
        let start = Instant::now();
        scroll(&mut sync, 0.0);
        sync.on_frame(start);
        sync.select("third", start);

        let first = sync
            .on_frame(start + Duration::from_millis(16))
            .scroll_to
            .unwrap_or_default();
        assert!(first > 0.0 && first < 780.0, "first step {first} should be partial");

        scroll(&mut sync, first);
        let end = run_frames(&mut sync, start + Duration::from_millis(16), 40);
        assert!(!sync.is_animating_scroll());
        let settled = sync.tracker.last_offset().unwrap_or_default();
        assert!((settled - 780.0).abs() < 1e-3, "landed at {settled}");
        assert_eq!(sync.active_id(), Some("third"));

        run_frames(&mut sync, end, 600);
        assert!(!sync.needs_frames());
        assert!((sync.progress() - 780.0 / (CONTENT - VIEWPORT)).abs() < 1e-3);
    }

    #[test]
    fn sample_trailing_by_one_frame_keeps_animation() {
        let mut sync = mounted();
        let start = Instant::now();
        scroll(&mut sync, 0.0);
        sync.on_frame(start);
        sync.select("third", start);
        let first = sync
            .on_frame(start + Duration::from_millis(16))
            .scroll_to
            .unwrap_or_default();
        let second = sync
            .on_frame(start + Duration::from_millis(32))
            .scroll_to
            .unwrap_or_default();
        assert!(second > first);
        scroll(&mut sync, first);
        assert!(sync.is_animating_scroll());
    }

    #[test]
    fn sample_lagging_several_frames_still_lands_on_target() {
        let mut sync = mounted();
        let start = Instant::now();
        scroll(&mut sync, 0.0);
        sync.on_frame(start);
        sync.select("third", start);

        let requested: Vec<f32> = (1..=3)
            .filter_map(|frame| {
                sync.on_frame(start + Duration::from_millis(16 * frame))
                    .scroll_to
            })
            .collect();
        assert_eq!(requested.len(), 3);
        // The surface only now reports the first of three requests.
        scroll(&mut sync, requested[0]);
        assert!(sync.is_animating_scroll());

        let end = run_frames(&mut sync, start + Duration::from_millis(48), 40);
        assert!(!sync.is_animating_scroll());
        let landed = sync.tracker.last_offset().unwrap_or_default();
        assert!((landed - 780.0).abs() < 1e-3, "landed at {landed}");
        sync.on_frame(end + Duration::from_millis(16));
        assert_eq!(sync.active_id(), Some("third"));
    }

    #[test]
    fn scrolling_back_past_the_origin_cancels_navigation() {
        let mut sync = mounted();
        let start = Instant::now();
        scroll(&mut sync, 200.0);
        sync.on_frame(start);
        sync.select("third", start);
        sync.on_frame(start + Duration::from_millis(16));
        scroll(&mut sync, 50.0);
        assert!(!sync.is_animating_scroll());
    }

    #[test]
    fn highlight_stays_on_target_while_animating() {
        let mut sync = mounted();
        let start = Instant::now();
        scroll(&mut sync, 0.0);
        sync.on_frame(start);
        sync.select("third", start);

        let mut now = start;
        while sync.is_animating_scroll() {
            now += Duration::from_millis(16);
            if let Some(offset) = sync.on_frame(now).scroll_to {
                assert_eq!(sync.active_id(), Some("third"), "at offset {offset}");
                scroll(&mut sync, offset);
            }
        }
        sync.on_frame(now + Duration::from_millis(16));
        assert_eq!(sync.state().active_section_id.as_deref(), Some("third"));
        assert_eq!(sync.active_id(), Some("third"));
    }

    #[test]
    fn targets_clamp_to_the_scrollable_range() {
        let mut sync = mounted();
        let now = Instant::now();
        sync.record_scroll(ScrollSample::new(0.0, VIEWPORT, 1000.0));
        sync.on_frame(now);
        sync.select("third", now);
        let out = sync.on_frame(now + Duration::from_secs(1));
        assert_eq!(out.scroll_to, Some(400.0));
    }

    #[test]
    fn remeasure_changes_later_results() {
        let mut sync = mounted();
        let now = Instant::now();
        scroll(&mut sync, 150.0);
        sync.on_frame(now);
        assert_eq!(sync.active_id(), Some("second"));

        // Narrower viewport: everything reflows further down.
        sync.remeasure(vec![0.0, 700.0, 1500.0]);
        assert!(sync.needs_frames());
        sync.on_frame(now + Duration::from_millis(16));
        assert_eq!(sync.active_id(), Some("first"));
    }

    #[test]
    fn keyboard_steps_move_between_sections() {
        let mut sync = mounted();
        let now = Instant::now();
        assert!(!sync.step_section(false, now));
        assert!(sync.step_section(true, now));
        assert_eq!(sync.active_id(), Some("second"));
        assert!(sync.step_section(true, now));
        assert_eq!(sync.active_id(), Some("third"));
        assert!(!sync.step_section(true, now));
    }

    #[test]
    fn empty_page_degrades_gracefully() {
        let mut sync = ScrollSync::mount(Vec::new(), NavSettings::default());
        let now = Instant::now();
        sync.record_scroll(ScrollSample::new(120.0, 600.0, 600.0));
        sync.on_frame(now);
        assert_eq!(sync.active_id(), None);
        assert_eq!(sync.progress(), 0.0);
        assert!(!sync.select("anything", now));
        assert!(sync.entries().is_empty());
    }
}
