mod constants;
mod page;
mod viewport;

use crate::config::AppConfig;
use crate::guide_loader::GuidePage;
use crate::layout::{CONTENT_PADDING_PX, LayoutMetrics};
use crate::nav::{NavSettings, SpringParams};
use iced::Task;
use std::time::Duration;
use tracing::info;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use page::PageSession;
pub(in crate::app) use viewport::WindowState;

/// Core application state: the guide library plus at most one mounted page.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) library: Vec<GuidePage>,
    pub(super) page: Option<PageSession>,
    pub(super) window: WindowState,
}

impl App {
    pub fn bootstrap(library: Vec<GuidePage>, config: AppConfig) -> (App, Task<Message>) {
        let config = clamp_config(config);
        info!(
            guides = library.len(),
            font_size = config.font_size,
            theme = %config.theme,
            "Guide reader ready"
        );
        let app = App {
            window: WindowState::new(config.window_width, config.window_height),
            config,
            library,
            page: None,
        };
        (app, Task::none())
    }

    /// Start with `guide_idx` already mounted.
    #[cfg(test)]
    pub(super) fn bootstrap_page(
        library: Vec<GuidePage>,
        config: AppConfig,
        guide_idx: usize,
    ) -> App {
        let (mut app, _task) = App::bootstrap(library, config);
        app.mount_guide(guide_idx);
        app
    }

    /// Mount a guide, replacing any page that was open. Returns `false` for an
    /// index outside the library.
    pub(super) fn mount_guide(&mut self, guide_idx: usize) -> bool {
        let Some(guide) = self.library.get(guide_idx).cloned() else {
            return false;
        };
        let origin = guide
            .source
            .as_ref()
            .map_or_else(|| "bundled".to_string(), |path| path.display().to_string());
        info!(
            guide = %guide.title,
            sections = guide.sections.len(),
            source = %origin,
            "Opening guide"
        );
        self.page = Some(PageSession::mount(
            guide_idx,
            guide,
            nav_settings(&self.config),
            self.layout_metrics(),
        ));
        true
    }

    pub(super) fn relayout_page(&mut self) {
        let metrics = self.layout_metrics();
        if let Some(page) = self.page.as_mut() {
            page.relayout(metrics);
        }
    }

    pub(super) fn layout_metrics(&self) -> LayoutMetrics {
        let viewport_width = self
            .page
            .as_ref()
            .and_then(|page| page.measured_width)
            .unwrap_or_else(|| self.estimated_content_width());
        LayoutMetrics {
            viewport_width,
            font_size: self.config.font_size as f32,
            line_spacing: self.config.line_spacing,
        }
    }

    /// Content column width derived from the window size, used until the
    /// scroll surface reports its real bounds.
    pub(super) fn estimated_content_width(&self) -> f32 {
        (self.window.width - 2.0 * PAGE_PADDING_PX - self.config.sidebar_width - SIDEBAR_GAP_PX)
            .max(2.0 * CONTENT_PADDING_PX)
    }

    pub(super) fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.config.frame_interval_ms)
    }
}

/// Navigation tuning taken from the user's config.
pub(crate) fn nav_settings(config: &AppConfig) -> NavSettings {
    let defaults = NavSettings::default();
    let non_negative = |value: f32, fallback: f32| {
        if value.is_finite() {
            value.max(0.0)
        } else {
            fallback
        }
    };
    NavSettings {
        activation_line: non_negative(config.activation_line_px, defaults.activation_line),
        header_clearance: non_negative(config.header_clearance_px, defaults.header_clearance),
        spring: SpringParams {
            stiffness: config.spring_stiffness,
            damping: config.spring_damping,
            rest_delta: config.spring_rest_delta,
            ..SpringParams::default()
        },
        scroll_duration: Duration::from_millis(
            config.scroll_animation_ms.min(MAX_SCROLL_ANIMATION_MS),
        ),
    }
}

fn clamp_config(mut config: AppConfig) -> AppConfig {
    config.font_size = config.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    if !config.line_spacing.is_finite() || config.line_spacing <= 0.0 {
        config.line_spacing = AppConfig::default().line_spacing;
    }
    config.line_spacing = config.line_spacing.clamp(0.8, 3.0);
    config.sidebar_width = if config.sidebar_width.is_finite() {
        config.sidebar_width.clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH)
    } else {
        AppConfig::default().sidebar_width
    };
    config.frame_interval_ms = config
        .frame_interval_ms
        .clamp(MIN_FRAME_INTERVAL_MS, MAX_FRAME_INTERVAL_MS);
    config
}
