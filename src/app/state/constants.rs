use iced::widget::container::Id as ContainerId;
use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Limits for reader controls.
pub(crate) const MIN_FONT_SIZE: u32 = 12;
pub(crate) const MAX_FONT_SIZE: u32 = 32;
pub(crate) const MIN_SIDEBAR_WIDTH: f32 = 160.0;
pub(crate) const MAX_SIDEBAR_WIDTH: f32 = 480.0;
pub(crate) const MIN_FRAME_INTERVAL_MS: u64 = 4;
pub(crate) const MAX_FRAME_INTERVAL_MS: u64 = 100;
pub(crate) const MAX_SCROLL_ANIMATION_MS: u64 = 5_000;

/// Keep in sync with the page layout in `view.rs`.
pub(crate) const PAGE_PADDING_PX: f32 = 16.0;
pub(crate) const PAGE_SPACING_PX: f32 = 12.0;
pub(crate) const SIDEBAR_GAP_PX: f32 = 16.0;
pub(crate) const PROGRESS_BAR_HEIGHT_PX: f32 = 4.0;

pub(crate) static CONTENT_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("guide-content"));

/// Container holding the page title; its top sits one content padding below
/// the top of the scrollable content.
pub(crate) static TITLE_CONTAINER_ID: Lazy<ContainerId> =
    Lazy::new(|| ContainerId::new("guide-title"));

pub(crate) fn section_container_id(idx: usize) -> ContainerId {
    ContainerId::new(format!("guide-section-{idx}"))
}
