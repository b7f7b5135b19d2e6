use crate::layout::PageLayout;
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    OpenGuide(usize),
    CloseGuide,
    SectionSelected(String),
    NextSection,
    PreviousSection,
    FaqToggled {
        section: usize,
        item: usize,
    },
    Scrolled {
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        content_height: f32,
    },
    /// Section bounds read back from the laid-out page; `None` when the
    /// containers were not found.
    SectionsMeasured {
        guide_idx: usize,
        layout: Option<PageLayout>,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Frame(Instant),
    ToggleTheme,
    FontSizeChanged(u32),
    SafeQuit,
}
