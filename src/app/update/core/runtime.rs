use super::super::super::messages::Message;
use super::super::super::state::{App, CONTENT_SCROLL_ID};
use super::super::Effect;
use super::measure::SectionBounds;
use iced::Event;
use iced::Task;
use iced::advanced::widget::operate;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, AbsoluteOffset, RelativeOffset};
use iced::window;
use tracing::{debug, info};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollTo(y) => {
                scrollable::scroll_to(CONTENT_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y })
            }
            Effect::ResetScroll => {
                scrollable::snap_to(CONTENT_SCROLL_ID.clone(), RelativeOffset::START)
            }
            Effect::MeasureSections => {
                let Some(page) = self.page.as_ref() else {
                    return Task::none();
                };
                let guide_idx = page.guide_idx;
                debug!(guide_idx, "Reading back section bounds");
                operate(SectionBounds::new(page.guide.sections.len()))
                    .map(move |layout| Message::SectionsMeasured { guide_idx, layout })
            }
            Effect::MeasureWindow => window::get_latest()
                .and_then(window::get_size)
                .map(|size| Message::WindowResized {
                    width: size.width,
                    height: size.height,
                }),
            Effect::QuitSafely => {
                if let Some(page) = self.page.take() {
                    info!(guide = %page.guide.title, "Closing guide before exit");
                }
                iced::exit()
            }
        }
    }
}

/// Keyboard shortcuts apply on every screen.
pub(super) fn keyboard_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}

/// Only subscribed while a page is mounted; resizes re-measure its sections.
pub(super) fn resize_event_to_message(
    event: Event,
    _status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        _ => None,
    }
}
