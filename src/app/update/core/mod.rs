mod measure;
mod reducer;
mod runtime;
mod shortcuts;

use super::super::messages::Message;
use super::super::state::App;
use iced::event;
use iced::time;
use iced::{Subscription, Task};

impl App {
    /// Resize and frame subscriptions live only while a page is mounted; the
    /// frame ticker additionally stops once the page has nothing to animate.
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> =
            vec![event::listen_with(runtime::keyboard_event_to_message)];

        if let Some(page) = app.page.as_ref() {
            subscriptions.push(event::listen_with(runtime::resize_event_to_message));
            if page.sync.needs_frames() {
                subscriptions.push(time::every(app.frame_interval()).map(Message::Frame));
            }
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
