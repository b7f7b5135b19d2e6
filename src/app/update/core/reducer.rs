use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use tracing::debug;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::OpenGuide(idx) => self.handle_open_guide(idx, &mut effects),
            Message::CloseGuide => self.handle_close_guide(),
            Message::SectionSelected(id) => self.handle_section_selected(&id),
            Message::NextSection => self.handle_step_section(true),
            Message::PreviousSection => self.handle_step_section(false),
            Message::FaqToggled { section, item } => self.handle_faq_toggled(section, item),
            Message::Scrolled {
                offset_y,
                viewport_width,
                viewport_height,
                content_height,
            } => self.handle_scrolled(offset_y, viewport_width, viewport_height, content_height),
            Message::SectionsMeasured { guide_idx, layout } => {
                self.handle_sections_measured(guide_idx, layout)
            }
            Message::WindowResized { width, height } => self.handle_window_resized(width, height),
            Message::KeyPressed { key, modifiers } => {
                if let Some(mapped) = self.shortcut_message_for_key(key, modifiers) {
                    debug!(?mapped, "Keyboard shortcut");
                    effects.extend(self.reduce(mapped));
                }
            }
            Message::Frame(now) => self.handle_frame(now, &mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::FontSizeChanged(size) => self.handle_font_size_changed(size),
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        if self
            .page
            .as_mut()
            .is_some_and(|page| page.take_measure_request())
        {
            effects.push(Effect::MeasureSections);
        }
        effects
    }
}
