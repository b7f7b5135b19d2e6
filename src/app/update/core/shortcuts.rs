use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

/// A `[keys]` binding such as `ctrl+t` or `shift+down`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct KeyChord {
    key: String,
    modifiers: Modifiers,
}

impl KeyChord {
    /// Parse `raw`, falling back to `fallback` when it is blank or names no key.
    fn parse(raw: &str, fallback: &str) -> Self {
        let mut modifiers = Modifiers::empty();
        let mut key = None;
        for token in raw.split('+').map(str::trim).filter(|token| !token.is_empty()) {
            match token.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= Modifiers::CTRL,
                "alt" => modifiers |= Modifiers::ALT,
                "logo" | "meta" | "super" | "cmd" | "command" => modifiers |= Modifiers::LOGO,
                "shift" => modifiers |= Modifiers::SHIFT,
                other => key = Some(canonical_key_name(other)),
            }
        }
        match key {
            Some(key) => KeyChord { key, modifiers },
            None if raw.trim().is_empty() => KeyChord::parse(fallback, fallback),
            None => KeyChord {
                key: canonical_key_name(fallback),
                modifiers,
            },
        }
    }

    fn matches(&self, pressed: &str, modifiers: Modifiers) -> bool {
        self.key == pressed
            && modifiers.control() == self.modifiers.control()
            && modifiers.alt() == self.modifiers.alt()
            && modifiers.logo() == self.modifiers.logo()
            && modifiers.shift() == self.modifiers.shift()
    }
}

fn canonical_key_name(name: &str) -> String {
    match name {
        "spacebar" => "space",
        "esc" => "escape",
        "arrowdown" => "down",
        "arrowup" => "up",
        other => other,
    }
    .to_string()
}

fn pressed_key_name(key: Key) -> Option<String> {
    match key.as_ref() {
        Key::Named(key::Named::Space) => Some("space".to_string()),
        Key::Named(key::Named::Escape) => Some("escape".to_string()),
        Key::Named(key::Named::ArrowDown) => Some("down".to_string()),
        Key::Named(key::Named::ArrowUp) => Some("up".to_string()),
        Key::Character(ch) => Some(ch.to_ascii_lowercase()),
        _ => None,
    }
}

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = pressed_key_name(key)?;
        let bound =
            |raw: &str, fallback: &str| KeyChord::parse(raw, fallback).matches(&pressed, modifiers);

        if bound(&self.config.key_safe_quit, "q") {
            return Some(Message::SafeQuit);
        }
        if bound(&self.config.key_toggle_theme, "ctrl+t") {
            return Some(Message::ToggleTheme);
        }

        // Remaining shortcuts only mean something on a mounted page.
        self.page.as_ref()?;
        if bound(&self.config.key_next_section, "j") {
            Some(Message::NextSection)
        } else if bound(&self.config.key_prev_section, "k") {
            Some(Message::PreviousSection)
        } else if bound(&self.config.key_back_to_index, "escape") {
            Some(Message::CloseGuide)
        } else {
            None
        }
    }
}
