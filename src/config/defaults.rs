pub(crate) fn default_font_size() -> u32 {
    17
}

pub(crate) fn default_line_spacing() -> f32 {
    1.4
}

pub(crate) fn default_window_width() -> f32 {
    1200.0
}

pub(crate) fn default_window_height() -> f32 {
    820.0
}

pub(crate) fn default_sidebar_width() -> f32 {
    240.0
}

pub(crate) fn default_guides_dir() -> String {
    "guides".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_activation_line_px() -> f32 {
    300.0
}

pub(crate) fn default_header_clearance_px() -> f32 {
    120.0
}

pub(crate) fn default_spring_stiffness() -> f32 {
    100.0
}

pub(crate) fn default_spring_damping() -> f32 {
    30.0
}

pub(crate) fn default_spring_rest_delta() -> f32 {
    0.001
}

pub(crate) fn default_frame_interval_ms() -> u64 {
    16
}

pub(crate) fn default_scroll_animation_ms() -> u64 {
    450
}

pub(crate) fn default_key_next_section() -> String {
    "j".to_string()
}

pub(crate) fn default_key_prev_section() -> String {
    "k".to_string()
}

pub(crate) fn default_key_back_to_index() -> String {
    "escape".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "ctrl+t".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
