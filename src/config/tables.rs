use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

/// On-disk layout of `conf/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    navigation: NavigationConfig,
    #[serde(default)]
    ui: UiConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            font_size: tables.appearance.font_size,
            line_spacing: tables.appearance.line_spacing,
            window_width: tables.ui.window_width,
            window_height: tables.ui.window_height,
            sidebar_width: tables.ui.sidebar_width,
            guides_dir: tables.ui.guides_dir,
            log_level: tables.logging.log_level,
            activation_line_px: tables.navigation.activation_line_px,
            header_clearance_px: tables.navigation.header_clearance_px,
            spring_stiffness: tables.navigation.spring_stiffness,
            spring_damping: tables.navigation.spring_damping,
            spring_rest_delta: tables.navigation.spring_rest_delta,
            frame_interval_ms: tables.navigation.frame_interval_ms,
            scroll_animation_ms: tables.navigation.scroll_animation_ms,
            key_next_section: tables.keys.next_section,
            key_prev_section: tables.keys.prev_section,
            key_back_to_index: tables.keys.back_to_index,
            key_toggle_theme: tables.keys.toggle_theme,
            key_safe_quit: tables.keys.safe_quit,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
                font_size: config.font_size,
                line_spacing: config.line_spacing,
            },
            navigation: NavigationConfig {
                activation_line_px: config.activation_line_px,
                header_clearance_px: config.header_clearance_px,
                spring_stiffness: config.spring_stiffness,
                spring_damping: config.spring_damping,
                spring_rest_delta: config.spring_rest_delta,
                frame_interval_ms: config.frame_interval_ms,
                scroll_animation_ms: config.scroll_animation_ms,
            },
            ui: UiConfig {
                window_width: config.window_width,
                window_height: config.window_height,
                sidebar_width: config.sidebar_width,
                guides_dir: config.guides_dir.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            keys: KeysConfig {
                next_section: config.key_next_section.clone(),
                prev_section: config.key_prev_section.clone(),
                back_to_index: config.key_back_to_index.clone(),
                toggle_theme: config.key_toggle_theme.clone(),
                safe_quit: config.key_safe_quit.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_font_size")]
    font_size: u32,
    #[serde(default = "defaults::default_line_spacing")]
    line_spacing: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            font_size: defaults::default_font_size(),
            line_spacing: defaults::default_line_spacing(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct NavigationConfig {
    #[serde(default = "defaults::default_activation_line_px")]
    activation_line_px: f32,
    #[serde(default = "defaults::default_header_clearance_px")]
    header_clearance_px: f32,
    #[serde(default = "defaults::default_spring_stiffness")]
    spring_stiffness: f32,
    #[serde(default = "defaults::default_spring_damping")]
    spring_damping: f32,
    #[serde(default = "defaults::default_spring_rest_delta")]
    spring_rest_delta: f32,
    #[serde(default = "defaults::default_frame_interval_ms")]
    frame_interval_ms: u64,
    #[serde(default = "defaults::default_scroll_animation_ms")]
    scroll_animation_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            activation_line_px: defaults::default_activation_line_px(),
            header_clearance_px: defaults::default_header_clearance_px(),
            spring_stiffness: defaults::default_spring_stiffness(),
            spring_damping: defaults::default_spring_damping(),
            spring_rest_delta: defaults::default_spring_rest_delta(),
            frame_interval_ms: defaults::default_frame_interval_ms(),
            scroll_animation_ms: defaults::default_scroll_animation_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct UiConfig {
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
    #[serde(default = "defaults::default_sidebar_width")]
    sidebar_width: f32,
    #[serde(default = "defaults::default_guides_dir")]
    guides_dir: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            sidebar_width: defaults::default_sidebar_width(),
            guides_dir: defaults::default_guides_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_next_section")]
    next_section: String,
    #[serde(default = "defaults::default_key_prev_section")]
    prev_section: String,
    #[serde(default = "defaults::default_key_back_to_index")]
    back_to_index: String,
    #[serde(default = "defaults::default_key_toggle_theme")]
    toggle_theme: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            next_section: defaults::default_key_next_section(),
            prev_section: defaults::default_key_prev_section(),
            back_to_index: defaults::default_key_back_to_index(),
            toggle_theme: defaults::default_key_toggle_theme(),
            safe_quit: defaults::default_key_safe_quit(),
        }
    }
}
