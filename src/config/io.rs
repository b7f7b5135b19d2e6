use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

/// Parse the sectioned `[appearance]`/`[navigation]`/... layout.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("Failed to parse config")?;
    Ok(tables.into())
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("Failed to serialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = parse_config("").expect("empty config parses");
        assert_eq!(cfg.theme, ThemeMode::Day);
        assert_eq!(cfg.activation_line_px, 300.0);
        assert_eq!(cfg.header_clearance_px, 120.0);
        assert_eq!(cfg.spring_stiffness, 100.0);
        assert_eq!(cfg.spring_damping, 30.0);
        assert_eq!(cfg.scroll_animation_ms, 450);
        assert_eq!(cfg.key_next_section, "j");
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let cfg = parse_config(
            r#"
[appearance]
theme = "night"

[navigation]
activation_line_px = 200.0

[logging]
log_level = "debug"

[keys]
safe_quit = "ctrl+q"
"#,
        )
        .expect("partial config parses");
        assert_eq!(cfg.theme, ThemeMode::Night);
        assert_eq!(cfg.activation_line_px, 200.0);
        assert_eq!(cfg.header_clearance_px, 120.0);
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.key_safe_quit, "ctrl+q");
        assert_eq!(cfg.key_prev_section, "k");
        assert_eq!(cfg.font_size, 17);
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = parse_config("[appearance]\ntheme = \"sepia\"\n").expect_err("unknown theme");
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut cfg = AppConfig::default();
        cfg.theme = ThemeMode::Night;
        cfg.header_clearance_px = 64.0;
        cfg.frame_interval_ms = 8;
        let text = serialize_config(&cfg).expect("serialize config");
        assert!(text.contains("[navigation]"));
        let parsed = parse_config(&text).expect("parse serialized config");
        assert_eq!(parsed.theme, ThemeMode::Night);
        assert_eq!(parsed.header_clearance_px, 64.0);
        assert_eq!(parsed.frame_interval_ms, 8);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "guide-nav-no-config-{}.toml",
            std::process::id()
        ));
        let cfg = load_config(&path);
        assert_eq!(cfg.activation_line_px, 300.0);
    }
}
