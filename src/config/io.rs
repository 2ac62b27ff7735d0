use super::models::AppConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load the config from `path`, falling back to defaults on any failure.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(data) => match parse_config(&data) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), "Invalid config, using defaults: {err}");
                AppConfig::default()
            }
        },
        Err(err) => {
            warn!(path = %path.display(), "No config file, using defaults: {err}");
            let config = AppConfig::default();
            write_template(path, &config);
            config
        }
    }
}

/// Drop a default config next to where one was expected, so there is a file
/// to edit. Failure here is not worth more than a log line.
fn write_template(path: &Path, config: &AppConfig) {
    let Ok(text) = serialize_config(config) else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match fs::write(path, text) {
        Ok(()) => info!(path = %path.display(), "Wrote a default config template"),
        Err(err) => warn!(path = %path.display(), "Could not write config template: {err}"),
    }
}

pub fn parse_config(data: &str) -> Result<AppConfig> {
    toml::from_str(data).context("Parsing config TOML")
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Serializing config TOML")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("").expect("empty config parses");
        assert_eq!(config.typing_speed_ms, 35);
        assert_eq!(config.gallery_images.len(), 6);
        assert!(!config.detail_lines.is_empty());
    }

    #[test]
    fn partial_tables_fill_missing_fields() {
        let config = parse_config(
            r#"
            [typing]
            speed_ms = 50

            [event]
            couple_first = "A"
            "#,
        )
        .expect("partial config parses");
        assert_eq!(config.typing_speed_ms, 50);
        assert_eq!(config.typing_pause_ms, 1200);
        assert_eq!(config.couple_first, "A");
        assert_eq!(config.event_datetime, "2025-10-16T10:00:00");
    }

    #[test]
    fn round_trips_through_toml() {
        let config = AppConfig::default();
        let text = serialize_config(&config).expect("serializes");
        let parsed = parse_config(&text).expect("reparses");
        assert_eq!(parsed.venue_address, config.venue_address);
        assert_eq!(parsed.gallery_images, config.gallery_images);
    }
}
