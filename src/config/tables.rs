use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::{Deserialize, Serialize};

/// On-disk layout: the flat `AppConfig` is grouped into TOML tables.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    event: EventConfig,
    #[serde(default)]
    content: ContentConfig,
    #[serde(default)]
    media: MediaConfig,
    #[serde(default)]
    typing: TypingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            window_width: tables.window.width,
            window_height: tables.window.height,
            window_pos_x: tables.window.pos_x,
            window_pos_y: tables.window.pos_y,
            log_level: tables.logging.log_level,
            couple_first: tables.event.couple_first,
            couple_second: tables.event.couple_second,
            event_datetime: tables.event.datetime,
            venue_name: tables.event.venue_name,
            venue_address: tables.event.venue_address,
            detail_lines: tables.content.detail_lines,
            guidelines: tables.content.guidelines,
            letter_image: tables.media.letter_image,
            hero_image: tables.media.hero_image,
            details_image: tables.media.details_image,
            notes_image: tables.media.notes_image,
            final_image: tables.media.final_image,
            gallery_images: tables.media.gallery_images,
            music_path: tables.media.music_path,
            typing_speed_ms: tables.typing.speed_ms,
            typing_pause_ms: tables.typing.pause_ms,
        }
    }
}

impl From<AppConfig> for ConfigTables {
    fn from(config: AppConfig) -> Self {
        ConfigTables {
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
                pos_x: config.window_pos_x,
                pos_y: config.window_pos_y,
            },
            appearance: AppearanceConfig {
                theme: config.theme,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            event: EventConfig {
                couple_first: config.couple_first,
                couple_second: config.couple_second,
                datetime: config.event_datetime,
                venue_name: config.venue_name,
                venue_address: config.venue_address,
            },
            content: ContentConfig {
                detail_lines: config.detail_lines,
                guidelines: config.guidelines,
            },
            media: MediaConfig {
                letter_image: config.letter_image,
                hero_image: config.hero_image,
                details_image: config.details_image,
                notes_image: config.notes_image,
                final_image: config.final_image,
                gallery_images: config.gallery_images,
                music_path: config.music_path,
            },
            typing: TypingConfig {
                speed_ms: config.typing_speed_ms,
                pause_ms: config.typing_pause_ms,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
    #[serde(default)]
    pos_x: Option<f32>,
    #[serde(default)]
    pos_y: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
            pos_x: None,
            pos_y: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
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

#[derive(Debug, Clone, Deserialize, Serialize)]
struct EventConfig {
    #[serde(default = "defaults::default_couple_first")]
    couple_first: String,
    #[serde(default = "defaults::default_couple_second")]
    couple_second: String,
    #[serde(default = "defaults::default_event_datetime")]
    datetime: String,
    #[serde(default = "defaults::default_venue_name")]
    venue_name: String,
    #[serde(default = "defaults::default_venue_address")]
    venue_address: String,
}

impl Default for EventConfig {
    fn default() -> Self {
        EventConfig {
            couple_first: defaults::default_couple_first(),
            couple_second: defaults::default_couple_second(),
            datetime: defaults::default_event_datetime(),
            venue_name: defaults::default_venue_name(),
            venue_address: defaults::default_venue_address(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct ContentConfig {
    #[serde(default = "defaults::default_detail_lines")]
    detail_lines: Vec<String>,
    #[serde(default = "defaults::default_guidelines")]
    guidelines: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            detail_lines: defaults::default_detail_lines(),
            guidelines: defaults::default_guidelines(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct MediaConfig {
    #[serde(default = "defaults::default_letter_image")]
    letter_image: String,
    #[serde(default = "defaults::default_hero_image")]
    hero_image: String,
    #[serde(default = "defaults::default_details_image")]
    details_image: String,
    #[serde(default = "defaults::default_notes_image")]
    notes_image: String,
    #[serde(default = "defaults::default_final_image")]
    final_image: String,
    #[serde(default = "defaults::default_gallery_images")]
    gallery_images: Vec<String>,
    #[serde(default = "defaults::default_music_path")]
    music_path: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        MediaConfig {
            letter_image: defaults::default_letter_image(),
            hero_image: defaults::default_hero_image(),
            details_image: defaults::default_details_image(),
            notes_image: defaults::default_notes_image(),
            final_image: defaults::default_final_image(),
            gallery_images: defaults::default_gallery_images(),
            music_path: defaults::default_music_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct TypingConfig {
    #[serde(default = "defaults::default_typing_speed_ms")]
    speed_ms: u64,
    #[serde(default = "defaults::default_typing_pause_ms")]
    pause_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        TypingConfig {
            speed_ms: defaults::default_typing_speed_ms(),
            pause_ms: defaults::default_typing_pause_ms(),
        }
    }
}
