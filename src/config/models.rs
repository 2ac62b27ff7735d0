use serde::{Deserialize, Serialize};

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(from = "super::tables::ConfigTables")]
#[serde(into = "super::tables::ConfigTables")]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub window_width: f32,
    pub window_height: f32,
    pub window_pos_x: Option<f32>,
    pub window_pos_y: Option<f32>,
    pub log_level: LogLevel,

    /// The two names shown in the hero section.
    pub couple_first: String,
    pub couple_second: String,
    /// Local wall-clock instant the countdown targets, `YYYY-MM-DDTHH:MM:SS`.
    pub event_datetime: String,
    pub venue_name: String,
    pub venue_address: String,
    /// Lines cycled by the typing effect in the details section.
    pub detail_lines: Vec<String>,
    /// Short guest guidelines listed in the notes section.
    pub guidelines: Vec<String>,

    pub letter_image: String,
    pub hero_image: String,
    pub details_image: String,
    pub notes_image: String,
    pub final_image: String,
    pub gallery_images: Vec<String>,
    pub music_path: String,

    /// Milliseconds per revealed character.
    pub typing_speed_ms: u64,
    /// Milliseconds a completed line is held before advancing.
    pub typing_pause_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        super::tables::ConfigTables::default().into()
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Day
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
