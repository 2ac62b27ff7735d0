mod constants;
mod countdown;
mod decor;
mod gallery;
mod scroll;
mod stage;
mod typing;

use crate::audio::MusicPlayer;
use crate::config::AppConfig;
use chrono::Local;
use iced::Task;
use std::time::{Duration, Instant};
use tracing::warn;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use countdown::CountdownState;
pub(in crate::app) use decor::{DecorField, firework_pose};
pub(in crate::app) use gallery::GalleryState;
pub(in crate::app) use scroll::ScrollState;
pub(in crate::app) use stage::{HeartSeed, LetterStage, RsvpStage, RsvpState};
pub(in crate::app) use typing::TypingState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) letter: LetterStage,
    pub(super) rsvp: RsvpState,
    pub(super) countdown: CountdownState,
    pub(super) typing: TypingState,
    pub(super) decor: DecorField,
    pub(super) gallery: GalleryState,
    pub(super) scroll: ScrollState,
    pub(super) music: Option<MusicPlayer>,
    /// Shared animation clock sampled by the frame tick; the canvas layers
    /// read it instead of calling `Instant::now` during draw.
    pub(super) animation_now: Instant,
}

impl App {
    pub(super) fn bootstrap(mut config: AppConfig) -> (App, Task<Message>) {
        clamp_config(&mut config);

        let now = Local::now();
        let target = CountdownState::parse_target(&config.event_datetime).unwrap_or_else(|| {
            warn!(
                datetime = %config.event_datetime,
                "Unparseable event datetime, countdown starts finished"
            );
            now
        });

        let mut rng = rand::thread_rng();
        let started = Instant::now();
        let app = App {
            countdown: CountdownState::new(target, now),
            typing: TypingState::new(
                config.detail_lines.clone(),
                Duration::from_millis(config.typing_speed_ms),
                Duration::from_millis(config.typing_pause_ms),
            ),
            decor: DecorField::scatter_default(&mut rng, started),
            gallery: GalleryState::new(config.gallery_images.clone()),
            scroll: ScrollState::new(),
            letter: LetterStage::Sealed,
            rsvp: RsvpState::new(),
            music: None,
            animation_now: started,
            config,
        };

        tracing::info!(
            photos = app.gallery.len(),
            detail_lines = app.config.detail_lines.len(),
            countdown_finished = app.countdown.is_finished(),
            "Initialized invitation card"
        );

        (app, Task::none())
    }

    /// Outbound map-search URL for the configured venue.
    pub(super) fn map_url(&self) -> String {
        let query = format!("{}, {}", self.config.venue_name, self.config.venue_address);
        format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            urlencoding::encode(&query)
        )
    }
}

pub(super) fn clamp_config(config: &mut AppConfig) {
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    config.window_pos_x = config.window_pos_x.filter(|v| v.is_finite());
    config.window_pos_y = config.window_pos_y.filter(|v| v.is_finite());
    config.typing_speed_ms = config
        .typing_speed_ms
        .clamp(MIN_TYPING_SPEED_MS, MAX_TYPING_SPEED_MS);
    config.typing_pause_ms = config
        .typing_pause_ms
        .clamp(MIN_TYPING_PAUSE_MS, MAX_TYPING_PAUSE_MS);
    if config.detail_lines.is_empty() {
        config.detail_lines = vec![config.venue_name.clone()];
    }
    if config.gallery_images.is_empty() {
        config.gallery_images = vec![config.hero_image.clone()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamping_restores_usable_values() {
        let mut config = AppConfig::default();
        config.window_width = 10.0;
        config.typing_speed_ms = 0;
        config.typing_pause_ms = 1;
        config.window_pos_x = Some(f32::NAN);
        config.detail_lines.clear();
        config.gallery_images.clear();

        clamp_config(&mut config);

        assert_eq!(config.window_width, 320.0);
        assert_eq!(config.typing_speed_ms, MIN_TYPING_SPEED_MS);
        assert_eq!(config.typing_pause_ms, MIN_TYPING_PAUSE_MS);
        assert_eq!(config.window_pos_x, None);
        assert_eq!(config.detail_lines.len(), 1);
        assert_eq!(config.gallery_images.len(), 1);
    }

    #[test]
    fn bootstrap_starts_sealed_with_closed_rsvp() {
        let (app, _task) = App::bootstrap(AppConfig::default());
        assert!(!app.letter.is_opened());
        assert!(!app.rsvp.is_open());
        assert!(app.music.is_none());
        assert_eq!(app.decor.petals().len(), PETAL_COUNT);
    }

    #[test]
    fn map_url_encodes_the_venue() {
        let (app, _task) = App::bootstrap(AppConfig::default());
        let url = app.map_url();
        assert!(url.starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert!(!url.contains(' '));
    }
}
