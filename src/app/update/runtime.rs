use super::super::messages::Message;
use super::super::state::{App, GALLERY_SCROLL_ID, MAIN_SCROLL_ID, RSVP_SUCCESS_CLOSE_MS};
use super::Effect;
use crate::audio::MusicPlayer;
use iced::Task;
use iced::widget::scrollable;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::StartMusic => {
                // Playback refusal is not user-visible and never retried.
                match MusicPlayer::start_looped(Path::new(&self.config.music_path)) {
                    Ok(player) => self.music = Some(player),
                    Err(err) => debug!("Background music unavailable: {err:#}"),
                }
                Task::none()
            }
            Effect::ScrollMainTo(offset) => scrollable::snap_to(MAIN_SCROLL_ID.clone(), offset),
            Effect::SnapGalleryTo(offset) => {
                scrollable::snap_to(GALLERY_SCROLL_ID.clone(), offset)
            }
            Effect::ScheduleRsvpClose { request_id } => Task::perform(
                tokio::time::sleep(Duration::from_millis(RSVP_SUCCESS_CLOSE_MS)),
                move |_| Message::RsvpCloseElapsed { request_id },
            ),
            Effect::OpenMap => {
                let url = self.map_url();
                debug!(%url, "Opening map link");
                if let Err(err) = open::that_detached(&url) {
                    warn!("Failed to open map link: {err}");
                }
                Task::none()
            }
        }
    }
}
