use super::super::state::{App, LetterStage};
use super::Effect;
use std::time::Instant;
use tracing::info;

impl App {
    /// One-way transition out of the sealed letter; the click that opens
    /// the card is also the gesture that starts the music, exactly once.
    pub(super) fn handle_open_letter(&mut self, effects: &mut Vec<Effect>) {
        if self.letter.is_opened() {
            return;
        }
        self.letter = LetterStage::Opened;
        info!("Letter opened");
        effects.push(Effect::StartMusic);
    }

    pub(super) fn handle_open_rsvp(&mut self) {
        self.rsvp.open();
    }

    pub(super) fn handle_cancel_rsvp(&mut self) {
        self.rsvp.cancel();
    }

    pub(super) fn handle_rsvp_name_changed(&mut self, name: String) {
        if self.rsvp.is_open() {
            self.rsvp.guest_name = name;
        }
    }

    pub(super) fn handle_rsvp_party_size_changed(&mut self, size: String) {
        if self.rsvp.is_open() {
            self.rsvp.party_size = size;
        }
    }

    pub(super) fn handle_submit_rsvp(&mut self, effects: &mut Vec<Effect>) {
        let mut rng = rand::thread_rng();
        if let Some(request_id) = self.rsvp.submit(&mut rng, Instant::now()) {
            info!(party_size = %self.rsvp.party_size, "RSVP acknowledged");
            effects.push(Effect::ScheduleRsvpClose { request_id });
        }
    }

    pub(super) fn handle_rsvp_close_elapsed(&mut self, request_id: u64) {
        if self.rsvp.close_if_current(request_id) {
            info!("RSVP modal auto-closed");
        }
    }

    pub(super) fn handle_toggle_music(&mut self) {
        if let Some(music) = &self.music {
            music.set_paused(!music.is_paused());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default());
        app
    }

    fn submit_valid(app: &mut App) -> u64 {
        app.handle_open_rsvp();
        app.handle_rsvp_name_changed("Linh".to_string());
        app.handle_rsvp_party_size_changed("3".to_string());
        let mut effects = Vec::new();
        app.handle_submit_rsvp(&mut effects);
        match effects.as_slice() {
            [Effect::ScheduleRsvpClose { request_id }] => *request_id,
            _ => panic!("expected exactly one scheduled close"),
        }
    }

    #[test]
    fn opening_the_letter_starts_music_once() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_open_letter(&mut effects);
        assert!(app.letter.is_opened());
        assert!(matches!(effects.as_slice(), [Effect::StartMusic]));

        // A second click does not restart playback.
        effects.clear();
        app.handle_open_letter(&mut effects);
        assert!(effects.is_empty());
    }

    #[test]
    fn submit_flips_success_synchronously() {
        let mut app = build_test_app();
        submit_valid(&mut app);
        assert!(app.rsvp.is_success());
    }

    #[test]
    fn invalid_form_schedules_nothing() {
        let mut app = build_test_app();
        app.handle_open_rsvp();
        app.handle_rsvp_name_changed("Linh".to_string());
        app.handle_rsvp_party_size_changed("zero".to_string());
        let mut effects = Vec::new();
        app.handle_submit_rsvp(&mut effects);
        assert!(effects.is_empty());
        assert!(app.rsvp.is_open());
    }

    #[test]
    fn matching_close_returns_to_closed_with_no_trace() {
        let mut app = build_test_app();
        let id = submit_valid(&mut app);
        app.handle_rsvp_close_elapsed(id);
        assert!(!app.rsvp.is_open());
        assert!(!app.rsvp.is_success());
        assert!(app.rsvp.guest_name.is_empty());
    }

    #[test]
    fn stale_close_leaves_the_new_success_alone() {
        let mut app = build_test_app();
        let first = submit_valid(&mut app);
        // Cancel never fires from success; reopen via the auto-close, then
        // submit again to supersede the first generation.
        app.handle_rsvp_close_elapsed(first);
        let second = submit_valid(&mut app);
        assert_ne!(first, second);

        app.handle_rsvp_close_elapsed(first);
        assert!(app.rsvp.is_success(), "stale generation must be ignored");
        app.handle_rsvp_close_elapsed(second);
        assert!(!app.rsvp.is_success());
    }

    #[test]
    fn field_edits_are_ignored_outside_the_open_modal() {
        let mut app = build_test_app();
        app.handle_rsvp_name_changed("Linh".to_string());
        assert!(app.rsvp.guest_name.is_empty());
    }
}
