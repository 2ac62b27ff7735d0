use super::super::state::App;
use chrono::Local;
use std::time::Instant;

impl App {
    pub(super) fn handle_countdown_tick(&mut self) {
        self.countdown.resample(Local::now());
    }

    pub(super) fn handle_typing_tick(&mut self) {
        self.typing.advance();
    }

    pub(super) fn handle_decor_tick(&mut self, now: Instant) {
        self.decor.advance_to(now);
        self.animation_now = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::time::Duration;

    fn build_test_app(lines: &[&str]) -> App {
        let mut config = AppConfig::default();
        config.detail_lines = lines.iter().map(|s| s.to_string()).collect();
        config.typing_speed_ms = 10;
        config.typing_pause_ms = 100;
        let (app, _task) = App::bootstrap(config);
        app
    }

    #[test]
    fn typing_ticks_reproduce_the_reveal_sequence() {
        let mut app = build_test_app(&["A", "BB"]);
        let mut seen = vec![app.typing.displayed().to_string()];
        for _ in 0..6 {
            app.handle_typing_tick();
            seen.push(app.typing.displayed().to_string());
        }
        assert_eq!(seen, vec!["", "A", "", "B", "BB", "", "A"]);
    }

    #[test]
    fn decor_tick_moves_the_shared_clock() {
        let mut app = build_test_app(&["A"]);
        let later = app.animation_now + Duration::from_millis(99);
        app.handle_decor_tick(later);
        assert_eq!(app.animation_now, later);
        assert!(app.decor.elapsed >= Duration::from_millis(99));
    }

    #[test]
    fn countdown_tick_keeps_the_display_clamped() {
        let mut app = build_test_app(&["A"]);
        // Whatever the wall clock says, a resample never goes negative.
        app.handle_countdown_tick();
        let parts = app.countdown.parts();
        let _ = (parts.days, parts.hours, parts.minutes, parts.seconds);
    }
}
