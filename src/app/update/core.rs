use super::super::messages::Message;
use super::super::state::{App, DECOR_FRAME_MS};
use super::Effect;
use iced::time;
use iced::{Subscription, Task};
use std::time::Duration;

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> = vec![
            // The ambient petal layer runs for the whole session.
            time::every(Duration::from_millis(DECOR_FRAME_MS)).map(Message::DecorTick),
        ];

        if !app.countdown.is_finished() {
            subscriptions.push(time::every(Duration::from_secs(1)).map(Message::CountdownTick));
        }

        // The details panel only exists once the letter is opened; the tick
        // interval follows the machine's phase (type speed vs. hold pause).
        if app.letter.is_opened() {
            subscriptions.push(time::every(app.typing.tick_interval()).map(Message::TypingTick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }

    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::OpenLetter => self.handle_open_letter(&mut effects),
            Message::OpenRsvp => self.handle_open_rsvp(),
            Message::CancelRsvp => self.handle_cancel_rsvp(),
            Message::RsvpNameChanged(name) => self.handle_rsvp_name_changed(name),
            Message::RsvpPartySizeChanged(size) => self.handle_rsvp_party_size_changed(size),
            Message::SubmitRsvp => self.handle_submit_rsvp(&mut effects),
            Message::RsvpCloseElapsed { request_id } => {
                self.handle_rsvp_close_elapsed(request_id)
            }
            Message::GalleryPrev => self.handle_gallery_prev(&mut effects),
            Message::GalleryNext => self.handle_gallery_next(&mut effects),
            Message::GalleryGoTo(idx) => self.handle_gallery_go_to(idx, &mut effects),
            Message::GalleryScrolled {
                offset_x,
                viewport_width,
            } => self.handle_gallery_scrolled(offset_x, viewport_width),
            Message::Scrolled {
                offset,
                viewport_height,
                content_height,
            } => self.handle_scrolled(offset, viewport_height, content_height),
            Message::ScrollToDetails => self.handle_scroll_to_details(&mut effects),
            Message::BackToTop => self.handle_back_to_top(&mut effects),
            Message::OpenMap => effects.push(Effect::OpenMap),
            Message::ToggleMusic => self.handle_toggle_music(),
            Message::CountdownTick(_) => self.handle_countdown_tick(),
            Message::TypingTick(_) => self.handle_typing_tick(),
            Message::DecorTick(now) => self.handle_decor_tick(now),
        }

        effects
    }
}
