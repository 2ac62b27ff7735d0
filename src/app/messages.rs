use iced::widget::scrollable::RelativeOffset;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    OpenLetter,
    OpenRsvp,
    CancelRsvp,
    RsvpNameChanged(String),
    RsvpPartySizeChanged(String),
    SubmitRsvp,
    /// Fired by the scheduled auto-close; ignored when the generation is
    /// stale.
    RsvpCloseElapsed {
        request_id: u64,
    },
    GalleryPrev,
    GalleryNext,
    GalleryGoTo(usize),
    GalleryScrolled {
        offset_x: f32,
        viewport_width: f32,
    },
    Scrolled {
        offset: RelativeOffset,
        viewport_height: f32,
        content_height: f32,
    },
    ScrollToDetails,
    BackToTop,
    OpenMap,
    ToggleMusic,
    CountdownTick(Instant),
    TypingTick(Instant),
    DecorTick(Instant),
}
