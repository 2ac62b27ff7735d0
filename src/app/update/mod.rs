use iced::widget::scrollable::RelativeOffset;

mod core;
mod gallery;
mod runtime;
mod scroll;
mod stage;
mod ticks;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    StartMusic,
    ScrollMainTo(RelativeOffset),
    SnapGalleryTo(RelativeOffset),
    ScheduleRsvpClose { request_id: u64 },
    OpenMap,
}
