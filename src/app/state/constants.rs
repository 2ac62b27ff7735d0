use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Limits and fixed tuning for the card's animations and layout.
pub(crate) const PETAL_COUNT: usize = 22;
pub(crate) const PETAL_MIN_DURATION_SECS: f32 = 8.0;
pub(crate) const PETAL_MAX_DURATION_SECS: f32 = 16.0;
pub(crate) const PETAL_MAX_DELAY_SECS: f32 = 6.0;
pub(crate) const PETAL_MIN_OPACITY: f32 = 0.6;

pub(crate) const HEART_COUNT: usize = 8;
pub(crate) const HEART_STAGGER_MS: u64 = 50;
pub(crate) const HEART_BURST_MS: u64 = 1_200;

/// How long the RSVP success acknowledgment stays up before the modal closes.
pub(crate) const RSVP_SUCCESS_CLOSE_MS: u64 = 1_400;

/// Redraw cadence for the ambient layers (~30 fps).
pub(crate) const DECOR_FRAME_MS: u64 = 33;

/// One breath of the fireworks ornament in the final section.
pub(crate) const FIREWORK_CYCLE_MS: u64 = 3_000;

pub(crate) const MIN_TYPING_SPEED_MS: u64 = 1;
pub(crate) const MAX_TYPING_SPEED_MS: u64 = 1_000;
pub(crate) const MIN_TYPING_PAUSE_MS: u64 = 100;
pub(crate) const MAX_TYPING_PAUSE_MS: u64 = 10_000;

/// Where the details ornament sits within the page content, as a fraction of
/// total content height. Stands in for a live bounding-rect query.
pub(crate) const DETAILS_ANCHOR_FRACTION: f32 = 0.24;

/// Width of one gallery panel; the gallery strip viewport matches it so one
/// panel is centered at a time.
pub(crate) const GALLERY_PANEL_WIDTH: f32 = 720.0;
pub(crate) const GALLERY_PANEL_HEIGHT: f32 = 480.0;

pub(crate) static MAIN_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("main-scroll"));
pub(crate) static GALLERY_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("gallery-scroll"));
