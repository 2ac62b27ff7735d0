use crate::parallax::Transform;
use iced::widget::scrollable::RelativeOffset;

/// Geometry snapshot of the main page scrollable, refreshed on every scroll
/// event, plus the parallax transform derived from it.
pub struct ScrollState {
    pub(in crate::app) offset: RelativeOffset,
    pub(in crate::app) viewport_height: f32,
    pub(in crate::app) content_height: f32,
    pub(in crate::app) parallax: Transform,
}

impl ScrollState {
    pub(in crate::app) fn new() -> Self {
        Self {
            offset: RelativeOffset::START,
            viewport_height: 0.0,
            content_height: 0.0,
            parallax: Transform::default(),
        }
    }

    /// Absolute y offset of the viewport top within the content.
    pub(in crate::app) fn absolute_y(&self) -> f32 {
        let track = (self.content_height - self.viewport_height).max(0.0);
        self.offset.y * track
    }
}
