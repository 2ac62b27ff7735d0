use super::super::state::{App, DETAILS_ANCHOR_FRACTION};
use super::Effect;
use crate::parallax::{Transform, compute_transform};
use iced::widget::scrollable::RelativeOffset;

impl App {
    pub(super) fn handle_scrolled(
        &mut self,
        offset: RelativeOffset,
        viewport_height: f32,
        content_height: f32,
    ) {
        self.scroll.offset = Self::sanitize_offset(offset);
        self.scroll.viewport_height = if viewport_height.is_finite() {
            viewport_height.max(0.0)
        } else {
            0.0
        };
        self.scroll.content_height = if content_height.is_finite() {
            content_height.max(0.0)
        } else {
            0.0
        };
        self.scroll.parallax = self.details_transform();
    }

    pub(super) fn handle_scroll_to_details(&mut self, effects: &mut Vec<Effect>) {
        effects.push(Effect::ScrollMainTo(RelativeOffset {
            x: 0.0,
            y: self.details_relative_offset(),
        }));
    }

    pub(super) fn handle_back_to_top(&mut self, effects: &mut Vec<Effect>) {
        effects.push(Effect::ScrollMainTo(RelativeOffset::START));
    }

    /// Tilt of the details ornament for the current scroll position. The
    /// ornament's place in the content is estimated from a fixed fraction
    /// of the content height; its distance to the viewport center drives
    /// the transform.
    fn details_transform(&self) -> Transform {
        if self.scroll.viewport_height <= 0.0 || self.scroll.content_height <= 0.0 {
            return Transform::default();
        }
        let anchor_y = DETAILS_ANCHOR_FRACTION * self.scroll.content_height;
        let element_top = anchor_y - self.scroll.absolute_y();
        compute_transform(element_top, self.scroll.viewport_height)
    }

    /// Relative y offset that brings the details section to the top of the
    /// viewport; a fixed guess is used until geometry is known.
    fn details_relative_offset(&self) -> f32 {
        let track = self.scroll.content_height - self.scroll.viewport_height;
        if track <= 0.0 {
            return 0.25;
        }
        (DETAILS_ANCHOR_FRACTION * self.scroll.content_height / track).clamp(0.0, 1.0)
    }

    pub(super) fn sanitize_offset(offset: RelativeOffset) -> RelativeOffset {
        let clamp = |v: f32| {
            if v.is_finite() {
                v.clamp(0.0, 1.0)
            } else {
                0.0
            }
        };
        RelativeOffset {
            x: clamp(offset.x),
            y: clamp(offset.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::parallax::MAX_OFFSET_PX;

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default());
        app
    }

    fn scrolled(app: &mut App, y: f32) {
        app.handle_scrolled(
            RelativeOffset { x: 0.0, y },
            800.0,
            4_000.0,
        );
    }

    #[test]
    fn scroll_event_refreshes_geometry_and_transform() {
        let mut app = build_test_app();
        scrolled(&mut app, 0.0);
        assert_eq!(app.scroll.viewport_height, 800.0);
        assert_eq!(app.scroll.content_height, 4_000.0);
        // Anchor sits at 960 px, viewport center at 400: tilted clockwise.
        assert!(app.scroll.parallax.rotation_deg > 0.0);
    }

    #[test]
    fn transform_passes_through_zero_at_the_viewport_center() {
        let mut app = build_test_app();
        // absolute_y = y * (4000 - 800); anchor at 960; center when
        // 960 - abs = 400 => abs = 560 => y = 0.175.
        scrolled(&mut app, 0.175);
        assert!(app.scroll.parallax.rotation_deg.abs() < 1e-3);
        assert!(app.scroll.parallax.offset_y.abs() < 1e-2);
    }

    #[test]
    fn offset_clamps_even_when_scrolled_far_past() {
        let mut app = build_test_app();
        scrolled(&mut app, 1.0);
        assert_eq!(app.scroll.parallax.offset_y.abs(), MAX_OFFSET_PX);
    }

    #[test]
    fn non_finite_events_leave_a_neutral_transform() {
        let mut app = build_test_app();
        app.handle_scrolled(
            RelativeOffset {
                x: 0.0,
                y: f32::NAN,
            },
            f32::INFINITY,
            4_000.0,
        );
        assert_eq!(app.scroll.offset.y, 0.0);
        assert_eq!(app.scroll.viewport_height, 0.0);
        assert_eq!(app.scroll.parallax, Transform::default());
    }

    #[test]
    fn details_jump_lands_on_the_anchor() {
        let mut app = build_test_app();
        scrolled(&mut app, 0.0);
        let mut effects = Vec::new();
        app.handle_scroll_to_details(&mut effects);
        assert_eq!(effects.len(), 1);
        match &effects[0] {
            Effect::ScrollMainTo(offset) => {
                assert!((offset.y - 0.3).abs() < 1e-6); // 960 / 3200
            }
            _ => panic!("expected a main scroll effect"),
        }
    }

    #[test]
    fn back_to_top_scrolls_to_the_start() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_back_to_top(&mut effects);
        match &effects[0] {
            Effect::ScrollMainTo(offset) => assert_eq!(offset.y, 0.0),
            _ => panic!("expected a main scroll effect"),
        }
    }
}
