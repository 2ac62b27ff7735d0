use super::super::state::App;
use super::Effect;
use iced::widget::scrollable::RelativeOffset;
use tracing::debug;

impl App {
    pub(super) fn handle_gallery_scrolled(&mut self, offset_x: f32, viewport_width: f32) {
        self.gallery.track_scroll(offset_x, viewport_width);
    }

    pub(super) fn handle_gallery_prev(&mut self, effects: &mut Vec<Effect>) {
        let current = self.gallery.current();
        self.handle_gallery_go_to(current.saturating_sub(1), effects);
    }

    pub(super) fn handle_gallery_next(&mut self, effects: &mut Vec<Effect>) {
        let current = self.gallery.current();
        self.handle_gallery_go_to(current + 1, effects);
    }

    /// Clamped programmatic navigation; a no-op when the strip is already
    /// resting on the requested panel.
    pub(super) fn handle_gallery_go_to(&mut self, idx: usize, effects: &mut Vec<Effect>) {
        let idx = self.gallery.clamp_index(idx);
        if idx == self.gallery.current() && self.gallery.settled_at(idx) {
            return;
        }
        self.gallery.set_current_clamped(idx);
        debug!(panel = idx, "Gallery navigation");
        effects.push(Effect::SnapGalleryTo(RelativeOffset {
            x: self.gallery.relative_position(idx),
            y: 0.0,
        }));
    }
}
