/// Horizontally scrolling photo strip. The current index is re-derived from
/// the strip's scroll position on every scroll event; programmatic
/// navigation clamps and snaps, never wraps.
pub struct GalleryState {
    images: Vec<String>,
    current: usize,
    pub(in crate::app) viewport_width: f32,
    pub(in crate::app) scroll_x: f32,
}

impl GalleryState {
    pub(in crate::app) fn new(images: Vec<String>) -> Self {
        Self {
            images,
            current: 0,
            viewport_width: 0.0,
            scroll_x: 0.0,
        }
    }

    pub(in crate::app) fn len(&self) -> usize {
        self.images.len()
    }

    pub(in crate::app) fn images(&self) -> &[String] {
        &self.images
    }

    pub(in crate::app) fn current(&self) -> usize {
        self.current
    }

    pub(in crate::app) fn clamp_index(&self, idx: usize) -> usize {
        idx.min(self.images.len().saturating_sub(1))
    }

    pub(in crate::app) fn set_current_clamped(&mut self, idx: usize) {
        self.current = self.clamp_index(idx);
    }

    /// Index of the panel resting nearest the given scroll offset.
    pub(in crate::app) fn index_for_offset(&self, offset_x: f32, viewport_width: f32) -> usize {
        if !offset_x.is_finite() || !viewport_width.is_finite() || viewport_width <= 0.0 {
            return self.current;
        }
        self.clamp_index((offset_x / viewport_width).round().max(0.0) as usize)
    }

    pub(in crate::app) fn track_scroll(&mut self, offset_x: f32, viewport_width: f32) {
        self.current = self.index_for_offset(offset_x, viewport_width);
        if offset_x.is_finite() {
            self.scroll_x = offset_x.max(0.0);
        }
        if viewport_width.is_finite() && viewport_width > 0.0 {
            self.viewport_width = viewport_width;
        }
    }

    /// Relative x offset [0, 1] that centers panel `idx` in the strip.
    pub(in crate::app) fn relative_position(&self, idx: usize) -> f32 {
        let last = self.images.len().saturating_sub(1);
        if last == 0 {
            return 0.0;
        }
        self.clamp_index(idx) as f32 / last as f32
    }

    /// Whether the strip is already resting on panel `idx`.
    pub(in crate::app) fn settled_at(&self, idx: usize) -> bool {
        if self.viewport_width <= 0.0 {
            return self.current == idx;
        }
        (self.scroll_x - idx as f32 * self.viewport_width).abs() < 1.0
    }
}
