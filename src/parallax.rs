//! Scroll-driven tilt for the details ornament.
//!
//! The transform is a pure function of where the ornament sits relative to
//! the middle of the viewport, so it can be tested without a rendering
//! surface. The view applies the result directly on every scroll event; any
//! perceived smoothing comes from the scroll cadence itself.

/// Degrees of tilt per pixel of distance from the viewport center.
pub const TILT_FACTOR: f32 = 0.05;

/// Vertical travel is capped to keep the ornament inside its section.
pub const MAX_OFFSET_PX: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub rotation_deg: f32,
    pub offset_y: f32,
}

/// Compute the tilt for an element whose top edge is `element_top` pixels
/// from the top of the viewport (negative once scrolled past).
pub fn compute_transform(element_top: f32, viewport_height: f32) -> Transform {
    if !element_top.is_finite() || !viewport_height.is_finite() {
        return Transform::default();
    }
    let raw = (element_top - viewport_height / 2.0) * TILT_FACTOR;
    Transform {
        rotation_deg: raw,
        offset_y: (-2.0 * raw).clamp(-MAX_OFFSET_PX, MAX_OFFSET_PX),
    }
}
