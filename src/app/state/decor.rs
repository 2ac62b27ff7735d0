use super::constants::{
    FIREWORK_CYCLE_MS, PETAL_COUNT, PETAL_MAX_DELAY_SECS, PETAL_MAX_DURATION_SECS,
    PETAL_MIN_DURATION_SECS, PETAL_MIN_OPACITY,
};
use rand::Rng;
use std::time::{Duration, Instant};

/// One falling petal. All values are rolled once at scatter time and stay
/// fixed for the petal's lifetime; animation is derived from elapsed time.
pub struct Petal {
    /// Horizontal position in percent of the overlay width.
    pub(in crate::app) x_percent: f32,
    pub(in crate::app) duration: Duration,
    pub(in crate::app) delay: Duration,
    pub(in crate::app) opacity: f32,
}

/// Instantaneous pose along the fall, all in overlay-relative units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetalPose {
    /// Vertical position as a fraction of overlay height (-0.1 starts above
    /// the top edge, 1.2 ends below the bottom edge).
    pub y_frac: f32,
    pub rotation_deg: f32,
    pub scale: f32,
    pub alpha: f32,
}

impl Petal {
    /// Looping progress in [0, 1), or `None` before the start delay.
    pub(in crate::app) fn fall_progress(&self, elapsed: Duration) -> Option<f32> {
        let since_start = elapsed.checked_sub(self.delay)?;
        Some((since_start.as_secs_f32() / self.duration.as_secs_f32()).fract())
    }

    pub(in crate::app) fn pose(&self, progress: f32) -> PetalPose {
        let t = progress.clamp(0.0, 1.0);
        PetalPose {
            y_frac: -0.1 + 1.3 * t,
            rotation_deg: 360.0 * t,
            scale: 0.6 + 0.5 * t,
            alpha: self.opacity * 0.95 * (1.0 - t),
        }
    }
}

/// The ambient petal overlay: a fixed batch of descriptors plus the shared
/// animation clock advanced by the frame tick.
pub struct DecorField {
    petals: Vec<Petal>,
    started_at: Instant,
    pub(in crate::app) elapsed: Duration,
}

impl DecorField {
    pub(in crate::app) fn scatter(count: usize, rng: &mut impl Rng, now: Instant) -> Self {
        let petals = (0..count)
            .map(|_| Petal {
                x_percent: rng.gen_range(0.0..=100.0),
                duration: Duration::from_secs_f32(
                    rng.gen_range(PETAL_MIN_DURATION_SECS..=PETAL_MAX_DURATION_SECS),
                ),
                delay: Duration::from_secs_f32(rng.gen_range(0.0..=PETAL_MAX_DELAY_SECS)),
                opacity: rng.gen_range(PETAL_MIN_OPACITY..=1.0),
            })
            .collect();
        Self {
            petals,
            started_at: now,
            elapsed: Duration::ZERO,
        }
    }

    pub(in crate::app) fn scatter_default(rng: &mut impl Rng, now: Instant) -> Self {
        Self::scatter(PETAL_COUNT, rng, now)
    }

    pub(in crate::app) fn advance_to(&mut self, now: Instant) {
        self.elapsed = now.saturating_duration_since(self.started_at);
    }

    pub(in crate::app) fn petals(&self) -> &[Petal] {
        &self.petals
    }
}

/// Instantaneous pose of the pulsing fireworks ornament.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireworkPose {
    pub scale: f32,
    pub rotation_deg: f32,
    pub alpha: f32,
}

/// Breathing loop of the fireworks ornament: a smooth swell from rest
/// (scale 0.95, upright, 0.9 alpha) to the midpoint peak (scale 1.06,
/// 8 degrees, full alpha) and back, on a fixed cycle.
pub(in crate::app) fn firework_pose(elapsed: Duration) -> FireworkPose {
    let cycle = Duration::from_millis(FIREWORK_CYCLE_MS).as_secs_f32();
    let phase = (elapsed.as_secs_f32() / cycle).fract();
    let wave = 0.5 - 0.5 * (std::f32::consts::TAU * phase).cos();
    FireworkPose {
        scale: 0.95 + 0.11 * wave,
        rotation_deg: 8.0 * wave,
        alpha: 0.9 + 0.1 * wave,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field() -> DecorField {
        let mut rng = StdRng::seed_from_u64(7);
        DecorField::scatter_default(&mut rng, Instant::now())
    }

    #[test]
    fn scatters_exactly_the_fixed_count() {
        assert_eq!(field().petals().len(), PETAL_COUNT);
    }

    #[test]
    fn petal_values_stay_in_their_ranges() {
        for petal in field().petals() {
            assert!((0.0..=100.0).contains(&petal.x_percent));
            let secs = petal.duration.as_secs_f32();
            assert!((PETAL_MIN_DURATION_SECS..=PETAL_MAX_DURATION_SECS).contains(&secs));
            assert!(petal.delay.as_secs_f32() <= PETAL_MAX_DELAY_SECS);
            assert!((PETAL_MIN_OPACITY..=1.0).contains(&petal.opacity));
        }
    }

    #[test]
    fn hidden_before_its_delay_then_loops() {
        let petal = Petal {
            x_percent: 50.0,
            duration: Duration::from_secs(10),
            delay: Duration::from_secs(2),
            opacity: 1.0,
        };
        assert_eq!(petal.fall_progress(Duration::from_secs(1)), None);
        let early = petal.fall_progress(Duration::from_secs(4)).unwrap();
        assert!((early - 0.2).abs() < 1e-6);
        // One and a half cycles in wraps back to the midpoint.
        let wrapped = petal.fall_progress(Duration::from_secs(17)).unwrap();
        assert!((wrapped - 0.5).abs() < 1e-6);
    }

    #[test]
    fn pose_interpolates_between_the_keyframe_endpoints() {
        let petal = Petal {
            x_percent: 0.0,
            duration: Duration::from_secs(8),
            delay: Duration::ZERO,
            opacity: 1.0,
        };
        let start = petal.pose(0.0);
        assert!((start.y_frac + 0.1).abs() < 1e-6);
        assert!((start.scale - 0.6).abs() < 1e-6);
        assert!((start.alpha - 0.95).abs() < 1e-6);

        let end = petal.pose(1.0);
        assert!((end.y_frac - 1.2).abs() < 1e-6);
        assert!((end.rotation_deg - 360.0).abs() < 1e-6);
        assert!((end.scale - 1.1).abs() < 1e-6);
        assert!(end.alpha.abs() < 1e-6);
    }

    #[test]
    fn firework_breathes_between_rest_and_peak() {
        let rest = firework_pose(Duration::ZERO);
        assert!((rest.scale - 0.95).abs() < 1e-6);
        assert!(rest.rotation_deg.abs() < 1e-5);
        assert!((rest.alpha - 0.9).abs() < 1e-6);

        let peak = firework_pose(Duration::from_millis(FIREWORK_CYCLE_MS / 2));
        assert!((peak.scale - 1.06).abs() < 1e-6);
        assert!((peak.rotation_deg - 8.0).abs() < 1e-4);
        assert!((peak.alpha - 1.0).abs() < 1e-6);

        // A full cycle returns to rest and keeps looping.
        let looped = firework_pose(Duration::from_millis(FIREWORK_CYCLE_MS * 3));
        assert!((looped.scale - rest.scale).abs() < 1e-4);
    }

    #[test]
    fn clock_advances_monotonically() {
        let mut field = field();
        let later = field.started_at + Duration::from_millis(330);
        field.advance_to(later);
        assert_eq!(field.elapsed, Duration::from_millis(330));
        // A sample from before the scatter instant saturates at zero.
        field.advance_to(field.started_at);
        assert_eq!(field.elapsed, Duration::ZERO);
    }
}
