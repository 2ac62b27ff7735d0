use super::constants::{HEART_COUNT, HEART_STAGGER_MS};
use rand::Rng;
use std::time::{Duration, Instant};

/// The opening letter is a one-way gate: once opened it never seals again,
/// and the open transition is what starts the music, exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStage {
    Sealed,
    Opened,
}

impl LetterStage {
    pub(in crate::app) fn is_opened(self) -> bool {
        matches!(self, LetterStage::Opened)
    }
}

/// RSVP modal lifecycle. `Success` is only constructible from `Open` via
/// `submit`, so "success without the modal ever opening" cannot be
/// represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpStage {
    Closed,
    Open,
    Success,
}

/// One heart of the success burst; offsets are rolled once at submit.
pub struct HeartSeed {
    /// Horizontal drift in px, centered on the burst origin.
    pub(in crate::app) drift_x: f32,
    /// Total upward travel in px.
    pub(in crate::app) rise: f32,
    pub(in crate::app) delay: Duration,
}

pub struct RsvpState {
    pub(in crate::app) stage: RsvpStage,
    pub(in crate::app) guest_name: String,
    pub(in crate::app) party_size: String,
    /// Staleness guard for the auto-close task; a continuation whose id no
    /// longer matches is a no-op.
    pub(in crate::app) request_id: u64,
    pub(in crate::app) burst: Vec<HeartSeed>,
    pub(in crate::app) burst_started: Option<Instant>,
}

impl RsvpState {
    pub(in crate::app) fn new() -> Self {
        Self {
            stage: RsvpStage::Closed,
            guest_name: String::new(),
            party_size: String::new(),
            request_id: 0,
            burst: Vec::new(),
            burst_started: None,
        }
    }

    pub(in crate::app) fn is_open(&self) -> bool {
        matches!(self.stage, RsvpStage::Open)
    }

    pub(in crate::app) fn is_success(&self) -> bool {
        matches!(self.stage, RsvpStage::Success)
    }

    /// The required/typed form contract: a name and a party size of at
    /// least one guest.
    pub(in crate::app) fn form_valid(&self) -> bool {
        !self.guest_name.trim().is_empty()
            && self
                .party_size
                .trim()
                .parse::<u32>()
                .map(|n| n >= 1)
                .unwrap_or(false)
    }

    pub(in crate::app) fn open(&mut self) {
        if matches!(self.stage, RsvpStage::Closed) {
            self.stage = RsvpStage::Open;
        }
    }

    pub(in crate::app) fn cancel(&mut self) {
        if matches!(self.stage, RsvpStage::Open) {
            self.stage = RsvpStage::Closed;
        }
    }

    /// Synchronous local acknowledgment: no record is stored or sent.
    /// Returns the generation id the auto-close continuation must echo.
    pub(in crate::app) fn submit(&mut self, rng: &mut impl Rng, now: Instant) -> Option<u64> {
        if !self.is_open() || !self.form_valid() {
            return None;
        }
        self.stage = RsvpStage::Success;
        self.request_id = self.request_id.wrapping_add(1);
        self.burst = (0..HEART_COUNT)
            .map(|i| HeartSeed {
                drift_x: rng.gen_range(-100.0..=100.0),
                rise: 150.0 + rng.gen_range(0.0..=60.0),
                delay: Duration::from_millis(HEART_STAGGER_MS * i as u64),
            })
            .collect();
        self.burst_started = Some(now);
        Some(self.request_id)
    }

    /// Auto-close arriving from the scheduled task; stale generations and
    /// non-success stages are ignored.
    pub(in crate::app) fn close_if_current(&mut self, request_id: u64) -> bool {
        if self.is_success() && self.request_id == request_id {
            self.stage = RsvpStage::Closed;
            self.guest_name.clear();
            self.party_size.clear();
            self.burst_started = None;
            true
        } else {
            false
        }
    }
}
