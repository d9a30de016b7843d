//! Crossing Detector
//!
//! Edge detector with a latch: a crossing fires when the distance drops below
//! the trigger distance, and cannot fire again until a sample at or above the
//! trigger distance has cleared the latch. One pass of the pendulum in front
//! of the sensor therefore counts once, however many samples it spans.
//!
//! No filtering is applied beyond this; the sensor driver delivers
//! conditioned samples.

/// Pure detection step
///
/// Takes the current distance, the trigger distance and the latch, returns
/// `(crossed, latch)`.
pub fn detect(distance_mm: u16, trigger_mm: u16, latched: bool) -> (bool, bool) {
    if distance_mm < trigger_mm {
        (!latched, true)
    } else {
        (false, false)
    }
}

/// Stateful wrapper around [`detect`]
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CrossingDetector {
    latched: bool,
}

impl CrossingDetector {
    pub const fn new() -> Self {
        Self { latched: false }
    }

    /// Feeds one sample, returns true on a new crossing
    pub fn update(&mut self, distance_mm: u16, trigger_mm: u16) -> bool {
        let (crossed, latched) = detect(distance_mm, trigger_mm, self.latched);
        self.latched = latched;
        crossed
    }

    /// Clears the latch so the next below-trigger sample fires
    pub fn rearm(&mut self) {
        self.latched = false;
    }

    /// Holds off crossings until a sample at or above the trigger distance
    pub fn hold(&mut self) {
        self.latched = true;
    }

    /// True while a crossing is being held off
    pub fn is_latched(&self) -> bool {
        self.latched
    }
}
