//! Uptime clock
//!
//! Milliseconds since boot from the embassy time driver.

use embassy_time::Instant;
use pendulum_core::MonotonicClock;

/// [`MonotonicClock`] backed by [`Instant::now`]
pub struct UptimeClock;

impl MonotonicClock for UptimeClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
