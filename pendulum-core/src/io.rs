//! Collaborator interfaces
//!
//! The state machine talks to the hardware only through these traits: the
//! time-of-flight sensor, the operator's text channel and a monotonic clock.
//! None of the methods may block for longer than a register access.

/// Time-of-flight distance sensor in continuous ranging mode
pub trait RangingSensor {
    type Error: core::fmt::Debug;

    /// Brings the sensor up; failure is fatal at boot
    fn begin(&mut self) -> Result<(), Self::Error>;

    /// Starts back-to-back measurements
    fn start_continuous_ranging(&mut self) -> Result<(), Self::Error>;

    /// True when a new sample can be read
    fn is_sample_ready(&mut self) -> Result<bool, Self::Error>;

    /// Latest distance in millimeters
    fn read_distance(&mut self) -> Result<u16, Self::Error>;
}

/// Line-oriented operator channel
pub trait TextChannel {
    /// Next pending input byte, `None` when nothing is waiting
    fn read_command(&mut self) -> Option<u8>;

    /// Writes one line; the implementation appends the line terminator
    fn write_line(&mut self, line: &str);

    /// Resumes outbound text
    fn open(&mut self);

    /// Silences outbound text; input keeps being read
    fn close(&mut self);
}

/// Millisecond clock that never goes backwards
pub trait MonotonicClock {
    fn now_ms(&self) -> u64;
}
