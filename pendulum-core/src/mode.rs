//! Measurement modes
//!
//! Exactly one mode is active at a time. Operator commands move the machine
//! between modes; the two `*Finished` modes are one-shot and fall back to
//! [`Mode::Waiting`] on the same poll that handles them.

/// Operating mode of the pendulum timer
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Idle, only reacts to commands
    #[default]
    Waiting,
    /// Recording semiperiods into the buffer
    Running,
    /// Run complete (buffer full or aborted), report pending
    RunningFinished,
    /// Tracking the current distance to derive the trigger distance
    Calibrating,
    /// Calibration complete, confirmation pending
    CalibratingFinished,
    /// Streaming distance, elapsed time and crossing count every poll
    Debug,
    /// Reporting crossings only
    DebugArmed,
}
