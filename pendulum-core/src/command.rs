//! Command Interpreter
//!
//! Maps single-character operator commands to mode transitions.
//!
//! | key       | effect                                              |
//! |-----------|-----------------------------------------------------|
//! | `d` / `D` | toggle `Debug` / `DebugArmed`, reset crossing count |
//! | `c` / `C` | toggle `Calibrating` / `CalibratingFinished`        |
//! | `f`       | force `CalibratingFinished`                         |
//! | `r`       | start a run (clear buffer, restart clock)           |
//! | `a`       | abort a run, only while `Running`                   |
//! | `x`       | back to `Waiting`, drop recorded semiperiods        |
//!
//! Any other byte is ignored. Interpretation is pure; the state machine
//! applies the returned [`Effect`] once per accepted command.

use crate::mode::Mode;

/// Recognised operator command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `d` / `D`
    ToggleDebug,
    /// `c` / `C`
    ToggleCalibration,
    /// `f`
    FinishCalibration,
    /// `r`
    StartRun,
    /// `a`
    AbortRun,
    /// `x`
    Reset,
}

/// Side effect to apply along with a mode change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Mode change only
    None,
    /// Zero the debug crossing counter and re-arm the detector
    ResetDebugCounter,
    /// Clear the buffer, restart the clock reference, hold the detector
    /// until the signal is above the trigger distance
    StartRun,
    /// Drop recorded semiperiods without reporting them
    Reset,
}

/// Outcome of an accepted command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub command: Command,
    pub mode: Mode,
    pub effect: Effect,
}

impl Command {
    /// Decodes an input byte; unrecognised bytes yield `None`
    pub fn parse(byte: u8) -> Option<Self> {
        match byte {
            b'd' | b'D' => Some(Command::ToggleDebug),
            b'c' | b'C' => Some(Command::ToggleCalibration),
            b'f' => Some(Command::FinishCalibration),
            b'r' => Some(Command::StartRun),
            b'a' => Some(Command::AbortRun),
            b'x' => Some(Command::Reset),
            _ => None,
        }
    }

    /// Resolves the command against the current mode
    ///
    /// Returns `None` when the command does not apply (only `a` outside a run).
    pub fn apply(self, current: Mode) -> Option<Transition> {
        let (mode, effect) = match self {
            Command::ToggleDebug => {
                let mode = if current == Mode::Debug {
                    Mode::DebugArmed
                } else {
                    Mode::Debug
                };
                (mode, Effect::ResetDebugCounter)
            }
            Command::ToggleCalibration => {
                let mode = if current == Mode::Calibrating {
                    Mode::CalibratingFinished
                } else {
                    Mode::Calibrating
                };
                (mode, Effect::None)
            }
            Command::FinishCalibration => (Mode::CalibratingFinished, Effect::None),
            Command::StartRun => (Mode::Running, Effect::StartRun),
            Command::AbortRun if current == Mode::Running => (Mode::RunningFinished, Effect::None),
            Command::AbortRun => return None,
            Command::Reset => (Mode::Waiting, Effect::Reset),
        };
        Some(Transition {
            command: self,
            mode,
            effect,
        })
    }
}

/// Interprets an optional pending input byte against the current mode
pub fn interpret(input: Option<u8>, current: Mode) -> Option<Transition> {
    input.and_then(Command::parse).and_then(|command| command.apply(current))
}
