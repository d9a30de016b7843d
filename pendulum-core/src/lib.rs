//! Pendulum timer core
//!
//! Hardware-independent part of the pendulum timer firmware: the measurement
//! state machine, the crossing detector that turns a distance stream into
//! pendulum passes, the semiperiod buffer and the statistics reported at the
//! end of a run.
//!
//! The firmware feeds it through three small collaborator traits (see [`io`]),
//! which keeps everything here testable on the host.
//!
//! # Control loop
//! ```text
//! loop {
//!     timer.poll(&mut sensor, &mut channel, &clock);
//! }
//! ```
//! Each poll consumes at most one operator command, picks up a fresh distance
//! sample if the sensor has one, then runs the handler of the current mode.

#![cfg_attr(not(test), no_std)]

mod fmt; // must stay first so the logging macros are visible below

pub mod buffer;
pub mod command;
pub mod config;
pub mod detector;
pub mod io;
pub mod machine;
pub mod mode;
pub mod report;
pub mod statistics;

pub use buffer::{BufferFull, SemiperiodBuffer};
pub use command::{Command, Effect, Transition};
pub use detector::CrossingDetector;
pub use io::{MonotonicClock, RangingSensor, TextChannel};
pub use machine::{BootError, PendulumTimer};
pub use mode::Mode;
pub use statistics::{Statistics, StatisticsError};
