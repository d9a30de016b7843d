//! Measurement State Machine
//!
//! Owns every piece of mutable measurement state: the current mode, the
//! trigger distance, the latest distance sample, the crossing detector, the
//! semiperiod buffer and the clock reference. The firmware keeps one instance
//! and calls [`PendulumTimer::poll`] once per loop iteration.
//!
//! # Modes
//! - `Waiting`: idle
//! - `Calibrating`: trigger distance follows the current distance plus
//!   [`TRIGGER_OFFSET_MM`], the distance is echoed every poll
//! - `CalibratingFinished`: confirmation, then `Waiting`
//! - `Running`: every crossing stores the time since the previous one; a full
//!   buffer ends the run
//! - `RunningFinished`: report over the recorded semiperiods, then `Waiting`
//! - `Debug`: distance, time since the previous line and crossing count, every poll
//! - `DebugArmed`: one line per crossing
//!
//! The text channel is closed for the duration of a run and reopened on any
//! way out of `Running`, before anything is reported.

use crate::buffer::SemiperiodBuffer;
use crate::command::{self, Effect, Transition};
use crate::config::{DEFAULT_TRIGGER_DISTANCE_MM, TRIGGER_OFFSET_MM};
use crate::detector::CrossingDetector;
use crate::io::{MonotonicClock, RangingSensor, TextChannel};
use crate::mode::Mode;
use crate::report;
use crate::statistics::Statistics;

/// Startup failure; the control loop must not run after one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootError<E> {
    /// The sensor did not initialise
    SensorInit(E),
    /// The sensor initialised but refused to start ranging
    StartRanging(E),
}

impl<E: core::fmt::Debug> core::fmt::Display for BootError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BootError::SensorInit(e) => write!(f, "distance sensor init failed: {:?}", e),
            BootError::StartRanging(e) => write!(f, "distance sensor ranging failed: {:?}", e),
        }
    }
}

/// Pendulum timer state
#[derive(Debug, Clone)]
pub struct PendulumTimer {
    mode: Mode,
    trigger_distance_mm: u16,
    distance_mm: u16,
    detector: CrossingDetector,
    semiperiods: SemiperiodBuffer,
    /// Time of the last crossing (running) or the last debug line (debug)
    last_time_ms: u64,
    debug_crossings: u32,
}

impl PendulumTimer {
    /// Creates an idle timer with the default trigger distance
    pub fn new(now_ms: u64) -> Self {
        Self {
            mode: Mode::Waiting,
            trigger_distance_mm: DEFAULT_TRIGGER_DISTANCE_MM,
            distance_mm: 0,
            detector: CrossingDetector::new(),
            semiperiods: SemiperiodBuffer::new(),
            last_time_ms: now_ms,
            debug_crossings: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn trigger_distance_mm(&self) -> u16 {
        self.trigger_distance_mm
    }

    /// Latest distance sample (0 until the sensor delivered one)
    pub fn distance_mm(&self) -> u16 {
        self.distance_mm
    }

    /// Semiperiods recorded in the current run
    pub fn semiperiods(&self) -> &[u32] {
        self.semiperiods.as_slice()
    }

    pub fn debug_crossings(&self) -> u32 {
        self.debug_crossings
    }

    /// Initialises the sensor, starts continuous ranging and prints the menu
    ///
    /// # Errors
    /// Returns the failing step; the caller must not start polling.
    pub fn boot<S, C>(&self, sensor: &mut S, channel: &mut C) -> Result<(), BootError<S::Error>>
    where
        S: RangingSensor,
        C: TextChannel,
    {
        channel.write_line("Booting distance sensor...");
        if let Err(e) = sensor.begin() {
            error!("distance sensor init failed");
            channel.write_line("Failed to boot distance sensor");
            return Err(BootError::SensorInit(e));
        }
        channel.write_line("Done");

        sensor
            .start_continuous_ranging()
            .map_err(BootError::StartRanging)?;
        info!("continuous ranging started");

        report::write_menu(channel, self.trigger_distance_mm);
        Ok(())
    }

    /// One control loop iteration
    ///
    /// Consumes at most one command, takes a fresh sample if one is ready and
    /// runs the handler of the resulting mode. Never blocks.
    pub fn poll<S, C, K>(&mut self, sensor: &mut S, channel: &mut C, clock: &K)
    where
        S: RangingSensor,
        C: TextChannel,
        K: MonotonicClock,
    {
        let now_ms = clock.now_ms();

        if let Some(transition) = command::interpret(channel.read_command(), self.mode) {
            self.apply(transition, channel, now_ms);
        }

        match sensor.is_sample_ready() {
            Ok(true) => match sensor.read_distance() {
                Ok(distance_mm) => self.distance_mm = distance_mm,
                Err(_) => warn!("distance read failed, keeping {} mm", self.distance_mm),
            },
            Ok(false) => {}
            Err(_) => warn!("sensor status poll failed"),
        }

        self.step(channel, now_ms);
    }

    /// Applies an accepted command and its side effect, once
    pub fn apply<C: TextChannel>(&mut self, transition: Transition, channel: &mut C, now_ms: u64) {
        let Transition {
            command,
            mode,
            effect,
        } = transition;
        debug!("command {} accepted", command);

        if self.mode == Mode::Running {
            channel.open();
        }

        match effect {
            Effect::None => {}
            Effect::ResetDebugCounter => {
                channel.write_line("Debug mode");
                self.debug_crossings = 0;
                self.detector.rearm();
            }
            Effect::StartRun => {
                self.semiperiods.clear();
                // a pendulum resting in front of the sensor must leave before it counts
                self.detector.hold();
                self.last_time_ms = now_ms;
                channel.write_line("Measuring...");
                channel.close();
            }
            Effect::Reset => {
                self.semiperiods.clear();
                channel.write_line("Shutting down...");
                report::write_menu(channel, self.trigger_distance_mm);
            }
        }

        self.set_mode(mode);
    }

    /// Runs the handler of the current mode with the latest sample
    ///
    /// A handler entering a one-shot mode has that mode handled in the same
    /// step.
    pub fn step<C: TextChannel>(&mut self, channel: &mut C, now_ms: u64) {
        match self.mode {
            Mode::Calibrating => self.calibrate(channel),
            Mode::Running => self.record(channel, now_ms),
            Mode::Debug => self.debug_sample(channel, now_ms),
            Mode::DebugArmed => self.debug_detect(channel),
            Mode::Waiting | Mode::RunningFinished | Mode::CalibratingFinished => {}
        }

        match self.mode {
            Mode::CalibratingFinished => self.finish_calibration(channel),
            Mode::RunningFinished => self.finish_run(channel),
            _ => {}
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            info!("mode {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    fn calibrate<C: TextChannel>(&mut self, channel: &mut C) {
        self.trigger_distance_mm = self.distance_mm.saturating_add(TRIGGER_OFFSET_MM);
        report::write_line_fmt(channel, format_args!("{}", self.distance_mm));
    }

    fn finish_calibration<C: TextChannel>(&mut self, channel: &mut C) {
        info!("trigger distance set to {} mm", self.trigger_distance_mm);
        channel.write_line("Calibration finished");
        report::write_menu(channel, self.trigger_distance_mm);
        self.set_mode(Mode::Waiting);
    }

    fn record<C: TextChannel>(&mut self, channel: &mut C, now_ms: u64) {
        if self.detector.update(self.distance_mm, self.trigger_distance_mm) {
            let semiperiod_ms = now_ms.saturating_sub(self.last_time_ms);
            self.last_time_ms = now_ms;
            let semiperiod_ms = u32::try_from(semiperiod_ms).unwrap_or(u32::MAX);
            debug!("crossing {} after {} ms", self.semiperiods.len() + 1, semiperiod_ms);
            if let Err(e) = self.semiperiods.push(semiperiod_ms) {
                warn!("dropped {} ms, buffer already full", e.0);
            }
        }

        if self.semiperiods.is_full() {
            channel.open();
            self.set_mode(Mode::RunningFinished);
        }
    }

    fn finish_run<C: TextChannel>(&mut self, channel: &mut C) {
        match Statistics::from_semiperiods(self.semiperiods.as_slice()) {
            Ok(stats) => {
                info!(
                    "run finished: {} semiperiods, mean {} s",
                    self.semiperiods.len(),
                    stats.mean
                );
                report::write_run_report(channel, self.semiperiods.as_slice(), &stats);
            }
            Err(e) => {
                warn!("run finished without a single crossing");
                report::write_line_fmt(channel, format_args!("{}", e));
            }
        }
        report::write_menu(channel, self.trigger_distance_mm);
        self.semiperiods.clear();
        self.set_mode(Mode::Waiting);
    }

    fn debug_sample<C: TextChannel>(&mut self, channel: &mut C, now_ms: u64) {
        if self.detector.update(self.distance_mm, self.trigger_distance_mm) {
            self.debug_crossings = self.debug_crossings.wrapping_add(1);
        }
        let elapsed_ms = now_ms.saturating_sub(self.last_time_ms);
        report::write_debug_sample(channel, self.distance_mm, elapsed_ms, self.debug_crossings);
        self.last_time_ms = now_ms;
    }

    fn debug_detect<C: TextChannel>(&mut self, channel: &mut C) {
        if self.detector.update(self.distance_mm, self.trigger_distance_mm) {
            channel.write_line("Detection");
        }
    }
}
