//! Host stand-ins for the sensor, the text channel and the clock
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;

use pendulum_core::{MonotonicClock, PendulumTimer, RangingSensor, TextChannel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorFault;

/// Hands out queued distances one per poll
#[derive(Default)]
pub struct ScriptedSensor {
    pub samples: VecDeque<u16>,
    pub fail_begin: bool,
    pub fail_start: bool,
    pub ranging: bool,
}

impl RangingSensor for ScriptedSensor {
    type Error = SensorFault;

    fn begin(&mut self) -> Result<(), SensorFault> {
        if self.fail_begin {
            Err(SensorFault)
        } else {
            Ok(())
        }
    }

    fn start_continuous_ranging(&mut self) -> Result<(), SensorFault> {
        if self.fail_start {
            return Err(SensorFault);
        }
        self.ranging = true;
        Ok(())
    }

    fn is_sample_ready(&mut self) -> Result<bool, SensorFault> {
        Ok(!self.samples.is_empty())
    }

    fn read_distance(&mut self) -> Result<u16, SensorFault> {
        self.samples.pop_front().ok_or(SensorFault)
    }
}

/// Records what an operator would see; drops writes while closed
pub struct RecordingChannel {
    pub input: VecDeque<u8>,
    pub lines: Vec<String>,
    pub open: bool,
    pub suppressed: usize,
}

impl Default for RecordingChannel {
    fn default() -> Self {
        Self {
            input: VecDeque::new(),
            lines: Vec::new(),
            open: true,
            suppressed: 0,
        }
    }
}

impl RecordingChannel {
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.lines.iter().filter(|l| l.starts_with(prefix)).count()
    }
}

impl TextChannel for RecordingChannel {
    fn read_command(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn write_line(&mut self, line: &str) {
        if self.open {
            self.lines.push(line.to_owned());
        } else {
            self.suppressed += 1;
        }
    }

    fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Default)]
pub struct ManualClock {
    pub now: Cell<u64>,
}

impl MonotonicClock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Timer plus its collaborators, driven one poll at a time
pub struct Bench {
    pub timer: PendulumTimer,
    pub sensor: ScriptedSensor,
    pub channel: RecordingChannel,
    pub clock: ManualClock,
}

impl Bench {
    pub fn new() -> Self {
        Self {
            timer: PendulumTimer::new(0),
            sensor: ScriptedSensor::default(),
            channel: RecordingChannel::default(),
            clock: ManualClock::default(),
        }
    }

    /// Polls once at `at_ms`, optionally with a pending command and a fresh sample
    pub fn poll(&mut self, at_ms: u64, command: Option<u8>, distance_mm: Option<u16>) {
        self.clock.now.set(at_ms);
        self.channel.input.extend(command);
        self.sensor.samples.extend(distance_mm);
        self.timer
            .poll(&mut self.sensor, &mut self.channel, &self.clock);
    }

    pub fn command(&mut self, at_ms: u64, byte: u8) {
        self.poll(at_ms, Some(byte), None);
    }

    pub fn sample(&mut self, at_ms: u64, distance_mm: u16) {
        self.poll(at_ms, None, Some(distance_mm));
    }

    /// Starts a run at `at_ms` with the pendulum out of view
    pub fn start_run(&mut self, at_ms: u64) {
        self.sample(at_ms.saturating_sub(1), 400);
        self.command(at_ms, b'r');
    }

    /// One pass in front of the sensor: below trigger at `at_ms`, clear 1 ms later
    pub fn pass(&mut self, at_ms: u64) {
        self.sample(at_ms, 100);
        self.sample(at_ms + 1, 400);
    }
}
