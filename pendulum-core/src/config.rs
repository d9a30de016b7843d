//! Measurement constants
//!
//! Nothing here is configurable at runtime.

/// Added to the calibration distance to get the trigger distance (mm)
pub const TRIGGER_OFFSET_MM: u16 = 20;

/// Trigger distance used until the first calibration (mm)
pub const DEFAULT_TRIGGER_DISTANCE_MM: u16 = 200;

/// Number of semiperiods recorded per run
pub const SEMIPERIOD_CAPACITY: usize = 20;

/// Decimal places for mean, deviation and variance in the report
pub const REPORT_PRECISION: usize = 8;

/// Longest line written to the text channel (bytes)
pub const LINE_CAPACITY: usize = 96;
