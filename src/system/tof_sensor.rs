//! Time-of-flight distance sensor
//!
//! Adapts the VL53L4CD driver to [`RangingSensor`]. The sensor runs in
//! continuous mode with a short timing budget so a swinging pendulum is
//! sampled often enough to catch every pass.
//!
//! # Timing
//! - Macro timing 10: short integration, a few mm of noise
//! - Inter-measurement 10 ms: fastest period the driver accepts
//!
//! Read failures are logged here, where the concrete error type is known,
//! and passed up; the measurement loop keeps its previous distance.

use defmt::{Debug2Format, info, warn};
use embassy_rp::i2c::{self, Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Delay;
use pendulum_core::RangingSensor;
use vl53l4cd_ulp::VL53L4cd;

use crate::system::resources::DistanceSensorResources;

/// I2C bus frequency (fast mode)
const I2C_FREQUENCY: u32 = 400_000;

/// Ranging integration length, 1..=255
const MACRO_TIMING: u16 = 10;

/// Period between samples in continuous mode (ms)
const INTER_MEASUREMENT_MS: u32 = 10;

type SensorBus = I2c<'static, I2C0, Blocking>;

/// Driver error on the blocking I2C0 bus
pub type TofError = vl53l4cd_ulp::Error<i2c::Error>;

/// VL53L4CD on I2C0
pub struct TofSensor {
    device: VL53L4cd<SensorBus, Delay>,
}

impl TofSensor {
    pub fn new(r: DistanceSensorResources) -> Self {
        let mut config = i2c::Config::default();
        config.frequency = I2C_FREQUENCY;
        let bus = I2c::new_blocking(r.i2c, r.scl_pin, r.sda_pin, config);
        Self {
            device: VL53L4cd::new(bus, Delay),
        }
    }
}

impl RangingSensor for TofSensor {
    type Error = TofError;

    fn begin(&mut self) -> Result<(), TofError> {
        let id = self.device.get_sensor_id()?;
        info!("VL53L4CD id {:#x}", id);
        self.device.sensor_init()?;
        self.device.set_macro_timing(MACRO_TIMING)?;
        self.device.set_inter_measurement_in_ms(INTER_MEASUREMENT_MS)?;
        Ok(())
    }

    fn start_continuous_ranging(&mut self) -> Result<(), TofError> {
        self.device.start_ranging()
    }

    fn is_sample_ready(&mut self) -> Result<bool, TofError> {
        self.device
            .check_for_data_ready()
            .inspect_err(|e| warn!("data-ready poll failed: {}", Debug2Format(e)))
    }

    fn read_distance(&mut self) -> Result<u16, TofError> {
        let measurement = self
            .device
            .get_estimated_measurement()
            .inspect_err(|e| warn!("range read failed: {}", Debug2Format(e)))?;
        self.device.clear_interrupt()?;
        Ok(measurement.estimated_distance_mm)
    }
}
