//! Hardware Resource Management
//!
//! Assigns the RP2350 pins and peripherals used by the pendulum timer.
//!
//! # Resource Groups
//! - Distance Sensor: VL53L4CD time-of-flight sensor on I2C0
//! - Serial: operator text channel on UART0
//!
//! Both peripherals are driven in blocking mode from a single task, so no
//! interrupt bindings or shared-bus mutexes are needed.

use assign_resources::assign_resources;
use embassy_rp::peripherals;
use embassy_rp::Peri;

assign_resources! {
    /// VL53L4CD time-of-flight sensor (I2C address 0x29)
    distance_sensor: DistanceSensorResources {
        i2c: I2C0,
        sda_pin: PIN_4,
        scl_pin: PIN_5,
    },
    /// Operator console, 115200 8N1
    serial: SerialResources {
        uart: UART0,
        tx_pin: PIN_0,
        rx_pin: PIN_1,
    },
}
