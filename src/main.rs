//! Pendulum timer firmware entry point
//!
//! Initializes the RP2350 and spawns the measurement task.

#![no_std]
#![no_main]

use crate::task::pendulum_measure::pendulum_measure;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use system::resources::{AssignedResources, DistanceSensorResources, SerialResources};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Hardware plumbing
mod system;
/// Task implementations
mod task;

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups for each task
    let r = split_resources!(p);

    spawner
        .spawn(pendulum_measure(r.distance_sensor, r.serial))
        .unwrap();
}
