//! Pendulum measurement task
//!
//! Owns the sensor, the console and the measurement state and runs the
//! control loop. Each tick polls the state machine once; nothing in a poll
//! waits on hardware, so the tick period bounds the timing resolution.
//!
//! # Boot
//! If the distance sensor does not come up the task logs the error and parks
//! forever without entering the loop. The console stays usable for the boot
//! message only.

use defmt::{Display2Format, error, info};
use embassy_time::{Duration, Ticker};
use pendulum_core::{MonotonicClock, PendulumTimer};

use crate::system::clock::UptimeClock;
use crate::system::resources::{DistanceSensorResources, SerialResources};
use crate::system::serial_console::SerialConsole;
use crate::system::tof_sensor::TofSensor;

/// Control loop period (1 ms matches the semiperiod resolution)
const LOOP_PERIOD: Duration = Duration::from_millis(1);

/// Measurement control loop
#[embassy_executor::task]
pub async fn pendulum_measure(d: DistanceSensorResources, s: SerialResources) {
    let mut console = SerialConsole::new(s);
    let mut sensor = TofSensor::new(d);
    let clock = UptimeClock;

    let mut timer = PendulumTimer::new(clock.now_ms());
    if let Err(e) = timer.boot(&mut sensor, &mut console) {
        error!("Halting, {}", Display2Format(&e));
        core::future::pending::<()>().await;
    }
    info!("Pendulum timer ready");

    let mut ticker = Ticker::every(LOOP_PERIOD);
    loop {
        timer.poll(&mut sensor, &mut console, &clock);
        ticker.next().await;
    }
}
