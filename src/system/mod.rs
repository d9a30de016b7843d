//! Hardware plumbing for the pendulum timer
pub mod clock;
pub mod resources;
pub mod serial_console;
pub mod tof_sensor;
