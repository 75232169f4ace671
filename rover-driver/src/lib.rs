//! Reactive obstacle-avoidance driver for a wheeled rover.
//!
//! Reads the LD19 LiDAR's frame stream off one serial port, classifies the
//! nearest return of each frame into a movement directive, and forwards the
//! matching JSON motor command to the rover controller on a second port.
//! [`run_driver`] spawns the two loops and hands back their joinable handles.

mod config;
mod constants;
mod decide;
mod driver_threads;
mod error;
mod frame;
mod margin;
mod numeric;
mod packet;
mod pipeline;
mod scan;
mod serial;
mod time;

pub use crate::config::{CrcPolicy, DecisionPolicy, DriverConfig, MotorSpeeds};
pub use crate::driver_threads::{join, DriverThreads};
pub use crate::error::DriverError;

use crate::driver_threads::{control_loop, sensing_loop};
use crate::pipeline::ActionCell;
use crate::serial::open_port;
use crossbeam_channel::bounded;
use std::sync::Arc;
use std::time::Duration;

const PORT_TIMEOUT: Duration = Duration::from_millis(100);

/// Function to launch the avoidance driver.
/// # Arguments
///
/// * `lidar_port_name` - Serial port streaming LiDAR frames, such as `/dev/ttyUSB0`.
/// * `rover_port_name` - Serial port of the motor controller, such as `/dev/serial0`.
/// * `config` - Tunables for this instance.
pub fn run_driver(
    lidar_port_name: &str,
    rover_port_name: &str,
    config: DriverConfig,
) -> Result<DriverThreads, DriverError> {
    let mut lidar_port = open_port(lidar_port_name, config.lidar_baud_rate, PORT_TIMEOUT)?;
    let mut rover_port = open_port(rover_port_name, config.rover_baud_rate, PORT_TIMEOUT)?;

    let (sensing_terminator_tx, sensing_terminator_rx) = bounded(10);
    let (control_terminator_tx, control_terminator_rx) = bounded(10);

    let cell = Arc::new(ActionCell::new());

    let sensing_cell = cell.clone();
    let sensing_config = config.clone();
    let sensing_control_tx = control_terminator_tx.clone();
    let sensing_thread = Some(std::thread::spawn(move || {
        sensing_loop(
            &mut lidar_port,
            sensing_cell,
            sensing_terminator_rx,
            sensing_control_tx,
            sensing_config,
        );
    }));

    let control_thread = Some(std::thread::spawn(move || {
        control_loop(&mut rover_port, cell, control_terminator_rx, config);
    }));

    Ok(DriverThreads {
        sensing_terminator_tx,
        control_terminator_tx,
        sensing_thread,
        control_thread,
    })
}
