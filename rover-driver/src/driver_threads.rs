use crate::config::DriverConfig;
use crate::decide::decide;
use crate::error::DriverError;
use crate::frame::read_frame;
use crate::margin::dynamic_margin;
use crate::packet::decode;
use crate::pipeline::ActionCell;
use crate::serial::send_command;
use crate::time::sleep_ms;
use crossbeam_channel::{Receiver, Sender};
use rover_data::Action;
use serialport::SerialPort;
use std::io::ErrorKind;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Struct that contains driver threads.
pub struct DriverThreads {
    pub(crate) sensing_terminator_tx: Sender<bool>,
    pub(crate) control_terminator_tx: Sender<bool>,
    pub(crate) sensing_thread: Option<JoinHandle<()>>,
    pub(crate) control_thread: Option<JoinHandle<()>>,
}

/// Blocks on the sensor stream and publishes one directive per frame.
///
/// A frame that cannot be decoded publishes `Stop` instead of waiting for a
/// better one. Permanent stream loss tears down the control loop as well, so
/// both ports are released.
pub(crate) fn sensing_loop(
    port: &mut Box<dyn SerialPort>,
    cell: Arc<ActionCell>,
    sensing_terminator_rx: Receiver<bool>,
    control_terminator_tx: Sender<bool>,
    config: DriverConfig,
) {
    log::info!("Sensing loop started");
    loop {
        if do_terminate(&sensing_terminator_rx) {
            log::info!("Sensing loop stopped");
            return;
        }

        let frame = match read_frame(port) {
            Ok(frame) => frame,
            Err(DriverError::IoError(e)) if e.kind() == ErrorKind::TimedOut => continue,
            Err(e) => {
                log::error!("Sensor stream lost: {e}");
                let _ = control_terminator_tx.send(true);
                return;
            }
        };

        let action = match decode(&frame, config.crc) {
            Ok(scan) => {
                let margin_mm = dynamic_margin(&scan, config.base_distance_mm);
                decide(&scan, margin_mm, &config)
            }
            Err(e) => {
                log::warn!("Frame rejected: {e}");
                Action::Stop
            }
        };
        cell.publish(action);
    }
}

/// Forwards the latest directive to the rover at a fixed tick.
pub(crate) fn control_loop(
    port: &mut Box<dyn SerialPort>,
    cell: Arc<ActionCell>,
    control_terminator_rx: Receiver<bool>,
    config: DriverConfig,
) {
    log::info!("Control loop started");
    while !do_terminate(&control_terminator_rx) {
        if let Some(action) = cell.take() {
            log::debug!("Emitting {action:?}");
            if let Err(e) = send_command(port, &config.command_for(action)) {
                log::error!("Failed to send command: {e}");
            }
        }
        sleep_ms(config.control_tick_ms);
    }
    // Leave the motors stopped, whatever was last commanded.
    if let Err(e) = send_command(port, &config.command_for(Action::Stop)) {
        log::error!("Failed to send the final stop: {e}");
    }
    log::info!("Control loop stopped");
}

pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    terminator_rx.try_recv().unwrap_or(false)
}

/// Function to join driver threads.
/// This function is automatically called when `driver_threads` is dropped.
pub fn join(driver_threads: &mut DriverThreads) {
    // A loop that already exited on stream loss has dropped its receiver.
    let _ = driver_threads.sensing_terminator_tx.send(true);
    let _ = driver_threads.control_terminator_tx.send(true);

    if let Some(thread) = driver_threads.sensing_thread.take() {
        thread.join().unwrap();
    }
    if let Some(thread) = driver_threads.control_thread.take() {
        thread.join().unwrap();
    }
}

impl Drop for DriverThreads {
    fn drop(&mut self) {
        join(self);
    }
}
