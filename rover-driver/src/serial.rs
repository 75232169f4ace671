use crate::error::DriverError;
use rover_data::MotorCommand;
use serialport::SerialPort;
use std::io::Write;
use std::time::Duration;

pub(crate) fn open_port(
    name: &str,
    baud_rate: u32,
    timeout: Duration,
) -> Result<Box<dyn SerialPort>, DriverError> {
    let port = serialport::new(name, baud_rate).timeout(timeout).open()?;
    Ok(port)
}

/// Writes one newline-terminated JSON command to the rover controller.
pub(crate) fn send_command(
    port: &mut Box<dyn SerialPort>,
    command: &MotorCommand,
) -> Result<(), DriverError> {
    let mut line = serde_json::to_vec(command)?;
    line.push(b'\n');
    port.write_all(&line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::sleep_ms;
    use serialport::TTYPort;
    use std::io::Read;

    #[test]
    fn test_send_drive_command() {
        let (master, mut slave) = TTYPort::pair().expect("Unable to create ptty pair");
        let mut master_ptr = Box::new(master) as Box<dyn SerialPort>;
        send_command(&mut master_ptr, &MotorCommand::drive(255, -255)).unwrap();

        sleep_ms(10);

        let mut buf = [0u8; 64];
        let n = slave.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"{\"T\":1,\"L\":255,\"R\":-255}\n");
    }

    #[test]
    fn test_send_halt_command() {
        let (master, mut slave) = TTYPort::pair().expect("Unable to create ptty pair");
        let mut master_ptr = Box::new(master) as Box<dyn SerialPort>;
        send_command(&mut master_ptr, &MotorCommand::halt()).unwrap();

        sleep_ms(10);

        let mut buf = [0u8; 64];
        let n = slave.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"{\"T\":0}\n");
    }
}
