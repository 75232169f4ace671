use std::error::Error;
use std::fmt::Display;
use std::{fmt, io};

#[derive(Debug)]
pub enum DriverError {
    IncompleteFrame,
    BadHeader(u8),
    DegenerateGeometry(u8),
    ChecksumMismatch(u8, u8),
    EncodeError(serde_json::Error),
    SerialError(serialport::Error),
    IoError(io::Error),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DriverError::IncompleteFrame => write!(f, "Byte stream ended in the middle of a frame."),
            DriverError::BadHeader(byte) => write!(f, "Frame must start with 0x54. Observed = {:#04X}.", byte),
            DriverError::DegenerateGeometry(n) => write!(f, "Frame announced {} point(s). At least two are required for angle interpolation.", n),
            DriverError::ChecksumMismatch(expected, computed) => write!(f, "Checksum mismatched. Computed = {:02X}, expected = {:02X}.", computed, expected),
            DriverError::EncodeError(err) => Display::fmt(&err, f),
            DriverError::IoError(err) => Display::fmt(&err, f),
            DriverError::SerialError(err) => Display::fmt(&err, f),
        }
    }
}

impl Error for DriverError {}

impl From<io::Error> for DriverError {
    fn from(err: io::Error) -> Self {
        DriverError::IoError(err)
    }
}

impl From<serialport::Error> for DriverError {
    fn from(err: serialport::Error) -> Self {
        DriverError::SerialError(err)
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(err: serde_json::Error) -> Self {
        DriverError::EncodeError(err)
    }
}
