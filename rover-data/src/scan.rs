#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single range return within a scan frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Distance to the reflecting surface (in mm). Zero marks an invalid reading.
    pub distance_mm: u16,
    /// Return strength of the laser pulse.
    pub intensity: u8,
}

/// Decoded contents of one fixed-length scan frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanRecord {
    /// Rotation speed of the scan head (in degrees per second x 100).
    pub scan_speed: u16,
    /// Bearing of the first point (in centidegrees, [0, 36000)).
    pub start_angle: u16,
    /// Bearing of the last point (in centidegrees, [0, 36000)).
    pub end_angle: u16,
    /// Number of points announced by the frame header.
    pub point_count: u8,
    /// Device timestamp of the frame.
    pub timestamp: u16,
    /// Checksum byte carried in the frame trailer.
    pub crc: u8,
    /// Points in bearing order, starting at `start_angle`. May hold fewer
    /// than `point_count` entries when the frame could not fit them all.
    pub points: Vec<Point>,
}
