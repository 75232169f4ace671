use crate::config::CrcPolicy;
use crate::constants::{
    CRC_TABLE, FRAME_HEADER, FRAME_SIZE, POINT_AREA_OFFSET, POINT_STRIDE, TRAILER_OFFSET,
};
use crate::error::DriverError;
use crate::frame::RawFrame;
use crate::numeric::to_u16_le;
use rover_data::{Point, ScanRecord};

/// Unpacks and validates one frame.
///
/// The announced point count can exceed what the frame actually holds; the
/// surplus points are silently absent from the result. A count below two is
/// rejected because per-point bearings are interpolated between the start
/// and end angles.
pub(crate) fn decode(frame: &RawFrame, crc: CrcPolicy) -> Result<ScanRecord, DriverError> {
    let bytes = frame.as_bytes();
    if bytes[0] != FRAME_HEADER {
        return Err(DriverError::BadHeader(bytes[0]));
    }
    let point_count = bytes[1] & 0x1F;
    if point_count <= 1 {
        return Err(DriverError::DegenerateGeometry(point_count));
    }
    if crc != CrcPolicy::Off {
        let computed = calc_crc8(&bytes[..FRAME_SIZE - 1]);
        let expected = bytes[FRAME_SIZE - 1];
        if computed != expected {
            if crc == CrcPolicy::Enforce {
                return Err(DriverError::ChecksumMismatch(expected, computed));
            }
            log::warn!(
                "Frame checksum mismatched. Computed = {:02X}, expected = {:02X}.",
                computed,
                expected
            );
        }
    }

    let mut points = Vec::with_capacity(point_count as usize);
    for index in 0..point_count as usize {
        let offset = POINT_AREA_OFFSET + index * POINT_STRIDE;
        if offset + POINT_STRIDE > TRAILER_OFFSET {
            break;
        }
        points.push(Point {
            distance_mm: to_u16_le(bytes[offset], bytes[offset + 1]),
            intensity: bytes[offset + 2],
        });
    }

    Ok(ScanRecord {
        scan_speed: to_u16_le(bytes[2], bytes[3]),
        start_angle: to_u16_le(bytes[4], bytes[5]),
        end_angle: to_u16_le(bytes[TRAILER_OFFSET], bytes[TRAILER_OFFSET + 1]),
        point_count,
        timestamp: to_u16_le(bytes[TRAILER_OFFSET + 2], bytes[TRAILER_OFFSET + 3]),
        crc: bytes[FRAME_SIZE - 1],
        points,
    })
}

pub(crate) fn calc_crc8(data: &[u8]) -> u8 {
    data.iter()
        .fold(0, |crc, byte| CRC_TABLE[(crc ^ byte) as usize])
}
