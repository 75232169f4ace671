use crate::constants::{FRAME_HEADER, FRAME_SIZE};
use crate::error::DriverError;
use std::io::{ErrorKind, Read};

/// One fixed-length frame as pulled off the wire, header byte included.
pub(crate) struct RawFrame([u8; FRAME_SIZE]);

impl RawFrame {
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
impl From<[u8; FRAME_SIZE]> for RawFrame {
    fn from(bytes: [u8; FRAME_SIZE]) -> Self {
        RawFrame(bytes)
    }
}

/// Blocks until a whole frame is available. Bytes preceding the header are
/// discarded, which resynchronizes the stream after garbage.
pub(crate) fn read_frame<R: Read>(source: &mut R) -> Result<RawFrame, DriverError> {
    seek_header(source)?;
    let mut frame = [0u8; FRAME_SIZE];
    frame[0] = FRAME_HEADER;
    let mut filled = 1;
    while filled < FRAME_SIZE {
        match source.read(&mut frame[filled..]) {
            Ok(0) => return Err(DriverError::IncompleteFrame),
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(RawFrame(frame))
}

fn seek_header<R: Read>(source: &mut R) -> Result<(), DriverError> {
    let mut byte = [0u8; 1];
    loop {
        match source.read(&mut byte) {
            Ok(0) => return Err(DriverError::IncompleteFrame),
            Ok(_) if byte[0] == FRAME_HEADER => return Ok(()),
            Ok(_) => continue,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_frame_resynchronizes_after_garbage() {
        let mut stream = vec![0x00, 0xAA, 0x55, 0xFF, 0x13];
        let mut body: Vec<u8> = (1u8..22).collect();
        body[4] = 0x54; // a header byte inside the body must not desync
        stream.push(0x54);
        stream.extend(&body);

        let mut cursor = Cursor::new(stream);
        let frame = read_frame(&mut cursor).unwrap();
        assert_eq!(frame.as_bytes()[0], 0x54);
        assert_eq!(&frame.as_bytes()[1..], body.as_slice());

        // Exactly one frame was present.
        assert!(matches!(
            read_frame(&mut cursor),
            Err(DriverError::IncompleteFrame)
        ));
    }

    #[test]
    fn test_read_frame_eof_before_header() {
        let mut cursor = Cursor::new(vec![0x00u8; 40]);
        assert!(matches!(
            read_frame(&mut cursor),
            Err(DriverError::IncompleteFrame)
        ));
    }

    #[test]
    fn test_read_frame_eof_mid_frame() {
        let mut stream = vec![0x54u8];
        stream.extend([0u8; 10]);
        let mut cursor = Cursor::new(stream);
        assert!(matches!(
            read_frame(&mut cursor),
            Err(DriverError::IncompleteFrame)
        ));
    }
}
