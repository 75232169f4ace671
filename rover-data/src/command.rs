#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Motor directive in the rover controller's wire vocabulary.
///
/// Serializes to the controller's JSON shape: `{"T":1,"L":100,"R":100}`
/// for drive commands, `{"T":0}` for an emergency stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotorCommand {
    /// Mode flag. 1 drives the motors, 0 stops them.
    #[cfg_attr(feature = "serde", serde(rename = "T"))]
    pub mode: u8,
    /// Left motor magnitude in -255..=255. Negative runs the motor backwards.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "L", default, skip_serializing_if = "Option::is_none")
    )]
    pub left: Option<i16>,
    /// Right motor magnitude in -255..=255.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "R", default, skip_serializing_if = "Option::is_none")
    )]
    pub right: Option<i16>,
}

impl MotorCommand {
    pub fn drive(left: i16, right: i16) -> MotorCommand {
        MotorCommand {
            mode: 1,
            left: Some(left),
            right: Some(right),
        }
    }

    pub fn halt() -> MotorCommand {
        MotorCommand {
            mode: 0,
            left: None,
            right: None,
        }
    }
}
