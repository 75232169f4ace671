use rover_data::{Action, MotorCommand};

/// Obstacle classification strategy. Exactly one is active per driver
/// instance; the two are never combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecisionPolicy {
    /// Steer away from the quadrant holding the nearest obstacle, reversing
    /// when it sits directly ahead or behind.
    #[default]
    Quadrant,
    /// Steer around obstacles with a strong reflection; stop on weak returns
    /// instead of committing to a turn.
    IntensityGated,
}

/// Checksum handling for incoming frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrcPolicy {
    /// Skip the checksum computation entirely.
    Off,
    /// Compute and log mismatches, but keep the frame.
    #[default]
    Advisory,
    /// Reject frames whose checksum does not match.
    Enforce,
}

/// Motor magnitudes for each drive directive, in the rover's -255..=255 range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotorSpeeds {
    pub forward: (i16, i16),
    pub reverse: (i16, i16),
    pub turn_left: (i16, i16),
    pub turn_right: (i16, i16),
}

impl Default for MotorSpeeds {
    fn default() -> MotorSpeeds {
        MotorSpeeds {
            forward: (100, 100),
            reverse: (-125, -125),
            turn_left: (-255, 255),
            turn_right: (255, -255),
        }
    }
}

/// Tunables for one driver instance. The caller owns where these values come
/// from; the driver never reads configuration from anywhere else.
#[derive(Clone, Debug)]
pub struct DriverConfig {
    /// Detection threshold floor (in mm).
    pub base_distance_mm: f64,
    /// Correction from the sensor's zero bearing to the rover's forward
    /// direction (in degrees). +90 for a 9 o'clock mount, +180 for 6 o'clock.
    pub mount_offset_deg: f64,
    pub policy: DecisionPolicy,
    /// Returns at or below this intensity count as unreliable under the
    /// intensity-gated policy.
    pub intensity_threshold: u8,
    pub crc: CrcPolicy,
    /// Pause between command emissions in the control loop (in ms).
    pub control_tick_ms: u64,
    pub speeds: MotorSpeeds,
    pub lidar_baud_rate: u32,
    pub rover_baud_rate: u32,
}

impl Default for DriverConfig {
    fn default() -> DriverConfig {
        DriverConfig {
            base_distance_mm: 950.,
            mount_offset_deg: 90.,
            policy: DecisionPolicy::default(),
            intensity_threshold: 20,
            crc: CrcPolicy::default(),
            control_tick_ms: 50,
            speeds: MotorSpeeds::default(),
            lidar_baud_rate: 230_400,
            rover_baud_rate: 1_000_000,
        }
    }
}

impl DriverConfig {
    /// Wire command for a directive, using the configured magnitudes.
    pub fn command_for(&self, action: Action) -> MotorCommand {
        let (left, right) = match action {
            Action::Forward => self.speeds.forward,
            Action::Reverse => self.speeds.reverse,
            Action::TurnLeft => self.speeds.turn_left,
            Action::TurnRight => self.speeds.turn_right,
            Action::Stop => return MotorCommand::halt(),
        };
        MotorCommand::drive(left, right)
    }
}
