use crate::config::{DecisionPolicy, DriverConfig};
use crate::scan::ScanGeometry;
use rover_data::{Action, ScanRecord};

/// Nearest return under the detection threshold, in rover coordinates.
struct Obstacle {
    distance_mm: u16,
    angle_deg: f64,
    intensity: u8,
}

/// Reduces one frame to a movement directive. Pure and deterministic.
pub(crate) fn decide(scan: &ScanRecord, margin_mm: f64, config: &DriverConfig) -> Action {
    let obstacle = match nearest_obstacle(scan, margin_mm, config.mount_offset_deg) {
        Some(obstacle) => obstacle,
        None => return Action::Forward,
    };
    match config.policy {
        DecisionPolicy::Quadrant => quadrant_action(&obstacle),
        DecisionPolicy::IntensityGated => {
            intensity_gated_action(&obstacle, config.intensity_threshold)
        }
    }
}

fn nearest_obstacle(scan: &ScanRecord, margin_mm: f64, mount_offset_deg: f64) -> Option<Obstacle> {
    let mut nearest: Option<Obstacle> = None;
    for (index, point) in scan.points.iter().enumerate() {
        // Zero distance marks an invalid reading on this device.
        if point.distance_mm == 0 || (point.distance_mm as f64) >= margin_mm {
            continue;
        }
        if nearest
            .as_ref()
            .is_some_and(|o| o.distance_mm <= point.distance_mm)
        {
            continue;
        }
        let angle_deg = (scan.point_angle_deg(index) + mount_offset_deg).rem_euclid(360.);
        nearest = Some(Obstacle {
            distance_mm: point.distance_mm,
            angle_deg,
            intensity: point.intensity,
        });
    }
    nearest
}

fn quadrant_action(obstacle: &Obstacle) -> Action {
    match obstacle.angle_deg {
        a if (45. ..=135.).contains(&a) => Action::TurnRight,
        a if (225. ..=315.).contains(&a) => Action::TurnLeft,
        _ => Action::Reverse,
    }
}

fn intensity_gated_action(obstacle: &Obstacle, threshold: u8) -> Action {
    if obstacle.intensity <= threshold {
        // A weak return is not trustworthy enough to steer around.
        return Action::Stop;
    }
    if (90. ..=270.).contains(&obstacle.angle_deg) {
        Action::TurnLeft
    } else {
        Action::TurnRight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rover_data::Point;

    const MARGIN_MM: f64 = 950.;

    fn scan_of(start_angle: u16, end_angle: u16, points: &[(u16, u8)]) -> ScanRecord {
        ScanRecord {
            scan_speed: 0,
            start_angle,
            end_angle,
            point_count: points.len() as u8,
            timestamp: 0,
            crc: 0,
            points: points
                .iter()
                .map(|&(distance_mm, intensity)| Point {
                    distance_mm,
                    intensity,
                })
                .collect(),
        }
    }

    fn config() -> DriverConfig {
        DriverConfig::default()
    }

    #[test]
    fn test_clear_path_moves_forward() {
        let scan = scan_of(0, 18000, &[(2000, 30), (3000, 30), (950, 30)]);
        assert_eq!(decide(&scan, MARGIN_MM, &config()), Action::Forward);
    }

    #[test]
    fn test_zero_distance_is_not_an_obstacle() {
        let scan = scan_of(0, 18000, &[(0, 30), (0, 200)]);
        assert_eq!(decide(&scan, MARGIN_MM, &config()), Action::Forward);
    }

    #[test]
    fn test_obstacle_to_the_right_front_turns_right() {
        // Sensor bearing 0, rover bearing 90 with the default +90 mount.
        let scan = scan_of(0, 18000, &[(1, 30), (2000, 30)]);
        assert_eq!(decide(&scan, MARGIN_MM, &config()), Action::TurnRight);
    }

    #[test]
    fn test_obstacle_to_the_left_front_turns_left() {
        // Sensor bearing 180 at index 1, rover bearing 270.
        let scan = scan_of(0, 18000, &[(2000, 30), (1, 30)]);
        assert_eq!(decide(&scan, MARGIN_MM, &config()), Action::TurnLeft);
    }

    #[test]
    fn test_obstacle_dead_ahead_reverses() {
        // Sensor bearing 270, rover bearing 0.
        let scan = scan_of(27000, 28000, &[(1, 30), (2000, 30)]);
        assert_eq!(decide(&scan, MARGIN_MM, &config()), Action::Reverse);
    }

    #[test]
    fn test_nearest_point_wins() {
        // Both points sit under the margin; the closer one at sensor
        // bearing 180 (rover 270) decides.
        let scan = scan_of(0, 18000, &[(800, 30), (300, 30)]);
        assert_eq!(decide(&scan, MARGIN_MM, &config()), Action::TurnLeft);
    }

    #[test]
    fn test_intensity_gate_stops_on_weak_return() {
        let config = DriverConfig {
            policy: DecisionPolicy::IntensityGated,
            ..DriverConfig::default()
        };
        let scan = scan_of(0, 18000, &[(500, 10), (2000, 30)]);
        assert_eq!(decide(&scan, MARGIN_MM, &config), Action::Stop);
    }

    #[test]
    fn test_intensity_gate_steers_around_strong_return() {
        let config = DriverConfig {
            policy: DecisionPolicy::IntensityGated,
            ..DriverConfig::default()
        };

        // Rover bearing 180 -> left.
        let scan = scan_of(9000, 27000, &[(500, 40), (2000, 40)]);
        assert_eq!(decide(&scan, MARGIN_MM, &config), Action::TurnLeft);

        // Rover bearing 0 -> right.
        let scan = scan_of(27000, 28000, &[(500, 40), (2000, 40)]);
        assert_eq!(decide(&scan, MARGIN_MM, &config), Action::TurnRight);
    }

    #[test]
    fn test_mount_offset_rotates_the_quadrants() {
        // With a +180 mount the sensor bearing 0 lands behind the rover.
        let config = DriverConfig {
            mount_offset_deg: 180.,
            ..DriverConfig::default()
        };
        let scan = scan_of(0, 18000, &[(1, 30), (2000, 30)]);
        assert_eq!(decide(&scan, MARGIN_MM, &config), Action::Reverse);
    }
}
