use clap::Parser;
use rover_driver::{run_driver, DecisionPolicy, DriverConfig};
use std::thread;
use std::time::Duration;

/// Runs the obstacle-avoidance loop: LiDAR frames in, motor commands out.
#[derive(Parser)]
#[command(about = "Drives a rover away from obstacles seen by its LiDAR.")]
struct Args {
    /// Device path of the LiDAR serial port
    #[arg(long, default_value = "/dev/ttyUSB0")]
    lidar_port: String,
    /// Device path of the rover motor controller
    #[arg(long, default_value = "/dev/serial0")]
    rover_port: String,
    /// Detection threshold floor in millimeters
    #[arg(long, default_value_t = 950.0)]
    base_distance: f64,
    /// Mount correction from sensor zero to rover forward, in degrees
    #[arg(long, default_value_t = 90.0)]
    mount_offset: f64,
    /// Gate decisions on return intensity instead of quadrants
    #[arg(long)]
    intensity_gated: bool,
    /// Seconds to run before shutting down cleanly (0 runs until killed)
    #[arg(long, default_value_t = 0)]
    duration: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = DriverConfig {
        base_distance_mm: args.base_distance,
        mount_offset_deg: args.mount_offset,
        policy: if args.intensity_gated {
            DecisionPolicy::IntensityGated
        } else {
            DecisionPolicy::Quadrant
        },
        ..DriverConfig::default()
    };

    let driver_threads = match run_driver(&args.lidar_port, &args.rover_port, config) {
        Ok(threads) => threads,
        Err(e) => {
            eprintln!("Failed to start the driver: {e}");
            std::process::exit(1);
        }
    };

    if args.duration == 0 {
        loop {
            thread::sleep(Duration::from_secs(1));
        }
    }
    thread::sleep(Duration::from_secs(args.duration));
    drop(driver_threads);
}
