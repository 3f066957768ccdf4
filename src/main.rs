//! Pedestrian Dead Reckoning demo.
//!
//! Replays a synthetic walk through the reckoner in streaming batches and
//! prints the reconstructed track. Pass a TOML config path as the first
//! argument to override the defaults.
//!
//! This is the entry point for standalone binaries. For library use, see lib.rs.

use std::f32::consts::PI;

use dead_reckoner::{DeadReckoner, Quaternion, ReckonerConfig, ReckonerError, SensorReading, Vector3};
use tracing::{info, warn};

const SAMPLE_PERIOD: f32 = 0.01;
const STEP_INTERVAL: usize = 55;
const BATCH_SIZE: usize = 250;

/// Ten seconds of walking at 100 Hz, turning a quarter circle to the right.
fn synthetic_walk() -> Vec<SensorReading> {
    let count = 1000;
    (0..count)
        .map(|i| {
            let turn = (PI / 2.0) * i as f32 / count as f32;
            let orientation = Quaternion::from_axis_angle(&Vector3::new(1.0, 0.0, 0.0), turn);
            let bounce = if i >= 50 && i % STEP_INTERVAL == 0 { 12.0 } else { 0.0 };
            SensorReading::new(orientation, Vector3::new(0.0, 0.0, 9.81 + bounce))
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dead_reckoner=info".into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ReckonerConfig::load(&path).unwrap_or_else(|e| {
            warn!(?e, "Failed to load config, using defaults");
            ReckonerConfig::default()
        }),
        None => ReckonerConfig::default(),
    };

    let mut reckoner = match DeadReckoner::with_config(config) {
        Ok(reckoner) => reckoner,
        Err(e) => {
            warn!(?e, "Invalid config, using defaults");
            DeadReckoner::new()
        }
    };

    println!("Pedestrian Dead Reckoner v{}", env!("CARGO_PKG_VERSION"));

    let walk = synthetic_walk();
    let mut pending: Vec<SensorReading> = Vec::new();

    for chunk in walk.chunks(BATCH_SIZE) {
        pending.extend_from_slice(chunk);

        match reckoner.update_position_and_heading(&pending, SAMPLE_PERIOD) {
            Ok(report) => {
                for step in &report.steps {
                    println!(
                        "step: stride={:.3}m heading={:+.1}° position=({:.2}, {:.2})",
                        step.stride_length_m,
                        step.heading_rad.to_degrees(),
                        step.position.x,
                        step.position.y,
                    );
                }
                pending.drain(..report.next_start);
            }
            Err(ReckonerError::InsufficientSamples { .. }) => continue,
            Err(e) => {
                warn!(?e, "Batch rejected");
                return;
            }
        }
    }

    let position = reckoner.position();
    info!(
        steps = reckoner.step_count(),
        distance_m = reckoner.total_distance(),
        x = position.x,
        y = position.y,
        "Walk complete"
    );
    println!(
        "Total: {} steps, {:.2} m, final position ({:.2}, {:.2})",
        reckoner.step_count(),
        reckoner.total_distance(),
        position.x,
        position.y
    );
}
