/// Walk replay example: Custom config, reference bearing and streaming batches
use dead_reckoner::{DeadReckoner, Quaternion, ReckonerConfig, SensorReading, Vector3};

const CONFIG: &str = r#"
# Taller walker: longer strides for the same bounce
weinberg_k = 0.65
frame = "reflect_to_proper"
"#;

fn main() {
    println!("=== Dead Reckoner: Walk Replay Example ===\n");

    let config = match ReckonerConfig::from_toml_str(CONFIG) {
        Ok(config) => config,
        Err(e) => {
            println!("Bad config: {}", e);
            return;
        }
    };
    let mut reckoner = match DeadReckoner::with_config(config) {
        Ok(reckoner) => reckoner,
        Err(e) => {
            println!("Bad config: {}", e);
            return;
        }
    };

    // Start facing north-east
    reckoner.set_initial_heading(std::f32::consts::FRAC_PI_4);

    // 50 Hz stream, a step every 0.5 s, slowly turning
    let sample_period = 0.02;
    let stream: Vec<SensorReading> = (0..750)
        .map(|i| {
            let turn = -0.001 * i as f32;
            let orientation = Quaternion::from_axis_angle(&Vector3::new(1.0, 0.0, 0.0), turn);
            let bounce = if i >= 20 && i % 25 == 0 { 10.0 } else { 0.0 };
            SensorReading::new(orientation, Vector3::new(0.0, 0.0, 9.81 + bounce))
        })
        .collect();

    // Deliver in 3-second packets, carrying unexamined readings forward
    let mut pending: Vec<SensorReading> = Vec::new();
    for packet in stream.chunks(150) {
        pending.extend_from_slice(packet);
        if let Ok(report) = reckoner.update_position_and_heading(&pending, sample_period) {
            println!(
                "Packet: {} steps, {:.2} m, carry {} readings",
                report.step_count(),
                report.distance_m(),
                pending.len() - report.next_start
            );
            pending.drain(..report.next_start);
        }
    }

    let position = reckoner.position();
    println!("\n=== Summary ===");
    println!("Steps: {}", reckoner.step_count());
    println!("Distance: {:.2} m", reckoner.total_distance());
    println!("Position: ({:.2}, {:.2}) m", position.x, position.y);
    println!("Heading: {:.1}°", reckoner.current_heading().to_degrees());
}
