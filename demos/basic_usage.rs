/// Basic usage example: Feed one batch of readings, read back position and heading
use dead_reckoner::{DeadReckoner, Quaternion, SensorReading, Vector3};

fn main() {
    println!("=== Dead Reckoner: Basic Example ===\n");

    // 100 Hz sampling: stance window of 15 samples, search window of 200
    let sample_period = 0.01;
    let mut reckoner = DeadReckoner::new();

    // Simulate 4 seconds of walking: one heel strike every 0.6 s
    let readings: Vec<SensorReading> = (0..400)
        .map(|i| {
            let bounce = if i >= 40 && i % 60 == 0 { 12.0 } else { 0.0 };
            SensorReading::new(Quaternion::identity(), Vector3::new(0.0, 0.0, 9.81 + bounce))
        })
        .collect();

    println!("Processing {} readings...\n", readings.len());

    match reckoner.update_position_and_heading(&readings, sample_period) {
        Ok(report) => {
            for (n, step) in report.steps.iter().enumerate() {
                println!(
                    "Step {}: sample={} stride={:.3}m heading={:.3}rad",
                    n + 1,
                    step.sample_index,
                    step.stride_length_m,
                    step.heading_rad
                );
            }
            println!(
                "\nReadings from index {} onward need the next batch",
                report.next_start
            );
        }
        Err(e) => println!("Batch rejected: {}", e),
    }

    let position = reckoner.position();
    println!("\n=== Summary ===");
    println!("Steps: {}", reckoner.step_count());
    println!("Position: ({:.2}, {:.2}) m", position.x, position.y);
    println!("Heading: {:.3} rad", reckoner.current_heading());
}
