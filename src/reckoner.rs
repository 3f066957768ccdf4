//! Pedestrian Dead Reckoning (PDR) Module.
//!
//! Turns a batch of orientation + acceleration readings into footsteps and
//! accumulates them into a 2D position:
//! - Stance detection over sliding search windows
//! - Weinberg stride length per step
//! - Heading from the orientation yaw at the stance sample
//!
//! The reckoner owns its state and mutates it in place. Callers sharing one
//! reckoner across threads must serialize access themselves; there is no
//! internal locking.

use tracing::{debug, trace, warn};

use crate::config::ReckonerConfig;
use crate::error::{ReckonerError, Result};
use crate::stance_detection::StanceDetector;
use crate::types::{BatchReport, SensorReading, StepEvent};
use crate::vector::Vector3;

/// Position and heading tracker driven by detected footsteps.
#[derive(Debug, Clone)]
pub struct DeadReckoner {
    config: ReckonerConfig,

    // World-frame cumulative displacement (z stays 0)
    position: Vector3,
    // Reference bearing, set by the owner
    initial_heading: f32,
    // initial_heading + yaw at the last step
    current_heading: f32,

    step_count: u64,
    total_distance_m: f32,
}

impl DeadReckoner {
    /// Reckoner at the origin with zero headings and the default config.
    pub fn new() -> Self {
        Self::from_parts(ReckonerConfig::default())
    }

    /// Reckoner with a custom, validated config.
    pub fn with_config(config: ReckonerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: ReckonerConfig) -> Self {
        Self {
            config,
            position: Vector3::ZERO,
            initial_heading: 0.0,
            current_heading: 0.0,
            step_count: 0,
            total_distance_m: 0.0,
        }
    }

    pub fn config(&self) -> &ReckonerConfig {
        &self.config
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn initial_heading(&self) -> f32 {
        self.initial_heading
    }

    /// Set the reference bearing (radians) that step yaw is added to.
    pub fn set_initial_heading(&mut self, heading_rad: f32) {
        self.initial_heading = heading_rad;
    }

    pub fn current_heading(&self) -> f32 {
        self.current_heading
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn total_distance(&self) -> f32 {
        self.total_distance_m
    }

    /// Return to the origin with zero headings and counters.
    pub fn reset(&mut self) {
        self.position.zero();
        self.initial_heading = 0.0;
        self.current_heading = 0.0;
        self.step_count = 0;
        self.total_distance_m = 0.0;
    }

    /// Process one batch of readings spaced `sample_period` seconds apart.
    ///
    /// Scans the batch with a sliding search window. Each window yields at
    /// most one step; for every step the heading is set from the yaw at the
    /// stance sample and the stride is added to the position. After a step
    /// the next window starts just before the stance, otherwise the scan
    /// skips ahead past the region already examined.
    ///
    /// Readings that do not fill a whole search window at the end of the
    /// batch are not examined; [`BatchReport::next_start`] tells the caller
    /// where to resume.
    ///
    /// # Errors
    ///
    /// - [`ReckonerError::InvalidParameter`] if `sample_period` is not a
    ///   positive finite number or yields a degenerate window geometry.
    /// - [`ReckonerError::InsufficientSamples`] if `readings` is shorter than
    ///   one search window.
    ///
    /// State is untouched when an error is returned.
    pub fn update_position_and_heading(
        &mut self,
        readings: &[SensorReading],
        sample_period: f32,
    ) -> Result<BatchReport> {
        let geometry = self.config.window_geometry(sample_period)?;
        let search_size = geometry.search_size;
        let sample_window = geometry.sample_window;

        if readings.len() < search_size {
            warn!(
                needed = search_size,
                got = readings.len(),
                "Batch shorter than one search window"
            );
            return Err(ReckonerError::InsufficientSamples {
                needed: search_size,
                got: readings.len(),
            });
        }

        let mut detector = StanceDetector::from_config(&self.config, geometry);
        let stride_model = self.config.stride_model();
        let mut steps = Vec::new();
        let mut start = 0;

        while start <= readings.len() - search_size {
            let window = &readings[start..start + search_size];

            match detector.scan(window) {
                Some(stance) => {
                    let stride = stride_model.stride_length(
                        stance,
                        detector.accel_norms(),
                        sample_window,
                        sample_period,
                    );

                    let index = start + stance;
                    let orientation = self.config.frame.apply(&readings[index].orientation);
                    self.current_heading = self.initial_heading + orientation.yaw();

                    let mut displacement =
                        Vector3::new(self.current_heading.cos(), self.current_heading.sin(), 0.0);
                    displacement.scalar_multiply(stride);
                    self.position.add(&displacement);

                    self.step_count += 1;
                    self.total_distance_m += stride;

                    debug!(
                        index,
                        stride_m = stride,
                        heading_rad = self.current_heading,
                        x = self.position.x,
                        y = self.position.y,
                        "Step detected"
                    );
                    steps.push(StepEvent::new(index, stride, self.current_heading, self.position));

                    start += stance - sample_window;
                }
                None => {
                    trace!(start, "No stance in window");
                    start += geometry.idle_advance();
                }
            }
        }

        Ok(BatchReport {
            steps,
            next_start: start,
        })
    }
}

impl Default for DeadReckoner {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quaternion::Quaternion;

    const GRAVITY: f32 = 9.81;

    fn flat_readings(count: usize) -> Vec<SensorReading> {
        vec![SensorReading::new(Quaternion::identity(), Vector3::new(0.0, 0.0, GRAVITY)); count]
    }

    #[test]
    fn test_new_reckoner_at_origin() {
        let reckoner = DeadReckoner::new();
        assert!(reckoner.position().equals(&Vector3::ZERO));
        assert_eq!(reckoner.initial_heading(), 0.0);
        assert_eq!(reckoner.current_heading(), 0.0);
        assert_eq!(reckoner.step_count(), 0);
    }

    #[test]
    fn test_rejects_non_positive_period() {
        let mut reckoner = DeadReckoner::new();
        let readings = flat_readings(400);

        for period in [0.0f32, -0.01] {
            let err = reckoner.update_position_and_heading(&readings, period);
            assert!(matches!(err, Err(ReckonerError::InvalidParameter(_))));
        }
        assert!(reckoner.position().equals(&Vector3::ZERO));
    }

    #[test]
    fn test_rejects_short_batch() {
        let mut reckoner = DeadReckoner::new();
        let readings = flat_readings(199);

        match reckoner.update_position_and_heading(&readings, 0.01) {
            Err(ReckonerError::InsufficientSamples { needed, got }) => {
                assert_eq!(needed, 200);
                assert_eq!(got, 199);
            }
            other => panic!("expected InsufficientSamples, got {:?}", other),
        }
    }

    #[test]
    fn test_flat_batch_moves_nothing() {
        let mut reckoner = DeadReckoner::new();
        let report = reckoner
            .update_position_and_heading(&flat_readings(600), 0.01)
            .unwrap();

        assert!(report.is_empty());
        assert!(reckoner.position().equals(&Vector3::ZERO));
        assert_eq!(reckoner.current_heading(), 0.0);
        // Windows start at 0, 139, 278; 417 > 600 - 200.
        assert_eq!(report.next_start, 417);
    }

    #[test]
    fn test_with_config_validates() {
        let config = ReckonerConfig {
            weinberg_k: -1.0,
            ..ReckonerConfig::default()
        };
        assert!(matches!(
            DeadReckoner::with_config(config),
            Err(ReckonerError::Config(_))
        ));
        assert!(DeadReckoner::with_config(ReckonerConfig::default()).is_ok());
    }

    #[test]
    fn test_reset_returns_to_origin() {
        let mut reckoner = DeadReckoner::new();
        let mut readings = flat_readings(80);
        readings[12].acceleration.z += 15.0;

        reckoner.set_initial_heading(1.0);
        reckoner.update_position_and_heading(&readings, 0.05).unwrap();
        assert_eq!(reckoner.step_count(), 1);

        reckoner.reset();
        assert!(reckoner.position().equals(&Vector3::ZERO));
        assert_eq!(reckoner.initial_heading(), 0.0);
        assert_eq!(reckoner.current_heading(), 0.0);
        assert_eq!(reckoner.step_count(), 0);
        assert_eq!(reckoner.total_distance(), 0.0);
    }
}
