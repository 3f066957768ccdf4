//! Core data types for the dead reckoning pipeline.
//!
//! Input is an ordered sequence of [`SensorReading`]s at a fixed sample
//! period; the sample index is the only time axis. Output is the mutated
//! reckoner state plus one [`StepEvent`] per detected footstep.

use serde::{Deserialize, Serialize};

use crate::quaternion::Quaternion;
use crate::vector::Vector3;

/// One instantaneous inertial sample.
///
/// The orientation comes from an upstream fusion filter; the acceleration is
/// the raw (gravity included) accelerometer vector in m/s².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub orientation: Quaternion,
    pub acceleration: Vector3,
}

impl SensorReading {
    pub fn new(orientation: Quaternion, acceleration: Vector3) -> Self {
        Self {
            orientation,
            acceleration,
        }
    }

    /// Magnitude of the acceleration vector in m/s².
    pub fn accel_magnitude(&self) -> f32 {
        self.acceleration.norm()
    }
}

/// A footstep detected by the reckoner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepEvent {
    /// Index of the stance sample within the batch passed to the update call.
    pub sample_index: usize,
    /// Weinberg stride length in meters.
    pub stride_length_m: f32,
    /// Heading applied to this step (initial heading + yaw), radians.
    pub heading_rad: f32,
    /// Reckoner position after the displacement was added.
    pub position: Vector3,
}

impl StepEvent {
    pub fn new(sample_index: usize, stride_length_m: f32, heading_rad: f32, position: Vector3) -> Self {
        Self {
            sample_index,
            stride_length_m,
            heading_rad,
            position,
        }
    }

    /// Planar displacement contributed by this step.
    pub fn displacement(&self) -> Vector3 {
        Vector3::new(self.heading_rad.cos(), self.heading_rad.sin(), 0.0) * self.stride_length_m
    }
}

/// Result of one batch update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Steps in increasing time order.
    pub steps: Vec<StepEvent>,
    /// First window start that was not examined. Readings from here on have
    /// to be resubmitted with the next batch.
    pub next_start: usize,
}

impl BatchReport {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Sum of stride lengths in this batch, in meters.
    pub fn distance_m(&self) -> f32 {
        self.steps.iter().map(|s| s.stride_length_m).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
