//! Stride length estimation with the Weinberg model.
//!
//! Stride length correlates with the amplitude of the vertical bounce around
//! a footstep: `stride = K * (a_max - a_min)^(1/4)`, where the extrema are
//! taken over a low-pass filtered acceleration magnitude in a small window
//! centered on the stance sample.
//!
//! Reference: Weinberg, H. (2002). "Using the ADXL202 in Pedometer and
//! Personal Navigation Applications." Analog Devices AN-602.

use serde::{Deserialize, Serialize};

use crate::signal::{low_pass_filter, windowed_max, windowed_min};

/// Empirical Weinberg constant.
pub const WEINBERG_K: f32 = 0.6;

/// Low-pass time constant as a multiple of the sample period.
pub const DEFAULT_TIME_CONSTANT_PERIODS: f32 = 2.0;

/// Parameters of the Weinberg stride model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrideModel {
    /// Scale factor K.
    pub k: f32,
    /// Filter time constant in sample periods.
    pub time_constant_periods: f32,
}

impl Default for StrideModel {
    fn default() -> Self {
        Self {
            k: WEINBERG_K,
            time_constant_periods: DEFAULT_TIME_CONSTANT_PERIODS,
        }
    }
}

impl StrideModel {
    pub fn new(k: f32, time_constant_periods: f32) -> Self {
        Self {
            k,
            time_constant_periods,
        }
    }

    /// Stride length in meters for the step at `stance`.
    ///
    /// Filters the whole of `norms`, then applies the model to the extrema of
    /// the filtered series over `[stance - window, stance + window]`.
    ///
    /// # Panics
    ///
    /// Panics if the window does not fit inside `norms`.
    pub fn stride_length(&self, stance: usize, norms: &[f32], window: usize, period: f32) -> f32 {
        let mut filtered = vec![0.0f32; norms.len()];
        low_pass_filter(norms, &mut filtered, period, period * self.time_constant_periods);

        let lo = stance - window;
        let hi = stance + window;
        let amplitude = windowed_max(&filtered, lo, hi) - windowed_min(&filtered, lo, hi);
        self.k * amplitude.sqrt().sqrt()
    }
}

/// Weinberg stride length with the default model (K = 0.6, tc = 2 periods).
pub fn weinberg_stride_length(stance: usize, norms: &[f32], window: usize, period: f32) -> f32 {
    StrideModel::default().stride_length(stance, norms, window, period)
}
