//! Stance Detection Module.
//!
//! Finds the first foot strike inside one search window of readings.
//!
//! The detector works on the acceleration magnitude. Around every sample it
//! measures how far the signal wanders from its own local mean, then sorts
//! samples into two bands:
//! - the active band, set while the deviation exceeds the active threshold
//!   (swing, heel strike)
//! - the stance band, set while the deviation stays below the stance
//!   threshold (foot flat on the ground)
//!
//! A stance is declared at the first falling edge of the active band that is
//! followed, within one stance window, by a stance-band sample.
//!
//! The four scratch series are owned by the detector and sized to one search
//! window. They are re-filled on every scan; nothing carries over between
//! windows.

use crate::config::{ReckonerConfig, WindowGeometry};
use crate::signal::{compute_local_means, windowed_deviation, windowed_max};
use crate::types::SensorReading;

/// Two-threshold stance detector over fixed-size windows.
#[derive(Debug, Clone)]
pub struct StanceDetector {
    geometry: WindowGeometry,
    active_threshold: f32,
    stance_threshold: f32,

    accel_norms: Vec<f32>,
    local_means: Vec<f32>,
    active_band: Vec<f32>,
    stance_band: Vec<f32>,
}

impl StanceDetector {
    pub fn new(geometry: WindowGeometry, active_threshold: f32, stance_threshold: f32) -> Self {
        let size = geometry.search_size;
        Self {
            geometry,
            active_threshold,
            stance_threshold,
            accel_norms: vec![0.0; size],
            local_means: vec![0.0; size],
            active_band: vec![0.0; size],
            stance_band: vec![0.0; size],
        }
    }

    pub fn from_config(config: &ReckonerConfig, geometry: WindowGeometry) -> Self {
        Self::new(geometry, config.active_threshold, config.stance_threshold)
    }

    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    /// Scan one window and return the window-relative index of the first
    /// stance, if any.
    ///
    /// Returns `None` without touching the buffers if `window` is shorter
    /// than the search size. Extra readings past the search size are ignored.
    pub fn scan(&mut self, window: &[SensorReading]) -> Option<usize> {
        let size = self.geometry.search_size;
        let w = self.geometry.sample_window;
        if window.len() < size {
            return None;
        }

        for (norm, reading) in self.accel_norms.iter_mut().zip(&window[..size]) {
            *norm = reading.accel_magnitude();
        }

        self.local_means.fill(0.0);
        compute_local_means(&self.accel_norms, &mut self.local_means, w);

        self.active_band.fill(0.0);
        self.stance_band.fill(0.0);
        for i in 2 * w..size - 2 * w {
            let sdev = windowed_deviation(&self.accel_norms, &self.local_means, i, w);
            if sdev > self.active_threshold {
                self.active_band[i] = self.active_threshold;
            }
            if sdev < self.stance_threshold {
                self.stance_band[i] = self.stance_threshold;
            }
        }

        (2 * w + 1..size - 2 * w).find(|&i| {
            self.active_band[i - 1] > self.active_band[i]
                && windowed_max(&self.stance_band, i, i + w) == self.stance_threshold
        })
    }

    /// Acceleration magnitudes of the last scanned window.
    pub fn accel_norms(&self) -> &[f32] {
        &self.accel_norms
    }

    /// Local means of the last scanned window. Only
    /// `[sample_window, search_size - sample_window)` holds computed values.
    pub fn local_means(&self) -> &[f32] {
        &self.local_means
    }

    /// Active band of the last scanned window: the active threshold where
    /// set, zero elsewhere.
    pub fn active_band(&self) -> &[f32] {
        &self.active_band
    }

    /// Stance band of the last scanned window: the stance threshold where
    /// set, zero elsewhere.
    pub fn stance_band(&self) -> &[f32] {
        &self.stance_band
    }
}

// ============================================================================
// TESTS
// ============================================================================
