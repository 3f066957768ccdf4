//! Reckoner configuration.
//!
//! Defaults reproduce the classic parameter set: a 150 ms stance half-window,
//! a 2 s search window, band thresholds of 2.0 and 1.0 m/s² and a Weinberg
//! constant of 0.6. Every field can be overridden from TOML; missing fields
//! fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ConfigError, ReckonerError};
use crate::frame::FrameTransform;
use crate::stride::StrideModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReckonerConfig {
    /// Half-width of the local statistics window, in seconds.
    pub stance_window_s: f32,
    /// Length of one detection scan, in seconds.
    pub search_window_s: f32,
    /// Deviation above which a sample counts as active (swing), m/s².
    pub active_threshold: f32,
    /// Deviation below which a sample counts as stance, m/s².
    pub stance_threshold: f32,
    /// Weinberg stride constant.
    pub weinberg_k: f32,
    /// Stride filter time constant, in sample periods.
    pub filter_time_constant_periods: f32,
    /// Transform applied to orientation before yaw extraction.
    pub frame: FrameTransform,
}

impl Default for ReckonerConfig {
    fn default() -> Self {
        Self {
            stance_window_s: 30.0 * 0.005,
            search_window_s: 2.0,
            active_threshold: 2.0,
            stance_threshold: 1.0,
            weinberg_k: 0.6,
            filter_time_constant_periods: 2.0,
            frame: FrameTransform::ReflectToProper,
        }
    }
}

/// Window sizes in samples for one sample period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    /// Half-width of the local statistics window.
    pub sample_window: usize,
    /// Samples scanned per detection pass.
    pub search_size: usize,
}

impl WindowGeometry {
    /// How far the scan advances when a window holds no step.
    pub fn idle_advance(&self) -> usize {
        self.search_size - 4 * self.sample_window - 1
    }
}

impl ReckonerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: ReckonerConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        info!(?path, "Loaded reckoner config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("stance_window_s", self.stance_window_s),
            ("search_window_s", self.search_window_s),
            ("active_threshold", self.active_threshold),
            ("stance_threshold", self.stance_threshold),
            ("weinberg_k", self.weinberg_k),
            ("filter_time_constant_periods", self.filter_time_constant_periods),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        if self.stance_threshold >= self.active_threshold {
            return Err(ConfigError::Invalid(format!(
                "stance_threshold ({}) must be below active_threshold ({})",
                self.stance_threshold, self.active_threshold
            )));
        }
        Ok(())
    }

    pub fn stride_model(&self) -> StrideModel {
        StrideModel::new(self.weinberg_k, self.filter_time_constant_periods)
    }

    /// Window sizes for `sample_period` seconds per sample.
    ///
    /// Rejects non-positive periods and geometries where the idle advance
    /// would not move the scan forward.
    pub fn window_geometry(&self, sample_period: f32) -> Result<WindowGeometry, ReckonerError> {
        if !sample_period.is_finite() || sample_period <= 0.0 {
            return Err(ReckonerError::InvalidParameter(format!(
                "sample period must be finite and positive, got {sample_period}"
            )));
        }

        let stance_samples = (self.stance_window_s / sample_period).round();
        let search_samples = (self.search_window_s / sample_period).round();
        if !stance_samples.is_finite() || !search_samples.is_finite() {
            return Err(ReckonerError::InvalidParameter(format!(
                "sample period {sample_period} gives an unbounded window"
            )));
        }

        let sample_window = stance_samples as usize;
        let search_size = search_samples as usize;

        let min_search = sample_window
            .checked_mul(4)
            .and_then(|v| v.checked_add(2))
            .ok_or_else(|| {
                ReckonerError::InvalidParameter(format!(
                    "stance window of {sample_window} samples is too large"
                ))
            })?;
        if search_size < min_search {
            return Err(ReckonerError::InvalidParameter(format!(
                "search window of {search_size} samples cannot hold a stance window of {sample_window}"
            )));
        }

        Ok(WindowGeometry {
            sample_window,
            search_size,
        })
    }
}
