//! Pedestrian Dead Reckoning Library
//!
//! Estimates a walker's 2D position and heading from a stream of inertial
//! samples, each an orientation quaternion plus an acceleration vector taken
//! at a fixed sample period.
//!
//! # Pipeline
//!
//! - **Stance detection**: windowed deviation of the acceleration magnitude
//!   around its local mean, thresholded into an active band and a stance
//!   band. A foot strike is the first fall out of the active band followed
//!   by a quiet stance sample.
//! - **Stride length**: Weinberg model over the low-pass filtered magnitude
//!   around the stance sample.
//! - **Heading**: yaw of the (frame-corrected) orientation at the stance
//!   sample, added to the owner's reference bearing.
//! - **Integration**: each step adds `stride * (cos h, sin h, 0)` to the
//!   position.
//!
//! The library does not fuse sensors, correct drift against external
//! references or handle variable sample rates. Orientation must come from
//! an upstream fusion filter.
//!
//! # Example
//!
//! ```
//! use dead_reckoner::{DeadReckoner, Quaternion, SensorReading, Vector3};
//!
//! let mut reckoner = DeadReckoner::new();
//! let still = SensorReading::new(Quaternion::identity(), Vector3::new(0.0, 0.0, 9.81));
//! let readings = vec![still; 400];
//!
//! let report = reckoner.update_position_and_heading(&readings, 0.01).unwrap();
//! assert!(report.steps.is_empty());
//! assert_eq!(reckoner.position(), Vector3::ZERO);
//! ```

pub mod config;
pub mod error;
pub mod frame;
pub mod quaternion;
pub mod reckoner;
pub mod signal;
pub mod stance_detection;
pub mod stride;
pub mod types;
pub mod vector;


// Re-export commonly used types
pub use config::{ReckonerConfig, WindowGeometry};
pub use error::{ConfigError, ReckonerError};
pub use frame::FrameTransform;
pub use quaternion::{Quaternion, YawPitchRoll};
pub use reckoner::DeadReckoner;
pub use stance_detection::StanceDetector;
pub use stride::{weinberg_stride_length, StrideModel};
pub use types::{BatchReport, SensorReading, StepEvent};
pub use vector::Vector3;
