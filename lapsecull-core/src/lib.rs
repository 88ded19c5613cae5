//! Core library for curating long-running timelapse photo archives.
//!
//! This crate provides the temporal frame-selection engine: parsing capture
//! timestamps out of frame filenames, grouping frames into per-day buckets,
//! resolving a per-day sampling density from supersample override ranges,
//! filtering by daylight and weekday, and emitting a deterministic
//! stride-based subset per day.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use lapsecull_core::{CoreConfig, select_frames};
//!
//! let config = CoreConfig {
//!     sample_rate: 4,
//!     supersample_ranges: Some("20240610-20240620:4".to_string()),
//!     ..CoreConfig::default()
//! };
//!
//! let candidates = vec![
//!     "cam-2024-06-10_120000.png".to_string(),
//!     "cam-2024-06-10_121000.png".to_string(),
//! ];
//! let selected = select_frames(candidates, &config).unwrap();
//! for filename in selected {
//!     println!("{filename}");
//! }
//! ```

pub mod buckets;
pub mod config;
pub mod daylight;
pub mod error;
pub mod geocoder;
pub mod overrides;
pub mod select;
pub mod timestamp;

// Re-exports for public API
pub use buckets::{TimeBucket, bucket_files};
pub use config::{CoreConfig, DEFAULT_CITY, DEFAULT_SAMPLE_RATE};
pub use daylight::{DaylightOracle, DaylightWindow};
pub use error::{CoreError, CoreResult};
pub use overrides::{DensityOverride, OverrideTable};
pub use select::select_frames;
pub use timestamp::{CaptureTimestamp, DateKey, extract};
