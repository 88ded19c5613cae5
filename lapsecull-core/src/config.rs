//! Configuration structures for the frame-selection engine.
//!
//! A single `CoreConfig` is built by the consumer of the library (typically
//! lapsecull-cli) at startup and passed into `select_frames`. All selection
//! behavior is driven by this structure; the engine keeps no global state.

use chrono::Weekday;

use crate::error::{CoreError, CoreResult};

/// Default reference city for daylight calculations.
pub const DEFAULT_CITY: &str = "Seattle";

/// Default baseline sample rate ("keep every frame").
pub const DEFAULT_SAMPLE_RATE: u32 = 1;

/// Main configuration structure for the lapsecull-core library.
///
/// Holds the parameters required for one selection run: the baseline
/// sampling rate, weekend handling, the supersample override specification,
/// and the reference city for daylight classification.
///
/// # Examples
///
/// ```rust,no_run
/// use lapsecull_core::CoreConfig;
///
/// let config = CoreConfig {
///     sample_rate: 4,
///     supersample_ranges: Some("20240610-20240620:4".to_string()),
///     ..CoreConfig::default()
/// };
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Baseline sample rate: keep every Nth frame per day (1 = keep all)
    pub sample_rate: u32,

    /// Whether frames captured on weekend days are excluded
    pub skip_weekends: bool,

    /// Which weekdays count as the weekend
    pub weekend_days: Vec<Weekday>,

    /// Reference city for dawn/dusk calculations
    pub city: String,

    /// Supersample override specification: `YYYYMMDD-YYYYMMDD:RATE(,..)*`
    pub supersample_ranges: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            skip_weekends: true,
            weekend_days: vec![Weekday::Sat, Weekday::Sun],
            city: DEFAULT_CITY.to_string(),
            supersample_ranges: None,
        }
    }
}

impl CoreConfig {
    /// Checks the configuration for fatal errors before any file is
    /// processed. A zero sample rate and an empty weekend set (while
    /// weekend skipping is enabled) are rejected here rather than deep in
    /// the aggregation pass.
    pub fn validate(&self) -> CoreResult<()> {
        if self.sample_rate == 0 {
            return Err(CoreError::InvalidConfig(
                "sample rate must be a positive integer".to_string(),
            ));
        }
        if self.skip_weekends && self.weekend_days.is_empty() {
            return Err(CoreError::InvalidConfig(
                "weekend skipping enabled but no weekend days configured".to_string(),
            ));
        }
        Ok(())
    }
}
