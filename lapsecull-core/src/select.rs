//! Deterministic stride-based selection from day buckets.
//!
//! Selection is a pure function of the bucket contents, the bucket's
//! resolved sample scale, and the baseline rate: identical inputs always
//! produce an identical output list.

use crate::buckets::{self, TimeBucket};
use crate::config::CoreConfig;
use crate::daylight::DaylightOracle;
use crate::error::CoreResult;
use crate::overrides::OverrideTable;

impl TimeBucket {
    /// Selects a stride-spaced subset of this bucket's files.
    ///
    /// The stride is `max(1, sample_rate / sample_scale)` (floor
    /// division), applied over the chronologically sorted file list
    /// starting at offset 0. A bucket whose scale meets or exceeds the
    /// rate keeps every frame: an override bucket is never sampled more
    /// coarsely than the baseline.
    #[must_use]
    pub fn select(&self, sample_rate: u32) -> Vec<String> {
        let stride = (sample_rate / self.sample_scale).max(1) as usize;
        let mut sorted = self.files.clone();
        sorted.sort_unstable();
        sorted.into_iter().step_by(stride).collect()
    }
}

/// Runs the whole selection engine over a candidate filename stream.
///
/// Validates the configuration, resolves the daylight oracle for the
/// configured city (fatal on an unknown name), parses the density
/// overrides (malformed entries warn and are ignored), aggregates the
/// stream into day buckets, and emits each non-empty bucket's stride
/// selection in chronological bucket order.
///
/// The caller supplies filenames sorted lexicographically; given the fixed
/// timestamp layout that order is chronological.
pub fn select_frames<I>(filenames: I, config: &CoreConfig) -> CoreResult<Vec<String>>
where
    I: IntoIterator<Item = String>,
{
    config.validate()?;
    let oracle = DaylightOracle::for_city(&config.city)?;
    let overrides = OverrideTable::parse(config.supersample_ranges.as_deref().unwrap_or(""));

    let buckets = buckets::bucket_files(filenames, config, &oracle, &overrides);

    let mut selected = Vec::new();
    for bucket in buckets.values() {
        if !bucket.files.is_empty() {
            selected.extend(bucket.select(config.sample_rate));
        }
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn bucket(date_key: u32, scale: u32, files: &[&str]) -> TimeBucket {
        TimeBucket {
            date_key,
            sample_scale: scale,
            files: files.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn ten_frames() -> Vec<String> {
        // 09:00 through 18:00, hourly; all within Seattle June daylight.
        (9..19)
            .map(|h| format!("cam-2024-06-10_{h:02}0000.png"))
            .collect()
    }

    #[test]
    fn test_stride_selection_at_rate_four() {
        let files: Vec<String> = ten_frames();
        let refs: Vec<&str> = files.iter().map(String::as_str).collect();
        let b = bucket(20240610, 1, &refs);
        let selected = b.select(4);
        // stride 4 over ten files: sorted positions 0, 4, 8
        assert_eq!(
            selected,
            vec![
                "cam-2024-06-10_090000.png",
                "cam-2024-06-10_130000.png",
                "cam-2024-06-10_170000.png",
            ]
        );
    }

    #[test]
    fn test_selection_count_is_ceil_n_over_stride() {
        for (n, rate, expected) in [(10usize, 4u32, 3usize), (10, 3, 4), (10, 1, 10), (7, 2, 4)] {
            let files: Vec<String> = (0..n)
                .map(|i| format!("cam-2024-06-10_{:02}{:02}00.png", 9 + i / 60, i % 60))
                .collect();
            let refs: Vec<&str> = files.iter().map(String::as_str).collect();
            let b = bucket(20240610, 1, &refs);
            assert_eq!(b.select(rate).len(), expected, "n={n} rate={rate}");
        }
    }

    #[test]
    fn test_scale_equal_to_rate_keeps_everything() {
        let files: Vec<String> = ten_frames();
        let refs: Vec<&str> = files.iter().map(String::as_str).collect();
        let b = bucket(20240610, 4, &refs);
        assert_eq!(b.select(4).len(), 10);
    }

    #[test]
    fn test_scale_above_rate_floors_stride_to_one() {
        let files: Vec<String> = ten_frames();
        let refs: Vec<&str> = files.iter().map(String::as_str).collect();
        let b = bucket(20240610, 8, &refs);
        // 4 / 8 floors to 0, clamped to 1
        assert_eq!(b.select(4).len(), 10);
    }

    #[test]
    fn test_selection_sorts_bucket_contents() {
        let b = bucket(
            20240610,
            1,
            &[
                "cam-2024-06-10_150000.png",
                "cam-2024-06-10_090000.png",
                "cam-2024-06-10_120000.png",
            ],
        );
        assert_eq!(
            b.select(1),
            vec![
                "cam-2024-06-10_090000.png",
                "cam-2024-06-10_120000.png",
                "cam-2024-06-10_150000.png",
            ]
        );
    }

    #[test]
    fn test_select_frames_weekend_scenario() {
        // Monday midday survives, Saturday midday does not.
        let config = CoreConfig::default();
        let selected = select_frames(
            vec![
                "cam-2024-06-10_120000.png".to_string(),
                "cam-2024-06-15_120000.png".to_string(),
            ],
            &config,
        )
        .unwrap();
        assert_eq!(selected, vec!["cam-2024-06-10_120000.png"]);
    }

    #[test]
    fn test_select_frames_override_restores_density() {
        // Rate 4 with a matching scale-4 override: every frame kept.
        let config = CoreConfig {
            sample_rate: 4,
            supersample_ranges: Some("20240610-20240610:4".to_string()),
            ..CoreConfig::default()
        };
        let selected = select_frames(ten_frames(), &config).unwrap();
        assert_eq!(selected.len(), 10);
    }

    #[test]
    fn test_select_frames_baseline_sampling() {
        let config = CoreConfig {
            sample_rate: 4,
            ..CoreConfig::default()
        };
        let selected = select_frames(ten_frames(), &config).unwrap();
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_select_frames_is_deterministic() {
        let config = CoreConfig {
            sample_rate: 3,
            ..CoreConfig::default()
        };
        let a = select_frames(ten_frames(), &config).unwrap();
        let b = select_frames(ten_frames(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_select_frames_order_independent_within_a_day() {
        // Shuffling same-day input must not change the final selection.
        let config = CoreConfig {
            sample_rate: 4,
            ..CoreConfig::default()
        };
        let forward = select_frames(ten_frames(), &config).unwrap();
        let mut reversed = ten_frames();
        reversed.reverse();
        let backward = select_frames(reversed, &config).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_select_frames_unknown_city_is_fatal() {
        let config = CoreConfig {
            city: "Atlantis".to_string(),
            ..CoreConfig::default()
        };
        assert!(matches!(
            select_frames(ten_frames(), &config),
            Err(CoreError::UnknownCity(_))
        ));
    }

    #[test]
    fn test_select_frames_zero_rate_is_fatal() {
        let config = CoreConfig {
            sample_rate: 0,
            ..CoreConfig::default()
        };
        assert!(select_frames(ten_frames(), &config).is_err());
    }

    #[test]
    fn test_select_frames_empty_input() {
        let config = CoreConfig::default();
        let selected = select_frames(Vec::new(), &config).unwrap();
        assert!(selected.is_empty());
    }
}
