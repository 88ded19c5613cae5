//! Per-day bucketing of candidate frames.
//!
//! The aggregation pass consumes the sorted candidate filename stream,
//! classifies each file through the timestamp extractor, the density
//! override table, and the daylight oracle, and groups the survivors into
//! one `TimeBucket` per calendar day. Per-file and per-date failures are
//! warnings; only configuration errors abort a run, and those are caught
//! before this pass starts.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use log::{debug, warn};

use crate::config::CoreConfig;
use crate::daylight::{DaylightOracle, DaylightWindow};
use crate::overrides::OverrideTable;
use crate::timestamp::{self, DateKey};

/// All frames surviving the filters for one calendar day, plus the day's
/// resolved sampling density.
///
/// `sample_scale` reflects every file classified into the bucket by date,
/// including files later excluded by the weekend/daylight filters: the
/// override applies to the calendar day, not to individual frames. A
/// bucket may therefore exist with an empty file list; such buckets are
/// dropped before selection.
#[derive(Debug, Clone)]
pub struct TimeBucket {
    pub date_key: DateKey,
    pub sample_scale: u32,
    pub files: Vec<String>,
}

impl TimeBucket {
    fn new(date_key: DateKey) -> Self {
        Self {
            date_key,
            sample_scale: 1,
            files: Vec::new(),
        }
    }
}

/// Groups candidate filenames into per-day buckets.
///
/// The caller supplies filenames in a deterministic (lexicographically
/// sorted) order. For each file: extract the timestamp, raise the day's
/// sample scale from the override table, then apply the weekend and
/// daylight filters. The scale update happens before the filters and
/// regardless of their outcome. Dawn/dusk windows are computed once per date; a date whose
/// computation fails is excluded with a single warning.
pub fn bucket_files<I>(
    filenames: I,
    config: &CoreConfig,
    oracle: &DaylightOracle,
    overrides: &OverrideTable,
) -> BTreeMap<DateKey, TimeBucket>
where
    I: IntoIterator<Item = String>,
{
    let mut buckets: BTreeMap<DateKey, TimeBucket> = BTreeMap::new();
    // None marks a date whose dawn/dusk computation already failed.
    let mut windows: HashMap<DateKey, Option<DaylightWindow>> = HashMap::new();

    for filename in filenames {
        let filename = filename.trim();

        // Names that don't match the frame pattern are not archive frames.
        let Some(ts) = timestamp::extract(filename) else {
            continue;
        };
        // Matching layout but impossible calendar date: warned inside.
        let Some(naive) = ts.to_naive() else {
            continue;
        };
        let date_key = ts.date_key();

        let bucket = buckets
            .entry(date_key)
            .or_insert_with(|| TimeBucket::new(date_key));

        // The override applies to the whole day, so the scale is raised
        // even for files the filters below will exclude.
        bucket.sample_scale = bucket.sample_scale.max(overrides.effective_scale(date_key));

        let Some(instant) = oracle.localize(naive) else {
            warn!("cannot localize {filename} in {}, skipping", oracle.timezone());
            continue;
        };

        if config.skip_weekends && config.weekend_days.contains(&instant.weekday()) {
            continue;
        }

        // Only include files when the sun is up.
        let window = windows.entry(date_key).or_insert_with(|| {
            match oracle.window(naive.date()) {
                Ok(window) => Some(window),
                Err(e) => {
                    warn!("{e}; excluding this date's files");
                    None
                }
            }
        });
        let Some((dawn, dusk)) = window else {
            continue;
        };
        // Exact closed interval, zero buffer.
        if *dawn <= instant && instant <= *dusk {
            bucket.files.push(filename.to_string());
        }
    }

    debug!("aggregated {} day bucket(s)", buckets.len());
    buckets
}
