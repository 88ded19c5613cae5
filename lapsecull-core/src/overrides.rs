//! Density override table: supersampling of date ranges.
//!
//! Ranges of special interest can be sampled more densely than the archive
//! baseline. A specification string of the shape
//! `YYYYMMDD-YYYYMMDD:RATE(,..)*` (inclusive start and end dates, positive
//! integer rate) is parsed into a table; malformed entries are skipped with
//! a warning so one bad range never aborts a run. Resolving a date against
//! the table yields the maximum matching rate (denser override wins, never
//! averaged or summed), or 1 when no range matches.

use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::timestamp::DateKey;

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{8})-(\d{8}):(\d+)$").expect("override range pattern is valid")
});

/// One density override: an inclusive DateKey range and its sample scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityOverride {
    pub start: DateKey,
    pub end: DateKey,
    pub scale: u32,
}

impl DensityOverride {
    fn contains(&self, date_key: DateKey) -> bool {
        self.start <= date_key && date_key <= self.end
    }
}

/// A set of possibly-overlapping density overrides.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    ranges: Vec<DensityOverride>,
}

impl OverrideTable {
    /// Parses a comma-separated override specification.
    ///
    /// Malformed entries (wrong shape, or a zero rate) are logged and
    /// ignored; parsing continues with the remaining entries. An empty
    /// specification yields an empty table.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let mut ranges = Vec::new();
        if spec.is_empty() {
            return Self { ranges };
        }

        for entry in spec.split(',') {
            let Some(caps) = RANGE_RE.captures(entry) else {
                warn!("invalid supersample range '{entry}', skipping");
                continue;
            };
            // All-digit groups; parse can only fail on overflow.
            let parsed = (
                caps[1].parse::<DateKey>(),
                caps[2].parse::<DateKey>(),
                caps[3].parse::<u32>(),
            );
            match parsed {
                (Ok(start), Ok(end), Ok(scale)) if scale > 0 => {
                    ranges.push(DensityOverride { start, end, scale });
                }
                _ => warn!("invalid supersample range '{entry}', skipping"),
            }
        }
        Self { ranges }
    }

    /// Number of parsed ranges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Resolves the effective sample scale for a date: the maximum rate of
    /// all ranges containing it, or 1 when none match. Adding or widening
    /// ranges can only raise a date's resolved scale.
    #[must_use]
    pub fn effective_scale(&self, date_key: DateKey) -> u32 {
        self.ranges
            .iter()
            .filter(|r| r.contains(date_key))
            .map(|r| r.scale)
            .max()
            .unwrap_or(1)
    }
}
