//! Timestamp extraction from frame filenames.
//!
//! Archive frames carry their capture time in the filename, in the fixed
//! layout `...YYYY-MM-DD_HHMMSS....png` (e.g. `cam-2024-06-10_120000.png`).
//! This module extracts that timestamp and derives the per-day `DateKey`
//! used to bucket frames. Filenames that do not match the layout are not
//! archive frames and are skipped silently by the caller.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use log::warn;
use regex::Regex;

/// A comparable per-calendar-day key: `year * 10000 + month * 100 + day`.
///
/// All timestamps on the same calendar day collapse to the same key, and
/// key ordering matches chronological date ordering.
pub type DateKey = u32;

// The year/month/day group must be preceded by a non-digit and the
// six-digit time followed by one, so that the pattern only recognizes
// frame-image filenames and not incidentally similar substrings.
static FRAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\D(\d{4})-(\d{2})-(\d{2})_(\d{2})(\d{2})(\d{2})\D.*png$")
        .expect("frame filename pattern is valid")
});

/// A capture timestamp parsed out of a frame filename.
///
/// Field values are taken verbatim from the filename; calendar validity
/// (e.g. day 31 in February) is only checked by [`CaptureTimestamp::to_naive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureTimestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CaptureTimestamp {
    /// Collapses this timestamp to its calendar-day key.
    #[must_use]
    pub fn date_key(&self) -> DateKey {
        self.year as DateKey * 10000 + self.month * 100 + self.day
    }

    /// Converts to a `NaiveDateTime`, or `None` if the parsed fields do
    /// not form a valid calendar date/time. Invalid combinations are
    /// reported with a warning; the caller skips the file.
    #[must_use]
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        let naive = NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, self.second));
        if naive.is_none() {
            warn!(
                "invalid calendar date/time {:04}-{:02}-{:02} {:02}:{:02}:{:02}, skipping",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            );
        }
        naive
    }
}

/// Attempts to extract a capture timestamp from a frame filename.
///
/// Returns `None` for any filename lacking the expected layout or the
/// `.png` extension; such files are not archive frames and the caller must
/// skip them silently.
#[must_use]
pub fn extract(filename: &str) -> Option<CaptureTimestamp> {
    let caps = FRAME_RE.captures(filename)?;
    // Groups are all-digit by construction, so parsing cannot fail.
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    Some(CaptureTimestamp {
        year: field(1)? as i32,
        month: field(2)?,
        day: field(3)?,
        hour: field(4)?,
        minute: field(5)?,
        second: field(6)?,
    })
}
