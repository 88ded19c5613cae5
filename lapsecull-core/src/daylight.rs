//! Daylight oracle: per-date dawn/dusk windows for a reference location.
//!
//! The location (coordinates and timezone) is resolved exactly once when
//! the oracle is constructed; dawn and dusk are computed per date on
//! demand. Degenerate astronomical output (polar day/night) is surfaced as
//! an error for that date only, which the aggregation pass turns into a
//! warning rather than a fatal failure.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{CoreError, CoreResult};
use crate::geocoder;

/// The daylight interval for one calendar date, in the oracle's timezone.
pub type DaylightWindow = (DateTime<Tz>, DateTime<Tz>);

/// Resolves dawn/dusk membership for a date and location.
///
/// Constructed once per run from a city name (or raw coordinates); all
/// query methods take `&self`.
#[derive(Debug, Clone)]
pub struct DaylightOracle {
    name: String,
    latitude: f64,
    longitude: f64,
    tz: Tz,
}

impl DaylightOracle {
    /// Builds an oracle for a named city from the built-in gazetteer.
    ///
    /// An unknown city name is a fatal configuration error.
    pub fn for_city(city: &str) -> CoreResult<Self> {
        let entry = geocoder::lookup(city)?;
        Ok(Self {
            name: entry.name.to_string(),
            latitude: entry.latitude,
            longitude: entry.longitude,
            tz: entry.tz()?,
        })
    }

    /// Builds an oracle from raw coordinates and a timezone, bypassing the
    /// gazetteer.
    #[must_use]
    pub fn from_coordinates(name: &str, latitude: f64, longitude: f64, tz: Tz) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            tz,
        }
    }

    /// The resolved location name.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.name
    }

    /// The resolved timezone.
    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Computes the `[dawn, dusk]` window for one calendar date in the
    /// oracle's timezone.
    ///
    /// Polar day/night dates, where the sun never crosses the horizon,
    /// yield `CoreError::SunComputation`; the caller excludes that date's
    /// files and continues.
    pub fn window(&self, date: NaiveDate) -> CoreResult<DaylightWindow> {
        use chrono::Datelike;

        let (rise, set) = sunrise::sunrise_sunset(
            self.latitude,
            self.longitude,
            date.year(),
            date.month(),
            date.day(),
        );
        if set <= rise {
            return Err(CoreError::SunComputation {
                date,
                reason: "no sunrise/sunset on this date (polar day or night)".to_string(),
            });
        }

        let to_local = |secs: i64| {
            Utc.timestamp_opt(secs, 0)
                .single()
                .map(|utc| utc.with_timezone(&self.tz))
                .ok_or_else(|| CoreError::SunComputation {
                    date,
                    reason: format!("sun event timestamp {secs} out of range"),
                })
        };
        Ok((to_local(rise)?, to_local(set)?))
    }

    /// Returns whether `instant` lies within `[dawn - buffer, dusk + buffer]`
    /// for the instant's own calendar date. The selection engine passes a
    /// zero buffer; capture scheduling widens the window into twilight.
    pub fn contains(&self, instant: DateTime<Tz>, buffer: Duration) -> CoreResult<bool> {
        let (dawn, dusk) = self.window(instant.date_naive())?;
        Ok(dawn - buffer <= instant && instant <= dusk + buffer)
    }

    /// Whether the sun is out right now at this location, within
    /// `buffer_minutes` of dawn/dusk. Used to gate frame capture runs.
    pub fn sun_is_out(&self, buffer_minutes: i64) -> CoreResult<bool> {
        let now = Utc::now().with_timezone(&self.tz);
        self.contains(now, Duration::minutes(buffer_minutes))
    }

    /// Localizes a capture wall-clock time into the oracle's timezone.
    ///
    /// Returns `None` for instants the timezone cannot represent (the
    /// skipped hour of a DST transition); ambiguous instants resolve to the
    /// earlier offset.
    #[must_use]
    pub fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
        self.tz.from_local_datetime(&naive).earliest()
    }
}
