//! Built-in city gazetteer for daylight calculations.
//!
//! Maps a city name to geographic coordinates and an IANA timezone. The
//! table is static and covers the cities a camera archive is realistically
//! referenced against; an unknown name is a fatal configuration error at
//! startup, never a per-file error.

use chrono_tz::Tz;

use crate::error::{CoreError, CoreResult};

/// A gazetteer entry: coordinates plus IANA timezone for one city.
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: &'static str,
}

impl City {
    /// Resolves the entry's IANA timezone name to a `Tz`.
    pub fn tz(&self) -> CoreResult<Tz> {
        self.timezone.parse::<Tz>().map_err(|e| {
            CoreError::InvalidConfig(format!(
                "bad timezone '{}' for city '{}': {}",
                self.timezone, self.name, e
            ))
        })
    }
}

const CITIES: &[City] = &[
    City { name: "Seattle", latitude: 47.6062, longitude: -122.3321, timezone: "America/Los_Angeles" },
    City { name: "Portland", latitude: 45.5152, longitude: -122.6784, timezone: "America/Los_Angeles" },
    City { name: "San Francisco", latitude: 37.7749, longitude: -122.4194, timezone: "America/Los_Angeles" },
    City { name: "Los Angeles", latitude: 34.0522, longitude: -118.2437, timezone: "America/Los_Angeles" },
    City { name: "Anchorage", latitude: 61.2181, longitude: -149.9003, timezone: "America/Anchorage" },
    City { name: "Honolulu", latitude: 21.3069, longitude: -157.8583, timezone: "Pacific/Honolulu" },
    City { name: "Denver", latitude: 39.7392, longitude: -104.9903, timezone: "America/Denver" },
    City { name: "Chicago", latitude: 41.8781, longitude: -87.6298, timezone: "America/Chicago" },
    City { name: "New York", latitude: 40.7128, longitude: -74.0060, timezone: "America/New_York" },
    City { name: "Toronto", latitude: 43.6532, longitude: -79.3832, timezone: "America/Toronto" },
    City { name: "Vancouver", latitude: 49.2827, longitude: -123.1207, timezone: "America/Vancouver" },
    City { name: "London", latitude: 51.5074, longitude: -0.1278, timezone: "Europe/London" },
    City { name: "Dublin", latitude: 53.3498, longitude: -6.2603, timezone: "Europe/Dublin" },
    City { name: "Paris", latitude: 48.8566, longitude: 2.3522, timezone: "Europe/Paris" },
    City { name: "Berlin", latitude: 52.5200, longitude: 13.4050, timezone: "Europe/Berlin" },
    City { name: "Amsterdam", latitude: 52.3676, longitude: 4.9041, timezone: "Europe/Amsterdam" },
    City { name: "Madrid", latitude: 40.4168, longitude: -3.7038, timezone: "Europe/Madrid" },
    City { name: "Rome", latitude: 41.9028, longitude: 12.4964, timezone: "Europe/Rome" },
    City { name: "Stockholm", latitude: 59.3293, longitude: 18.0686, timezone: "Europe/Stockholm" },
    City { name: "Oslo", latitude: 59.9139, longitude: 10.7522, timezone: "Europe/Oslo" },
    City { name: "Helsinki", latitude: 60.1699, longitude: 24.9384, timezone: "Europe/Helsinki" },
    City { name: "Reykjavik", latitude: 64.1466, longitude: -21.9426, timezone: "Atlantic/Reykjavik" },
    City { name: "Longyearbyen", latitude: 78.2232, longitude: 15.6267, timezone: "Arctic/Longyearbyen" },
    City { name: "Tokyo", latitude: 35.6762, longitude: 139.6503, timezone: "Asia/Tokyo" },
    City { name: "Singapore", latitude: 1.3521, longitude: 103.8198, timezone: "Asia/Singapore" },
    City { name: "Sydney", latitude: -33.8688, longitude: 151.2093, timezone: "Australia/Sydney" },
    City { name: "Auckland", latitude: -36.8509, longitude: 174.7645, timezone: "Pacific/Auckland" },
];

/// Looks up a city by name (case-insensitive).
///
/// Returns `CoreError::UnknownCity` for names not in the gazetteer.
pub fn lookup(name: &str) -> CoreResult<&'static City> {
    CITIES
        .iter()
        .find(|city| city.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| CoreError::UnknownCity(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_default_city() {
        let city = lookup("Seattle").unwrap();
        assert_eq!(city.timezone, "America/Los_Angeles");
        assert!((city.latitude - 47.6).abs() < 0.1);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup("seattle").unwrap().name, "Seattle");
        assert_eq!(lookup("NEW YORK").unwrap().name, "New York");
    }

    #[test]
    fn test_lookup_unknown_city() {
        assert!(matches!(
            lookup("Atlantis"),
            Err(CoreError::UnknownCity(_))
        ));
    }

    #[test]
    fn test_all_timezones_resolve() {
        for city in CITIES {
            assert!(city.tz().is_ok(), "timezone for {} must parse", city.name);
        }
    }
}
