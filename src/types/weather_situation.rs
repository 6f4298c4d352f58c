//! Defines the `WeatherSituation` enum, mapping the `weathersit` codes of the
//! rental data to descriptive variants.

use serde::Serialize;
use std::fmt;

/// Weather situation reported for an hourly record.
///
/// The source data uses codes 1 (best) through 4 (worst).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize)]
pub enum WeatherSituation {
    /// Code 1: clear, few clouds, partly cloudy.
    Clear = 1,
    /// Code 2: mist combined with clouds.
    Mist = 2,
    /// Code 3: light snow or light rain, possibly with thunderstorm.
    LightPrecipitation = 3,
    /// Code 4: heavy rain, ice pellets, snow or fog.
    HeavyPrecipitation = 4,
}

impl WeatherSituation {
    pub const ALL: [WeatherSituation; 4] = [
        WeatherSituation::Clear,
        WeatherSituation::Mist,
        WeatherSituation::LightPrecipitation,
        WeatherSituation::HeavyPrecipitation,
    ];

    /// Converts a raw `weathersit` code.
    ///
    /// Returns `None` for anything outside 1..=4.
    ///
    /// ```rust
    /// use bikeshare::WeatherSituation;
    ///
    /// assert_eq!(WeatherSituation::from_i64(2), Some(WeatherSituation::Mist));
    /// assert_eq!(WeatherSituation::from_i64(5), None);
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(WeatherSituation::Clear),
            2 => Some(WeatherSituation::Mist),
            3 => Some(WeatherSituation::LightPrecipitation),
            4 => Some(WeatherSituation::HeavyPrecipitation),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    /// Display name used in chart legends.
    pub fn label(self) -> &'static str {
        match self {
            WeatherSituation::Clear => "Clear/Partly Cloudy",
            WeatherSituation::Mist => "Mist + Cloudy",
            WeatherSituation::LightPrecipitation => "Light Snow/Rain",
            WeatherSituation::HeavyPrecipitation => "Heavy Rain/Snow",
        }
    }
}

impl fmt::Display for WeatherSituation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_all() {
        for situation in WeatherSituation::ALL {
            assert_eq!(WeatherSituation::from_i64(situation.code()), Some(situation));
        }
        assert_eq!(WeatherSituation::from_i64(0), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(WeatherSituation::Clear.to_string(), "Clear/Partly Cloudy");
        assert_eq!(
            WeatherSituation::HeavyPrecipitation.label(),
            "Heavy Rain/Snow"
        );
    }
}
