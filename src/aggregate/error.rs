use crate::types::season::Season;
use crate::types::weather_situation::WeatherSituation;
use std::fmt;
use thiserror::Error;

/// A group of observations a mean was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Workday,
    Weekend,
    SeasonWeather(Season, WeatherSituation),
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Workday => f.write_str("workday"),
            Group::Weekend => f.write_str("weekend"),
            Group::SeasonWeather(season, weather) => write!(f, "{} / {}", season, weather),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum AggregateError {
    #[error("No observations in the {0} group")]
    EmptyGroup(Group),

    #[error("Workday mean is zero, so a relative change cannot be computed")]
    ZeroBaseline,
}
