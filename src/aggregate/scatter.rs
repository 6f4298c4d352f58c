use crate::types::frames::hourly_frame::HourlyLazyFrame;
use crate::types::records::hourly::HourlyRecord;
use crate::types::weather_situation::WeatherSituation;
use crate::RentalError;
use serde::Serialize;

/// One hourly observation on the temperature/rentals plane, colored by weather.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub temperature: f64,
    pub rental_count: u32,
    pub weather_situation: WeatherSituation,
}

impl From<&HourlyRecord> for ScatterPoint {
    fn from(record: &HourlyRecord) -> Self {
        Self {
            temperature: record.temperature,
            rental_count: record.rental_count,
            weather_situation: record.weather_situation,
        }
    }
}

/// Projects every hourly row to a [`ScatterPoint`], keeping row order.
///
/// No binning or sampling: the output has exactly one point per input row.
pub fn scatter_points_temperature_vs_rentals(
    hourly: &HourlyLazyFrame,
) -> Result<Vec<ScatterPoint>, RentalError> {
    Ok(hourly
        .collect_records()?
        .iter()
        .map(ScatterPoint::from)
        .collect())
}
