use crate::aggregate::error::{AggregateError, Group};
use crate::aggregate::COL_MEAN;
use crate::data::schema::{COL_RENTAL_COUNT, COL_SEASON, COL_WEATHER_SITUATION};
use crate::types::frames::hourly_frame::HourlyLazyFrame;
use crate::types::season::Season;
use crate::types::weather_situation::WeatherSituation;
use crate::RentalError;
use log::warn;
use polars::prelude::{col, DataType};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// A single cell of the season/weather cross-tabulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonWeatherMean {
    pub season: Season,
    pub weather_situation: WeatherSituation,
    pub mean_rentals: f64,
}

/// Mean hourly rentals per `(season, weather_situation)` pair.
///
/// Sparse: a combination with no observations has no entry at all. Unlike
/// [`crate::HourlyProfile`] nothing is zero-filled, so callers decide how to
/// draw a missing cell.
///
/// Serializes as a list of [`SeasonWeatherMean`] ordered by season, then weather.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeasonWeatherAverages {
    means: BTreeMap<(Season, WeatherSituation), f64>,
}

impl SeasonWeatherAverages {
    /// # Errors
    ///
    /// [`AggregateError::EmptyGroup`] when the combination had no observations.
    pub fn get(
        &self,
        season: Season,
        weather_situation: WeatherSituation,
    ) -> Result<f64, AggregateError> {
        self.means
            .get(&(season, weather_situation))
            .copied()
            .ok_or(AggregateError::EmptyGroup(Group::SeasonWeather(
                season,
                weather_situation,
            )))
    }

    pub fn contains(&self, season: Season, weather_situation: WeatherSituation) -> bool {
        self.means.contains_key(&(season, weather_situation))
    }

    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<(Season, WeatherSituation), f64> {
        &self.means
    }

    pub fn iter(&self) -> impl Iterator<Item = SeasonWeatherMean> + '_ {
        self.means
            .iter()
            .map(|(&(season, weather_situation), &mean_rentals)| SeasonWeatherMean {
                season,
                weather_situation,
                mean_rentals,
            })
    }
}

impl Serialize for SeasonWeatherAverages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Groups hourly rows by `(season, weather_situation)` and averages `rental_count`.
pub fn average_rentals_by_season_and_weather(
    hourly: &HourlyLazyFrame,
) -> Result<SeasonWeatherAverages, RentalError> {
    let df = hourly
        .frame
        .clone()
        .group_by([col(COL_SEASON), col(COL_WEATHER_SITUATION)])
        .agg([col(COL_RENTAL_COUNT)
            .cast(DataType::Float64)
            .mean()
            .alias(COL_MEAN)])
        .collect()?;

    let seasons = df.column(COL_SEASON)?.i64()?;
    let weather = df.column(COL_WEATHER_SITUATION)?.i64()?;
    let means = df.column(COL_MEAN)?.f64()?;

    let mut averages = SeasonWeatherAverages::default();
    for ((season_code, weather_code), mean) in seasons.into_iter().zip(weather).zip(means) {
        let season = season_code.and_then(Season::from_i64);
        let weather_situation = weather_code.and_then(WeatherSituation::from_i64);
        match (season, weather_situation, mean) {
            (Some(season), Some(weather_situation), Some(mean)) => {
                averages.means.insert((season, weather_situation), mean);
            }
            _ => warn!(
                "Skipping season/weather group with codes {:?}/{:?}",
                season_code, weather_code
            ),
        }
    }
    Ok(averages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HourlyRecord, YearIndex};
    use chrono::NaiveDate;

    fn record(season: Season, weather: WeatherSituation, rental_count: u32) -> HourlyRecord {
        HourlyRecord {
            date: NaiveDate::from_ymd_opt(2011, 9, 1).unwrap(),
            hour: 12,
            year_index: YearIndex::First,
            temperature: 0.6,
            weather_situation: weather,
            season,
            rental_count,
        }
    }

    #[test]
    fn test_absent_combinations_have_no_key() -> Result<(), RentalError> {
        let hourly = HourlyLazyFrame::from_records(&[
            record(Season::Summer, WeatherSituation::Clear, 300),
            record(Season::Summer, WeatherSituation::Clear, 100),
            record(Season::Summer, WeatherSituation::LightPrecipitation, 40),
            record(Season::Winter, WeatherSituation::Mist, 90),
        ])?;
        let averages = average_rentals_by_season_and_weather(&hourly)?;

        assert_eq!(averages.len(), 3);
        assert_eq!(averages.get(Season::Summer, WeatherSituation::Clear), Ok(200.0));
        assert_eq!(
            averages.get(Season::Summer, WeatherSituation::LightPrecipitation),
            Ok(40.0)
        );
        assert!(!averages.contains(Season::Spring, WeatherSituation::Clear));
        assert_eq!(
            averages.get(Season::Winter, WeatherSituation::HeavyPrecipitation),
            Err(AggregateError::EmptyGroup(Group::SeasonWeather(
                Season::Winter,
                WeatherSituation::HeavyPrecipitation
            )))
        );
        Ok(())
    }

    #[test]
    fn test_iter_is_ordered_and_serializes_as_list() -> Result<(), Box<dyn std::error::Error>> {
        let hourly = HourlyLazyFrame::from_records(&[
            record(Season::Winter, WeatherSituation::Clear, 10),
            record(Season::Spring, WeatherSituation::Mist, 20),
        ])?;
        let averages = average_rentals_by_season_and_weather(&hourly)?;

        let seasons: Vec<Season> = averages.iter().map(|m| m.season).collect();
        assert_eq!(seasons, vec![Season::Spring, Season::Winter]);

        let json = serde_json::to_value(&averages)?;
        assert_eq!(json[0]["season"], "Spring");
        assert_eq!(json[0]["weather_situation"], "Mist");
        assert_eq!(json[0]["mean_rentals"], 20.0);
        assert_eq!(json.as_array().map(Vec::len), Some(2));
        Ok(())
    }
}
