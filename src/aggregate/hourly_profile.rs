use crate::aggregate::COL_MEAN;
use crate::data::schema::{COL_HOUR, COL_RENTAL_COUNT, COL_YEAR_INDEX};
use crate::types::frames::hourly_frame::HourlyLazyFrame;
use crate::types::year_index::YearIndex;
use crate::RentalError;
use log::warn;
use polars::prelude::{col, DataType};
use serde::Serialize;

pub const HOURS_PER_DAY: usize = 24;

/// Mean rentals per hour of day, one aligned 24-slot series per dataset year.
///
/// Hours without observations hold `0.0`, so both series always cover 0..=23.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyProfile {
    pub first_year: [f64; HOURS_PER_DAY],
    pub second_year: [f64; HOURS_PER_DAY],
}

impl Default for HourlyProfile {
    fn default() -> Self {
        Self {
            first_year: [0.0; HOURS_PER_DAY],
            second_year: [0.0; HOURS_PER_DAY],
        }
    }
}

impl HourlyProfile {
    pub fn series(&self, year: YearIndex) -> &[f64; HOURS_PER_DAY] {
        match year {
            YearIndex::First => &self.first_year,
            YearIndex::Second => &self.second_year,
        }
    }

    fn series_mut(&mut self, year: YearIndex) -> &mut [f64; HOURS_PER_DAY] {
        match year {
            YearIndex::First => &mut self.first_year,
            YearIndex::Second => &mut self.second_year,
        }
    }

    /// Hour with the highest mean for `year`; the earliest one on ties.
    /// `None` when the series is all zeros.
    pub fn peak_hour(&self, year: YearIndex) -> Option<usize> {
        let series = self.series(year);
        let mut peak: Option<usize> = None;
        for (hour, mean) in series.iter().enumerate() {
            if *mean > peak.map_or(0.0, |p| series[p]) {
                peak = Some(hour);
            }
        }
        peak
    }
}

/// Groups hourly rows by `(year_index, hour)` and averages `rental_count`.
///
/// # Example
///
/// ```rust
/// # use bikeshare::{hourly_average_by_hour_and_year, HourlyLazyFrame, HourlyRecord};
/// # use bikeshare::{Season, WeatherSituation, YearIndex};
/// # use chrono::NaiveDate;
/// let at_five = |day, count| HourlyRecord {
///     date: NaiveDate::from_ymd_opt(2011, 5, day).unwrap(),
///     hour: 5,
///     year_index: YearIndex::First,
///     temperature: 0.5,
///     weather_situation: WeatherSituation::Clear,
///     season: Season::Summer,
///     rental_count: count,
/// };
/// let hourly = HourlyLazyFrame::from_records(&[at_five(1, 10), at_five(2, 20), at_five(3, 30)])?;
///
/// let profile = hourly_average_by_hour_and_year(&hourly)?;
/// assert_eq!(profile.first_year[5], 20.0);
/// assert_eq!(profile.first_year.iter().sum::<f64>(), 20.0);
/// assert!(profile.second_year.iter().all(|m| *m == 0.0));
/// # Ok::<(), bikeshare::RentalError>(())
/// ```
pub fn hourly_average_by_hour_and_year(
    hourly: &HourlyLazyFrame,
) -> Result<HourlyProfile, RentalError> {
    let df = hourly
        .frame
        .clone()
        .group_by([col(COL_YEAR_INDEX), col(COL_HOUR)])
        .agg([col(COL_RENTAL_COUNT)
            .cast(DataType::Float64)
            .mean()
            .alias(COL_MEAN)])
        .collect()?;

    let years = df.column(COL_YEAR_INDEX)?.i64()?;
    let hours = df.column(COL_HOUR)?.i64()?;
    let means = df.column(COL_MEAN)?.f64()?;

    let mut profile = HourlyProfile::default();
    for ((year, hour), mean) in years.into_iter().zip(hours).zip(means) {
        let slot = hour
            .and_then(|h| usize::try_from(h).ok())
            .filter(|h| *h < HOURS_PER_DAY);
        match (year.and_then(YearIndex::from_i64), slot, mean) {
            (Some(year), Some(hour), Some(mean)) => profile.series_mut(year)[hour] = mean,
            _ => warn!(
                "Skipping hourly group with year_index {:?}, hour {:?}",
                year, hour
            ),
        }
    }
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HourlyRecord, Season, WeatherSituation};
    use chrono::NaiveDate;

    fn record(year_index: YearIndex, day: u32, hour: u32, rental_count: u32) -> HourlyRecord {
        HourlyRecord {
            date: NaiveDate::from_ymd_opt(2011 + year_index.index() as i32, 3, day).unwrap(),
            hour,
            year_index,
            temperature: 0.3,
            weather_situation: WeatherSituation::Clear,
            season: Season::Spring,
            rental_count,
        }
    }

    #[test]
    fn test_empty_frame_gives_two_zero_series() -> Result<(), RentalError> {
        let profile = hourly_average_by_hour_and_year(&HourlyLazyFrame::from_records(&[])?)?;
        assert_eq!(profile.first_year.len(), HOURS_PER_DAY);
        assert_eq!(profile.second_year.len(), HOURS_PER_DAY);
        assert_eq!(profile, HourlyProfile::default());
        assert_eq!(profile.peak_hour(YearIndex::First), None);
        Ok(())
    }

    #[test]
    fn test_years_are_kept_apart() -> Result<(), RentalError> {
        let hourly = HourlyLazyFrame::from_records(&[
            record(YearIndex::First, 1, 8, 100),
            record(YearIndex::First, 2, 8, 300),
            record(YearIndex::Second, 1, 8, 500),
            record(YearIndex::Second, 1, 17, 700),
            record(YearIndex::Second, 2, 17, 900),
        ])?;
        let profile = hourly_average_by_hour_and_year(&hourly)?;

        assert_eq!(profile.series(YearIndex::First)[8], 200.0);
        assert_eq!(profile.series(YearIndex::First)[17], 0.0);
        assert_eq!(profile.series(YearIndex::Second)[8], 500.0);
        assert_eq!(profile.series(YearIndex::Second)[17], 800.0);
        assert_eq!(profile.peak_hour(YearIndex::First), Some(8));
        assert_eq!(profile.peak_hour(YearIndex::Second), Some(17));
        Ok(())
    }

    #[test]
    fn test_midnight_and_last_hour_slots() -> Result<(), RentalError> {
        let hourly = HourlyLazyFrame::from_records(&[
            record(YearIndex::First, 1, 0, 4),
            record(YearIndex::First, 1, 23, 6),
        ])?;
        let profile = hourly_average_by_hour_and_year(&hourly)?;
        assert_eq!(profile.first_year[0], 4.0);
        assert_eq!(profile.first_year[23], 6.0);
        Ok(())
    }
}
