//! Converts between normalized rental frames and typed records.

use crate::data::error::RentalDataError;
use crate::data::schema::*;
use crate::types::records::daily::DailyRecord;
use crate::types::records::hourly::HourlyRecord;
use crate::types::season::Season;
use crate::types::weather_situation::WeatherSituation;
use crate::types::year_index::YearIndex;
use chrono::NaiveDate;
use polars::prelude::*;
use std::fmt::Display;

/// Retrieves a column by name from a DataFrame.
fn get_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, RentalDataError> {
    df.column(name)
        .map_err(|e| RentalDataError::ColumnNotFound(name.to_string(), e))
}

fn get_dates(df: &DataFrame) -> Result<Vec<Option<NaiveDate>>, RentalDataError> {
    Ok(get_column(df, COL_DATE)?.date()?.as_date_iter().collect())
}

fn require<T>(value: Option<T>, column: &str, row: usize) -> Result<T, RentalDataError> {
    value.ok_or_else(|| RentalDataError::NullValue {
        column: column.to_string(),
        row,
    })
}

fn invalid(column: &str, row: usize, value: impl Display) -> RentalDataError {
    RentalDataError::InvalidValue {
        column: column.to_string(),
        row,
        value: value.to_string(),
    }
}

fn to_count(value: i64, row: usize) -> Result<u32, RentalDataError> {
    u32::try_from(value).map_err(|_| invalid(COL_RENTAL_COUNT, row, value))
}

/// Reads every row of a collected hourly frame, in frame order.
pub(crate) fn hourly_records(df: &DataFrame) -> Result<Vec<HourlyRecord>, RentalDataError> {
    let dates = get_dates(df)?;
    let hours = get_column(df, COL_HOUR)?.i64()?;
    let years = get_column(df, COL_YEAR_INDEX)?.i64()?;
    let temperatures = get_column(df, COL_TEMPERATURE)?.f64()?;
    let weather = get_column(df, COL_WEATHER_SITUATION)?.i64()?;
    let seasons = get_column(df, COL_SEASON)?.i64()?;
    let counts = get_column(df, COL_RENTAL_COUNT)?.i64()?;

    let mut records = Vec::with_capacity(df.height());
    for (row, date) in dates.into_iter().enumerate() {
        let hour = require(hours.get(row), COL_HOUR, row)?;
        let year = require(years.get(row), COL_YEAR_INDEX, row)?;
        let weather_code = require(weather.get(row), COL_WEATHER_SITUATION, row)?;
        let season_code = require(seasons.get(row), COL_SEASON, row)?;
        let count = require(counts.get(row), COL_RENTAL_COUNT, row)?;

        records.push(HourlyRecord {
            date: require(date, COL_DATE, row)?,
            hour: u32::try_from(hour)
                .ok()
                .filter(|h| *h < 24)
                .ok_or_else(|| invalid(COL_HOUR, row, hour))?,
            year_index: YearIndex::from_i64(year)
                .ok_or_else(|| invalid(COL_YEAR_INDEX, row, year))?,
            temperature: require(temperatures.get(row), COL_TEMPERATURE, row)?,
            weather_situation: WeatherSituation::from_i64(weather_code)
                .ok_or_else(|| invalid(COL_WEATHER_SITUATION, row, weather_code))?,
            season: Season::from_i64(season_code)
                .ok_or_else(|| invalid(COL_SEASON, row, season_code))?,
            rental_count: to_count(count, row)?,
        });
    }
    Ok(records)
}

/// Reads every row of a collected daily frame, in frame order.
pub(crate) fn daily_records(df: &DataFrame) -> Result<Vec<DailyRecord>, RentalDataError> {
    let dates = get_dates(df)?;
    let working = get_column(df, COL_IS_WORKING_DAY)?.bool()?;
    let counts = get_column(df, COL_RENTAL_COUNT)?.i64()?;

    dates
        .into_iter()
        .enumerate()
        .map(|(row, date)| {
            Ok(DailyRecord {
                date: require(date, COL_DATE, row)?,
                is_working_day: require(working.get(row), COL_IS_WORKING_DAY, row)?,
                rental_count: to_count(require(counts.get(row), COL_RENTAL_COUNT, row)?, row)?,
            })
        })
        .collect()
}

fn date_column(dates: impl IntoIterator<Item = NaiveDate>) -> Column {
    Column::from(DateChunked::from_naive_date(COL_DATE.into(), dates).into_series())
}

/// Builds a normalized hourly frame from records.
pub(crate) fn hourly_frame(records: &[HourlyRecord]) -> Result<DataFrame, RentalDataError> {
    let int_column = |name: &str, value: fn(&HourlyRecord) -> i64| {
        Column::new(name.into(), records.iter().map(value).collect::<Vec<i64>>())
    };
    let frame = DataFrame::new(vec![
        date_column(records.iter().map(|r| r.date)),
        int_column(COL_HOUR, |r| r.hour as i64),
        int_column(COL_YEAR_INDEX, |r| r.year_index.index()),
        Column::new(
            COL_TEMPERATURE.into(),
            records.iter().map(|r| r.temperature).collect::<Vec<f64>>(),
        ),
        int_column(COL_WEATHER_SITUATION, |r| r.weather_situation.code()),
        int_column(COL_SEASON, |r| r.season.code()),
        int_column(COL_RENTAL_COUNT, |r| r.rental_count as i64),
    ])?;
    Ok(frame)
}

/// Builds a normalized daily frame from records.
pub(crate) fn daily_frame(records: &[DailyRecord]) -> Result<DataFrame, RentalDataError> {
    let frame = DataFrame::new(vec![
        date_column(records.iter().map(|r| r.date)),
        Column::new(
            COL_IS_WORKING_DAY.into(),
            records.iter().map(|r| r.is_working_day).collect::<Vec<bool>>(),
        ),
        Column::new(
            COL_RENTAL_COUNT.into(),
            records
                .iter()
                .map(|r| r.rental_count as i64)
                .collect::<Vec<i64>>(),
        ),
    ])?;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2011, 1, d).unwrap()
    }

    #[test]
    fn test_daily_frame_preserves_rows() -> Result<(), RentalDataError> {
        let records = vec![
            DailyRecord {
                date: date(2),
                is_working_day: false,
                rental_count: 801,
            },
            DailyRecord {
                date: date(1),
                is_working_day: true,
                rental_count: 985,
            },
        ];
        let df = daily_frame(&records)?;
        assert_eq!(df.height(), 2);
        assert_eq!(df.column(COL_DATE)?.dtype(), &DataType::Date);
        assert_eq!(daily_records(&df)?, records);
        Ok(())
    }

    #[test]
    fn test_invalid_season_code_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let df = DataFrame::new(vec![
            date_column([date(1)]),
            Column::new(COL_HOUR.into(), [0i64]),
            Column::new(COL_YEAR_INDEX.into(), [0i64]),
            Column::new(COL_TEMPERATURE.into(), [0.24f64]),
            Column::new(COL_WEATHER_SITUATION.into(), [1i64]),
            Column::new(COL_SEASON.into(), [7i64]),
            Column::new(COL_RENTAL_COUNT.into(), [16i64]),
        ])?;
        match hourly_records(&df) {
            Err(RentalDataError::InvalidValue { column, row, value }) => {
                assert_eq!(column, COL_SEASON);
                assert_eq!(row, 0);
                assert_eq!(value, "7");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_missing_column_is_reported() -> Result<(), Box<dyn std::error::Error>> {
        let df = DataFrame::new(vec![date_column([date(1)])])?;
        assert!(matches!(
            daily_records(&df),
            Err(RentalDataError::ColumnNotFound(ref name, _)) if name == COL_IS_WORKING_DAY
        ));
        Ok(())
    }
}
