// hourly_frame.rs

//! Contains the `HourlyLazyFrame` structure for lazy operations on hourly rental data.

use crate::data::extractor::{hourly_frame, hourly_records};
use crate::data::schema::COL_DATE;
use crate::filtering::RentalFrameFilterExt;
use crate::types::records::hourly::HourlyRecord;
use crate::types::traits::any_date::AnyDate;
use crate::RentalError;
use polars::prelude::{Expr, IntoLazy, LazyFrame};

/// A wrapper around a Polars `LazyFrame` holding normalized hourly rental data.
///
/// The frame has the columns `date` (Date), `hour`, `year_index`,
/// `weather_situation`, `season`, `rental_count` (Int64) and `temperature`
/// (Float64). Instances come from [`crate::RentalDataLoader::load`] or
/// [`HourlyLazyFrame::from_records`].
///
/// Every method returns a *new* frame; the wrapped `LazyFrame` is never mutated.
///
/// # Errors
///
/// Operations that trigger computation (`collect`, `collect_records`, the
/// aggregations in [`crate::aggregate`]) can return a [`polars::prelude::PolarsError`]
/// wrapped in [`RentalError`].
#[derive(Clone)]
pub struct HourlyLazyFrame {
    /// The underlying Polars LazyFrame containing the hourly data.
    pub frame: LazyFrame,
}

impl HourlyLazyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Builds a frame from typed records, preserving their order.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use bikeshare::{HourlyLazyFrame, HourlyRecord, Season, WeatherSituation, YearIndex};
    /// # use chrono::NaiveDate;
    /// let record = HourlyRecord {
    ///     date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
    ///     hour: 8,
    ///     year_index: YearIndex::First,
    ///     temperature: 0.24,
    ///     weather_situation: WeatherSituation::Clear,
    ///     season: Season::Spring,
    ///     rental_count: 42,
    /// };
    /// let hourly = HourlyLazyFrame::from_records(&[record.clone()])?;
    /// assert_eq!(hourly.collect_records()?, vec![record]);
    /// # Ok::<(), bikeshare::RentalError>(())
    /// ```
    pub fn from_records(records: &[HourlyRecord]) -> Result<Self, RentalError> {
        Ok(Self::new(hourly_frame(records)?.lazy()))
    }

    /// Filters the hourly data based on a Polars predicate expression.
    pub fn filter(&self, predicate: Expr) -> HourlyLazyFrame {
        HourlyLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps the hours whose `date` lies within the given range (inclusive).
    ///
    /// `start` resolves to the first day of its period and `end` to the last,
    /// so `get_range(Year(2011), Month(2012, 3))` covers 2011-01-01 through
    /// 2012-03-31. The `hour` column is not consulted. A reversed range yields
    /// an empty frame.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::DateParsingError`] if `start` or `end` cannot be resolved.
    pub fn get_range(
        &self,
        start: impl AnyDate,
        end: impl AnyDate,
    ) -> Result<HourlyLazyFrame, RentalError> {
        let start_date = start
            .get_date_range()
            .ok_or(RentalError::DateParsingError)?
            .start;
        let end_date = end
            .get_date_range()
            .ok_or(RentalError::DateParsingError)?
            .end;
        Ok(HourlyLazyFrame::new(
            self.frame
                .clone()
                .filter_date_range(COL_DATE, start_date, end_date),
        ))
    }

    /// Keeps the hours falling within a single period such as a [`crate::Year`] or day.
    pub fn get_for_period(&self, period: impl AnyDate) -> Result<HourlyLazyFrame, RentalError> {
        let period = period
            .get_date_range()
            .ok_or(RentalError::DateParsingError)?;
        self.get_range(period.start, period.end)
    }

    /// Collects the frame into typed records, in frame order.
    pub fn collect_records(&self) -> Result<Vec<HourlyRecord>, RentalError> {
        let df = self.frame.clone().collect()?;
        Ok(hourly_records(&df)?)
    }
}
