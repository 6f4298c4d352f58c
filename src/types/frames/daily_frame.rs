// daily_frame.rs

//! Contains the `DailyLazyFrame` structure for lazy operations on daily rental data.

use crate::data::extractor::{daily_frame, daily_records};
use crate::data::schema::COL_DATE;
use crate::filtering::RentalFrameFilterExt;
use crate::types::records::daily::DailyRecord;
use crate::types::traits::any_date::AnyDate;
use crate::RentalError;
use polars::prelude::{Expr, IntoLazy, LazyFrame};

/// A wrapper around a Polars `LazyFrame` holding normalized daily rental data
/// (`date`, `is_working_day`, `rental_count`).
///
/// See [`crate::HourlyLazyFrame`] for the shared conventions; the methods here
/// mirror it for daily rows.
#[derive(Clone)]
pub struct DailyLazyFrame {
    /// The underlying Polars LazyFrame containing the daily data.
    pub frame: LazyFrame,
}

impl DailyLazyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    pub fn from_records(records: &[DailyRecord]) -> Result<Self, RentalError> {
        Ok(Self::new(daily_frame(records)?.lazy()))
    }

    pub fn filter(&self, predicate: Expr) -> DailyLazyFrame {
        DailyLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps the days within the given range (inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::DateParsingError`] if `start` or `end` cannot be resolved.
    pub fn get_range(
        &self,
        start: impl AnyDate,
        end: impl AnyDate,
    ) -> Result<DailyLazyFrame, RentalError> {
        let start_date = start
            .get_date_range()
            .ok_or(RentalError::DateParsingError)?
            .start;
        let end_date = end
            .get_date_range()
            .ok_or(RentalError::DateParsingError)?
            .end;
        Ok(DailyLazyFrame::new(
            self.frame
                .clone()
                .filter_date_range(COL_DATE, start_date, end_date),
        ))
    }

    pub fn get_for_period(&self, period: impl AnyDate) -> Result<DailyLazyFrame, RentalError> {
        let period = period
            .get_date_range()
            .ok_or(RentalError::DateParsingError)?;
        self.get_range(period.start, period.end)
    }

    pub fn collect_records(&self) -> Result<Vec<DailyRecord>, RentalError> {
        let df = self.frame.clone().collect()?;
        Ok(daily_records(&df)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Month;
    use chrono::NaiveDate;

    fn day(m: u32, d: u32, count: u32) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2011, m, d).unwrap(),
            is_working_day: d % 7 != 0,
            rental_count: count,
        }
    }

    #[test]
    fn test_get_for_period_month() -> Result<(), RentalError> {
        let daily = DailyLazyFrame::from_records(&[
            day(1, 31, 1),
            day(2, 1, 2),
            day(2, 28, 3),
            day(3, 1, 4),
        ])?;
        let february = daily.get_for_period(Month(2011, 2))?.collect_records()?;
        assert_eq!(
            february.iter().map(|r| r.rental_count).collect::<Vec<_>>(),
            vec![2, 3]
        );
        Ok(())
    }

    #[test]
    fn test_filter_predicate() -> Result<(), RentalError> {
        use crate::data::schema::COL_IS_WORKING_DAY;
        use polars::prelude::col;

        let daily = DailyLazyFrame::from_records(&[day(1, 6, 10), day(1, 7, 20), day(1, 8, 30)])?;
        let weekends = daily.filter(col(COL_IS_WORKING_DAY).not()).collect_records()?;
        assert_eq!(weekends.len(), 1);
        assert!(weekends[0].is_weekend());
        assert_eq!(weekends[0].rental_count, 20);
        Ok(())
    }
}
