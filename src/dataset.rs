//! The loaded rental dataset, passed explicitly to every aggregation.

use crate::data::schema::COL_DATE;
use crate::types::frames::daily_frame::DailyLazyFrame;
use crate::types::frames::hourly_frame::HourlyLazyFrame;
use crate::types::records::daily::DailyRecord;
use crate::types::records::hourly::HourlyRecord;
use crate::types::traits::any_date::AnyDate;
use crate::types::traits::types::StartEndDate;
use crate::RentalError;
use polars::prelude::col;

const COL_FIRST_DATE: &str = "first_date";
const COL_LAST_DATE: &str = "last_date";

/// The hourly and daily tables, immutable once loaded.
///
/// Filtering returns a new `RentalDataset`; the original stays untouched, so a
/// dataset can be loaded once and re-filtered whenever the selected range changes.
#[derive(Clone)]
pub struct RentalDataset {
    hourly: HourlyLazyFrame,
    daily: DailyLazyFrame,
}

impl RentalDataset {
    pub fn new(hourly: HourlyLazyFrame, daily: DailyLazyFrame) -> Self {
        Self { hourly, daily }
    }

    pub fn from_records(
        hourly: &[HourlyRecord],
        daily: &[DailyRecord],
    ) -> Result<Self, RentalError> {
        Ok(Self::new(
            HourlyLazyFrame::from_records(hourly)?,
            DailyLazyFrame::from_records(daily)?,
        ))
    }

    pub fn hourly(&self) -> &HourlyLazyFrame {
        &self.hourly
    }

    pub fn daily(&self) -> &DailyLazyFrame {
        &self.daily
    }

    /// Filters both tables to `[start, end]` (inclusive).
    ///
    /// A range outside the data, or a reversed one, gives empty tables. Clamping
    /// to [`RentalDataset::date_bounds`] is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::DateParsingError`] if `start` or `end` cannot be resolved.
    pub fn get_range(
        &self,
        start: impl AnyDate,
        end: impl AnyDate,
    ) -> Result<RentalDataset, RentalError> {
        let range = StartEndDate {
            start: start
                .get_date_range()
                .ok_or(RentalError::DateParsingError)?
                .start,
            end: end
                .get_date_range()
                .ok_or(RentalError::DateParsingError)?
                .end,
        };
        Ok(Self::new(
            self.hourly.get_range(range, range)?,
            self.daily.get_range(range, range)?,
        ))
    }

    pub fn get_for_period(&self, period: impl AnyDate) -> Result<RentalDataset, RentalError> {
        let period = period
            .get_date_range()
            .ok_or(RentalError::DateParsingError)?;
        self.get_range(period, period)
    }

    /// Earliest and latest date of the hourly table, `None` when it has no rows.
    pub fn date_bounds(&self) -> Result<Option<StartEndDate>, RentalError> {
        let df = self
            .hourly
            .frame
            .clone()
            .select([
                col(COL_DATE).min().alias(COL_FIRST_DATE),
                col(COL_DATE).max().alias(COL_LAST_DATE),
            ])
            .collect()?;
        let first = df.column(COL_FIRST_DATE)?.date()?.as_date_iter().next().flatten();
        let last = df.column(COL_LAST_DATE)?.date()?.as_date_iter().next().flatten();
        Ok(first
            .zip(last)
            .map(|(start, end)| StartEndDate { start, end }))
    }
}
