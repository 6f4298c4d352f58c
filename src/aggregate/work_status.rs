use crate::aggregate::error::{AggregateError, Group};
use crate::data::schema::{COL_IS_WORKING_DAY, COL_RENTAL_COUNT};
use crate::types::frames::daily_frame::DailyLazyFrame;
use crate::RentalError;
use polars::prelude::{col, DataType, Expr};
use serde::Serialize;

const COL_WORKDAY_MEAN: &str = "workday_mean";
const COL_WEEKEND_MEAN: &str = "weekend_mean";

/// Mean daily rentals on working days versus weekends and holidays.
///
/// A `None` field means the group had no days in range. That is not the same
/// as a mean of zero and the accessors report it as [`AggregateError::EmptyGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkStatusAverages {
    pub workday: Option<f64>,
    pub weekend: Option<f64>,
}

impl WorkStatusAverages {
    pub fn workday_mean(&self) -> Result<f64, AggregateError> {
        self.workday
            .ok_or(AggregateError::EmptyGroup(Group::Workday))
    }

    pub fn weekend_mean(&self) -> Result<f64, AggregateError> {
        self.weekend
            .ok_or(AggregateError::EmptyGroup(Group::Weekend))
    }

    /// `(weekend - workday) / workday * 100`.
    ///
    /// Negative when weekends see fewer rentals.
    ///
    /// # Errors
    ///
    /// [`AggregateError::EmptyGroup`] when either group is empty and
    /// [`AggregateError::ZeroBaseline`] when the workday mean is zero.
    pub fn weekend_change_percent(&self) -> Result<f64, AggregateError> {
        let workday = self.workday_mean()?;
        let weekend = self.weekend_mean()?;
        if workday == 0.0 {
            return Err(AggregateError::ZeroBaseline);
        }
        Ok((weekend - workday) / workday * 100.0)
    }
}

fn group_mean(predicate: Expr, name: &str) -> Expr {
    col(COL_RENTAL_COUNT)
        .cast(DataType::Float64)
        .filter(predicate)
        .mean()
        .alias(name)
}

/// Averages daily `rental_count` separately for working days and for the rest.
///
/// ```rust
/// # use bikeshare::{average_rentals_by_work_status, DailyLazyFrame, DailyRecord};
/// # use chrono::NaiveDate;
/// let day = |d, is_working_day, rental_count| DailyRecord {
///     date: NaiveDate::from_ymd_opt(2011, 1, d).unwrap(),
///     is_working_day,
///     rental_count,
/// };
/// let daily = DailyLazyFrame::from_records(&[day(3, true, 100), day(4, true, 200), day(8, false, 150)])?;
///
/// let averages = average_rentals_by_work_status(&daily)?;
/// assert_eq!(averages.workday, Some(150.0));
/// assert_eq!(averages.weekend, Some(150.0));
/// # Ok::<(), bikeshare::RentalError>(())
/// ```
pub fn average_rentals_by_work_status(
    daily: &DailyLazyFrame,
) -> Result<WorkStatusAverages, RentalError> {
    let df = daily
        .frame
        .clone()
        .select([
            group_mean(col(COL_IS_WORKING_DAY), COL_WORKDAY_MEAN),
            group_mean(col(COL_IS_WORKING_DAY).not(), COL_WEEKEND_MEAN),
        ])
        .collect()?;

    Ok(WorkStatusAverages {
        workday: df.column(COL_WORKDAY_MEAN)?.f64()?.get(0),
        weekend: df.column(COL_WEEKEND_MEAN)?.f64()?.get(0),
    })
}
