use crate::aggregate::error::AggregateError;
use crate::aggregate::hourly_profile::{hourly_average_by_hour_and_year, HourlyProfile};
use crate::aggregate::scatter::{scatter_points_temperature_vs_rentals, ScatterPoint};
use crate::aggregate::season_weather::{
    average_rentals_by_season_and_weather, SeasonWeatherAverages,
};
use crate::aggregate::work_status::{average_rentals_by_work_status, WorkStatusAverages};
use crate::dataset::RentalDataset;
use crate::types::traits::types::StartEndDate;
use crate::RentalError;
use log::debug;
use serde::Serialize;

/// All four chart series for one filtered view of the data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// First and last hourly date in the view, `None` when it is empty.
    pub date_bounds: Option<StartEndDate>,
    pub hourly_profile: HourlyProfile,
    pub work_status: WorkStatusAverages,
    pub scatter: Vec<ScatterPoint>,
    pub season_weather: SeasonWeatherAverages,
}

impl DashboardSummary {
    /// Computes every series of `dataset`. Filter the dataset first to summarize a date range.
    pub fn compute(dataset: &RentalDataset) -> Result<Self, RentalError> {
        let summary = Self {
            date_bounds: dataset.date_bounds()?,
            hourly_profile: hourly_average_by_hour_and_year(dataset.hourly())?,
            work_status: average_rentals_by_work_status(dataset.daily())?,
            scatter: scatter_points_temperature_vs_rentals(dataset.hourly())?,
            season_weather: average_rentals_by_season_and_weather(dataset.hourly())?,
        };
        debug!(
            "Summarized {} hourly points over {:?}",
            summary.scatter.len(),
            summary.date_bounds
        );
        Ok(summary)
    }

    /// One-line description of how weekend rentals compare to workdays.
    pub fn weekend_insight(&self) -> Result<String, AggregateError> {
        let change = self.work_status.weekend_change_percent()?;
        if change == 0.0 {
            return Ok("Weekend rentals are equal to workday rentals.".to_string());
        }
        let direction = if change < 0.0 { "lower" } else { "higher" };
        Ok(format!(
            "Weekend rentals are {:.2}% {} than workday rentals.",
            change.abs(),
            direction
        ))
    }
}
