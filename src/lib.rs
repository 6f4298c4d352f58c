//! Load, filter and aggregate hourly and daily bike rental data.
//!
//! ```no_run
//! use bikeshare::{DashboardSummary, RentalDataLoader, RentalError};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), RentalError> {
//! let dataset = RentalDataLoader::builder().data_dir("data").build().load().await?;
//! let summary = DashboardSummary::compute(&dataset.get_range("2011-06-01", "2011-08-31")?)?;
//! println!("{:?}", summary.hourly_profile.first_year);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
mod data;
mod dataset;
mod error;
mod filtering;
mod types;
mod utils;

pub use dataset::RentalDataset;
pub use error::RentalError;
pub use filtering::{filter_by_date_range, RentalFrameFilterExt};

pub use data::data_loader::RentalDataLoader;
pub use data::error::RentalDataError;
pub use data::schema::DataSource;

pub use aggregate::error::{AggregateError, Group};
pub use aggregate::hourly_profile::{hourly_average_by_hour_and_year, HourlyProfile, HOURS_PER_DAY};
pub use aggregate::scatter::{scatter_points_temperature_vs_rentals, ScatterPoint};
pub use aggregate::season_weather::{
    average_rentals_by_season_and_weather, SeasonWeatherAverages, SeasonWeatherMean,
};
pub use aggregate::summary::DashboardSummary;
pub use aggregate::work_status::{average_rentals_by_work_status, WorkStatusAverages};

pub use types::frames::daily_frame::DailyLazyFrame;
pub use types::frames::hourly_frame::HourlyLazyFrame;
pub use types::records::daily::DailyRecord;
pub use types::records::hourly::HourlyRecord;
pub use types::season::Season;
pub use types::weather_situation::WeatherSituation;
pub use types::year_index::YearIndex;

pub use types::traits::any_date::AnyDate;
pub use types::traits::dated::Dated;
pub use types::traits::types::{Month, StartEndDate, Year};
