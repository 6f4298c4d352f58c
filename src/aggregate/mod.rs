//! The derived series behind the dashboard charts.
//!
//! Every function here is pure: it reads a (usually date-filtered) frame and
//! returns a new value, never touching the input.

pub mod error;
pub mod hourly_profile;
pub mod scatter;
pub mod season_weather;
pub mod summary;
pub mod work_status;

const COL_MEAN: &str = "mean_rentals";
