//! demos/filter_by_year.rs
//!
//! Filters typed records in memory and dumps one year's summary as JSON.
//!
//! To run this example:
//! cargo run --example filter_by_year -- <data_dir> <year>

use bikeshare::{filter_by_date_range, AnyDate, DashboardSummary, RentalDataLoader, Year};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let data_dir = args.next().unwrap_or_else(|| "data".to_string());
    let year = Year(args.next().map(|y| y.parse()).transpose()?.unwrap_or(2012));

    let dataset = RentalDataLoader::builder()
        .data_dir(data_dir)
        .build()
        .load()
        .await?;

    // Record-level filtering on already collected rows
    let range = year.get_date_range().ok_or("invalid year")?;
    let daily = dataset.daily().collect_records()?;
    let in_year = filter_by_date_range(&daily, range.start, range.end);
    let weekend_days = in_year.iter().filter(|d| d.is_weekend()).count();
    println!(
        "{}: {} days, {} weekend or holiday",
        year,
        in_year.len(),
        weekend_days
    );

    // Frame-level filtering for the aggregations
    let summary = DashboardSummary::compute(&dataset.get_for_period(year)?)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
