//! demos/dashboard_summary.rs
//!
//! Loads the bike sharing CSVs and prints the numbers behind each dashboard chart.
//!
//! To run this example:
//! cargo run --example dashboard_summary -- <data_dir> [start] [end]

use bikeshare::{
    DashboardSummary, RentalDataLoader, Season, WeatherSituation, YearIndex, HOURS_PER_DAY,
};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let data_dir = args.next().unwrap_or_else(|| "data".to_string());

    // 1. Load both tables once
    let dataset = RentalDataLoader::with_default_cache(&data_dir)
        .await?
        .load()
        .await?;

    // 2. Default to the full range covered by the data
    let Some(bounds) = dataset.date_bounds()? else {
        println!("No hourly rows in {}", data_dir);
        return Ok(());
    };
    let start = args.next().unwrap_or_else(|| bounds.start.to_string());
    let end = args.next().unwrap_or_else(|| bounds.end.to_string());

    // 3. Compute every series for the selected range
    let summary = DashboardSummary::compute(&dataset.get_range(start.as_str(), end.as_str())?)?;

    println!("Rentals by time of day ({} to {})", start, end);
    print!("hour");
    for year in YearIndex::ALL {
        print!(" {:>10}", year);
    }
    println!();
    for hour in 0..HOURS_PER_DAY {
        print!("{:>4}", hour);
        for year in YearIndex::ALL {
            print!(" {:>10.1}", summary.hourly_profile.series(year)[hour]);
        }
        println!();
    }

    println!("\nWorkday vs weekend");
    match summary.weekend_insight() {
        Ok(insight) => println!("{}", insight),
        Err(e) => println!("No comparison available: {}", e),
    }

    println!("\nTemperature vs rentals: {} points", summary.scatter.len());

    println!("\nAverage rentals by season and weather");
    for season in Season::ALL {
        let cells: Vec<String> = WeatherSituation::ALL
            .iter()
            .map(|weather| match summary.season_weather.get(season, *weather) {
                Ok(mean) => format!("{:>8.1}", mean),
                Err(_) => format!("{:>8}", "-"),
            })
            .collect();
        println!("{:<8}{}", season, cells.join(""));
    }
    Ok(())
}
