//! Column names of the source CSVs and of the normalized frames, plus the
//! expressions that turn one into the other.

use polars::prelude::{col, lit, DataType, Expr, StrptimeOptions};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;

// Normalized, shared
pub const COL_DATE: &str = "date";
pub const COL_RENTAL_COUNT: &str = "rental_count";

// Normalized, hourly
pub const COL_HOUR: &str = "hour";
pub const COL_YEAR_INDEX: &str = "year_index";
pub const COL_TEMPERATURE: &str = "temperature";
pub const COL_WEATHER_SITUATION: &str = "weather_situation";
pub const COL_SEASON: &str = "season";

// Normalized, daily
pub const COL_IS_WORKING_DAY: &str = "is_working_day";

// Source CSV columns
const SRC_DATE: &str = "dteday";
const SRC_HOUR: &str = "hr";
const SRC_YEAR: &str = "yr";
const SRC_TEMP: &str = "temp";
const SRC_WEATHER: &str = "weathersit";
const SRC_SEASON: &str = "season";
const SRC_WORKING_DAY: &str = "workingday";
const SRC_COUNT: &str = "cnt";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The two tables of the rental dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSource {
    /// `hour.csv`: one row per date and hour.
    Hourly,
    /// `day.csv`: one row per date.
    Daily,
}

impl DataSource {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            DataSource::Hourly => "hourly",
            DataSource::Daily => "daily",
        }
    }

    pub(crate) fn default_file_name(&self) -> &'static str {
        match self {
            DataSource::Hourly => "hour.csv",
            DataSource::Daily => "day.csv",
        }
    }

    /// Parquet file name for the normalized frame of `csv_path`, unique per source file.
    pub(crate) fn cache_file_name(&self, csv_path: &Path) -> String {
        let mut hasher = DefaultHasher::new();
        csv_path.hash(&mut hasher);
        format!("{}_{:016x}.parquet", self.name(), hasher.finish())
    }

    /// Source columns that must be present in the CSV header.
    pub(crate) fn source_columns(&self) -> &'static [&'static str] {
        match self {
            DataSource::Hourly => &[
                SRC_DATE,
                SRC_HOUR,
                SRC_YEAR,
                SRC_TEMP,
                SRC_WEATHER,
                SRC_SEASON,
                SRC_COUNT,
            ],
            DataSource::Daily => &[SRC_DATE, SRC_WORKING_DAY, SRC_COUNT],
        }
    }

    /// Expressions selecting, parsing and renaming the source columns into the normalized schema.
    pub(crate) fn normalize_exprs(&self) -> Vec<Expr> {
        match self {
            DataSource::Hourly => vec![
                parse_date(),
                col(SRC_HOUR).cast(DataType::Int64).alias(COL_HOUR),
                col(SRC_YEAR).cast(DataType::Int64).alias(COL_YEAR_INDEX),
                col(SRC_TEMP).cast(DataType::Float64).alias(COL_TEMPERATURE),
                col(SRC_WEATHER)
                    .cast(DataType::Int64)
                    .alias(COL_WEATHER_SITUATION),
                col(SRC_SEASON).cast(DataType::Int64).alias(COL_SEASON),
                col(SRC_COUNT).cast(DataType::Int64).alias(COL_RENTAL_COUNT),
            ],
            DataSource::Daily => vec![
                parse_date(),
                col(SRC_WORKING_DAY)
                    .cast(DataType::Int64)
                    .eq(lit(1i64))
                    .alias(COL_IS_WORKING_DAY),
                col(SRC_COUNT).cast(DataType::Int64).alias(COL_RENTAL_COUNT),
            ],
        }
    }
}

fn parse_date() -> Expr {
    col(SRC_DATE)
        .cast(DataType::String)
        .str()
        .to_date(StrptimeOptions {
            format: Some(DATE_FORMAT.into()),
            ..Default::default()
        })
        .alias(COL_DATE)
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_file_name_depends_on_source_path() {
        let a = DataSource::Daily.cache_file_name(Path::new("/data/a/day.csv"));
        let b = DataSource::Daily.cache_file_name(Path::new("/data/b/day.csv"));
        assert_ne!(a, b);
        assert_eq!(a, DataSource::Daily.cache_file_name(Path::new("/data/a/day.csv")));
        assert!(a.starts_with("daily_") && a.ends_with(".parquet"));
    }

    #[test]
    fn test_cache_file_name_differs_per_table() {
        let path = Path::new("/data/shared.csv");
        assert_ne!(
            DataSource::Hourly.cache_file_name(path),
            DataSource::Daily.cache_file_name(path)
        );
    }
}
