use crate::types::season::Season;
use crate::types::traits::dated::Dated;
use crate::types::weather_situation::WeatherSituation;
use crate::types::year_index::YearIndex;
use chrono::NaiveDate;
use serde::Serialize;

/// One hour of rental observations.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct HourlyRecord {
    pub date: NaiveDate,                      // dteday
    pub hour: u32,                            // hr, 0..=23
    pub year_index: YearIndex,                // yr
    pub temperature: f64,                     // temp (normalized)
    pub weather_situation: WeatherSituation,  // weathersit
    pub season: Season,                       // season
    pub rental_count: u32,                    // cnt
}

impl Dated for HourlyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
