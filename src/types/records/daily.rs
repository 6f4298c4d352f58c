use crate::types::traits::dated::Dated;
use chrono::NaiveDate;
use serde::Serialize;

/// One day of rental observations.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,      // dteday
    pub is_working_day: bool, // workingday == 1
    pub rental_count: u32,    // cnt
}

impl DailyRecord {
    /// Weekends and holidays. Always the negation of `is_working_day`.
    pub fn is_weekend(&self) -> bool {
        !self.is_working_day
    }
}

impl Dated for DailyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
