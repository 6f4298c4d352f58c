use chrono::NaiveDate;

/// A record keyed by a calendar date.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}
