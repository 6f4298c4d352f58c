use crate::types::traits::types::{Month, StartEndDate, Year};
use chrono::{Months, NaiveDate};

/// Anything that resolves to an inclusive span of calendar days.
///
/// A single `NaiveDate` resolves to itself, a [`Year`] or [`Month`] to its first
/// and last day, and a `"YYYY-MM-DD"` string to the date it names. Range methods
/// take the *start* of the start argument and the *end* of the end argument, so
/// `get_range(Year(2011), Year(2011))` covers the whole year.
pub trait AnyDate {
    fn get_date_range(self) -> Option<StartEndDate>;
}

impl AnyDate for NaiveDate {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: self,
            end: self,
        })
    }
}

impl AnyDate for &str {
    fn get_date_range(self) -> Option<StartEndDate> {
        NaiveDate::parse_from_str(self.trim(), "%Y-%m-%d")
            .ok()?
            .get_date_range()
    }
}

impl AnyDate for String {
    fn get_date_range(self) -> Option<StartEndDate> {
        self.as_str().get_date_range()
    }
}

impl AnyDate for Year {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: NaiveDate::from_ymd_opt(self.0, 1, 1)?,
            end: NaiveDate::from_ymd_opt(self.0, 12, 31)?,
        })
    }
}

impl AnyDate for Month {
    fn get_date_range(self) -> Option<StartEndDate> {
        let start = NaiveDate::from_ymd_opt(self.year(), self.month(), 1)?;
        let end = start.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(StartEndDate { start, end })
    }
}

impl AnyDate for StartEndDate {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_string_dates() {
        let range = "2011-03-04".get_date_range().unwrap();
        assert_eq!(range.start, date(2011, 3, 4));
        assert_eq!(range.end, date(2011, 3, 4));
        assert!("04/03/2011".get_date_range().is_none());
        assert!(String::from("not a date").get_date_range().is_none());
    }

    #[test]
    fn test_year_covers_whole_year() {
        let range = Year(2012).get_date_range().unwrap();
        assert_eq!(range.start, date(2012, 1, 1));
        assert_eq!(range.end, date(2012, 12, 31));
    }

    #[test]
    fn test_month_ends() {
        assert_eq!(
            Month(2012, 2).get_date_range().unwrap().end,
            date(2012, 2, 29)
        );
        assert_eq!(
            Month(2011, 12).get_date_range().unwrap().end,
            date(2011, 12, 31)
        );
        assert!(Month(2011, 13).get_date_range().is_none());
    }
}
