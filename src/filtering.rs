use crate::types::traits::dated::Dated;
use chrono::NaiveDate;
use log::debug;
use polars::prelude::{col, lit, DataType, LazyFrame};

/// Returns the records whose date lies in `[start, end]`, in their original order.
///
/// A reversed range (`start > end`) or a range outside the data yields an
/// empty vector, never an error.
///
/// ```rust
/// use bikeshare::{filter_by_date_range, DailyRecord};
/// use chrono::NaiveDate;
///
/// let day = |d| DailyRecord {
///     date: NaiveDate::from_ymd_opt(2012, 6, d).unwrap(),
///     is_working_day: true,
///     rental_count: d,
/// };
/// let records = vec![day(3), day(1), day(2)];
/// let start = NaiveDate::from_ymd_opt(2012, 6, 2).unwrap();
/// let end = NaiveDate::from_ymd_opt(2012, 6, 3).unwrap();
///
/// let kept = filter_by_date_range(&records, start, end);
/// assert_eq!(kept, vec![day(3), day(2)]);
/// ```
pub fn filter_by_date_range<R: Dated + Clone>(
    records: &[R],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<R> {
    if start > end {
        debug!("Reversed date range {} > {}, returning no records", start, end);
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| {
            let date = r.date();
            start <= date && date <= end
        })
        .cloned()
        .collect()
}

pub trait RentalFrameFilterExt {
    /// Filters a LazyFrame on an inclusive range of a Date column.
    ///
    /// # Arguments
    /// * `column`: Name of the Date column to compare.
    /// * `start`: The start date (inclusive).
    /// * `end`: The end date (inclusive).
    ///
    /// # Returns
    /// A new `LazyFrame` with the filter applied. Type errors surface on `collect`.
    fn filter_date_range(self, column: &str, start: NaiveDate, end: NaiveDate) -> LazyFrame;
}

impl RentalFrameFilterExt for LazyFrame {
    fn filter_date_range(self, column: &str, start: NaiveDate, end: NaiveDate) -> LazyFrame {
        if start > end {
            debug!("Reversed date range {} > {} on '{}'", start, end, column);
        }
        self.filter(
            col(column)
                .cast(DataType::Date)
                .gt_eq(lit(start))
                .and(col(column).cast(DataType::Date).lt_eq(lit(end))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::records::daily::DailyRecord;
    use crate::DailyLazyFrame;
    use proptest::prelude::*;

    fn day(offset: u32, count: u32) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap() + chrono::Days::new(offset as u64),
            is_working_day: offset % 7 < 5,
            rental_count: count,
        }
    }

    fn nth_day(offset: u32) -> NaiveDate {
        day(offset, 0).date
    }

    #[test]
    fn test_inclusive_bounds() {
        let records: Vec<_> = (0..10).map(|i| day(i, i)).collect();
        let kept = filter_by_date_range(&records, nth_day(2), nth_day(4));
        assert_eq!(
            kept.iter().map(|r| r.rental_count).collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
    }

    #[test]
    fn test_reversed_and_disjoint_ranges_are_empty() {
        let records: Vec<_> = (0..10).map(|i| day(i, i)).collect();
        assert!(filter_by_date_range(&records, nth_day(5), nth_day(1)).is_empty());
        assert!(filter_by_date_range(&records, nth_day(50), nth_day(60)).is_empty());
    }

    #[test]
    fn test_frame_filter_matches_record_filter() -> Result<(), crate::RentalError> {
        let records: Vec<_> = [4, 0, 9, 2, 7, 3].into_iter().map(|i| day(i, i)).collect();
        let frame = DailyLazyFrame::from_records(&records)?;
        let from_frame = DailyLazyFrame::new(frame.frame.filter_date_range(
            crate::data::schema::COL_DATE,
            nth_day(2),
            nth_day(7),
        ))
        .collect_records()?;
        assert_eq!(
            from_frame,
            filter_by_date_range(&records, nth_day(2), nth_day(7))
        );
        Ok(())
    }

    fn arb_records() -> impl Strategy<Value = Vec<DailyRecord>> {
        prop::collection::vec((0u32..60, 0u32..5000), 0..40)
            .prop_map(|rows| rows.into_iter().map(|(o, c)| day(o, c)).collect())
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(records in arb_records(), a in 0u32..60, b in 0u32..60) {
            let once = filter_by_date_range(&records, nth_day(a), nth_day(b));
            let twice = filter_by_date_range(&once, nth_day(a), nth_day(b));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_narrower_range_is_subset(
            records in arb_records(),
            a in 0u32..60,
            len in 0u32..30,
            inset in 0u32..15,
        ) {
            let outer = filter_by_date_range(&records, nth_day(a), nth_day(a + len));
            let inner_start = a + inset.min(len);
            let inner = filter_by_date_range(&records, nth_day(inner_start), nth_day(a + len));
            prop_assert!(inner.len() <= outer.len());
            for record in &inner {
                prop_assert!(outer.contains(record));
            }
        }

        #[test]
        fn prop_output_keeps_relative_order(records in arb_records(), a in 0u32..60, b in 0u32..60) {
            let kept = filter_by_date_range(&records, nth_day(a), nth_day(b));
            let expected: Vec<_> = records
                .iter()
                .filter(|r| nth_day(a) <= r.date && r.date <= nth_day(b))
                .cloned()
                .collect();
            prop_assert_eq!(kept, expected);
        }
    }
}
