//! Time dimension builder.
//!
//! One row per distinct calendar date appearing in any order's creation
//! timestamp. Ids are assigned in ascending date order, so `time_id` is
//! monotonic with `full_date` — a designed invariant, not a side effect of
//! the collection order.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use shopdw_ingest::OrderRecord;
use shopdw_model::TimeRow;

/// Build `dim_time` from the order collection's creation timestamps.
/// Orders without a parseable timestamp contribute nothing.
pub fn build_time_dimension(orders: &[OrderRecord]) -> Vec<TimeRow> {
    let dates: BTreeSet<NaiveDate> = orders
        .iter()
        .filter_map(|order| order.created_at.map(|dt| dt.date()))
        .collect();
    dates
        .into_iter()
        .enumerate()
        .map(|(index, date)| calendar_row(index as i64 + 1, date))
        .collect()
}

/// Derive all calendar attributes for one date.
///
/// `day_of_week` uses the Monday-0 convention, so the weekend flag covers
/// indices 5 (Saturday) and 6 (Sunday). `week_of_year` is the ISO 8601
/// week number.
pub fn calendar_row(time_id: i64, date: NaiveDate) -> TimeRow {
    let month = i64::from(date.month());
    let day_of_week = i64::from(date.weekday().num_days_from_monday());
    TimeRow {
        time_id,
        full_date: date,
        day: i64::from(date.day()),
        month,
        month_name: date.format("%B").to_string(),
        quarter: (month - 1) / 3 + 1,
        year: i64::from(date.year()),
        day_of_week,
        day_name: date.format("%A").to_string(),
        is_weekend: day_of_week >= 5,
        week_of_year: i64::from(date.iso_week().week()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_calendar_attributes() {
        // 2025-01-04 is a Saturday in ISO week 1.
        let row = calendar_row(1, NaiveDate::from_ymd_opt(2025, 1, 4).expect("date"));
        assert_eq!(row.day, 4);
        assert_eq!(row.month, 1);
        assert_eq!(row.month_name, "January");
        assert_eq!(row.quarter, 1);
        assert_eq!(row.year, 2025);
        assert_eq!(row.day_of_week, 5);
        assert_eq!(row.day_name, "Saturday");
        assert!(row.is_weekend);
        assert_eq!(row.week_of_year, 1);
    }

    #[test]
    fn quarter_boundaries() {
        let dates = [
            (3, 1),
            (4, 2),
            (6, 2),
            (7, 3),
            (9, 3),
            (10, 4),
            (12, 4),
        ];
        for (month, quarter) in dates {
            let row = calendar_row(1, NaiveDate::from_ymd_opt(2025, month, 15).expect("date"));
            assert_eq!(row.quarter, quarter, "month {month}");
        }
    }
}
