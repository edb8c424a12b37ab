//! Dimension row types.
//!
//! Each row carries a dense, 1-based surrogate key assigned by its builder
//! and the source system's natural key (`mongo_id`) for lineage.

use chrono::NaiveDate;

/// One row of `dim_customer`. Administrators never appear here.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRow {
    pub customer_id: i64,
    pub mongo_id: String,
    pub customer_name: String,
    pub email: String,
    /// Date component of the source registration timestamp, when present.
    pub registration_date: Option<NaiveDate>,
    /// Always true; the source system has no deactivation signal.
    pub is_active: bool,
}

/// One row of `dim_product`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub product_id: i64,
    pub mongo_id: String,
    pub product_name: String,
    pub brand: String,
    pub category: String,
    pub current_price: f64,
    /// Truncated to [`crate::schema::DESCRIPTION_MAX_CHARS`] characters.
    pub description: String,
    pub stock_quantity: i64,
}

/// One row of `dim_time`: one row per distinct order date.
///
/// `time_id` is monotonic with `full_date` (ids are assigned in ascending
/// date order), which downstream range queries rely on.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRow {
    pub time_id: i64,
    pub full_date: NaiveDate,
    pub day: i64,
    pub month: i64,
    pub month_name: String,
    pub quarter: i64,
    pub year: i64,
    /// Monday-based weekday index, 0..=6.
    pub day_of_week: i64,
    pub day_name: String,
    /// True iff `day_of_week` is 5 (Saturday) or 6 (Sunday).
    pub is_weekend: bool,
    pub week_of_year: i64,
}

/// One row of `dim_location`, keyed by the (city, governorate) pair.
///
/// Postal code and country come from the first order that introduced the
/// pair; later orders never update them.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRow {
    pub location_id: i64,
    pub city: String,
    pub governorate: String,
    pub postal_code: String,
    pub country: String,
}
