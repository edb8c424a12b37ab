//! Fact row type.

/// One row of `fact_sales`: grain is one order line item.
///
/// `customer_id`, `product_id`, and `time_id` always reference existing
/// dimension rows; orders or items that cannot be resolved are dropped by
/// the fact builder instead of being emitted with dangling keys.
/// `location_id` is `None` only in the degenerate case where `dim_location`
/// is empty and the first-row fallback has nothing to point at.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesFactRow {
    pub sale_id: i64,
    pub time_id: i64,
    pub product_id: i64,
    pub customer_id: i64,
    pub location_id: Option<i64>,
    /// Natural key of the owning order, kept for traceability.
    pub order_mongo_id: String,
    pub quantity: i64,
    pub unit_price: f64,
    /// `unit_price * quantity`, rounded to 2 decimals.
    pub total_amount: f64,
    /// Order-level tax divided evenly across the order's original item
    /// count, rounded to 2 decimals.
    pub tax_amount: f64,
    /// Order-level shipping divided the same way as tax.
    pub shipping_amount: f64,
    pub payment_method: String,
    pub order_status: String,
    pub is_paid: bool,
    pub is_delivered: bool,
}
