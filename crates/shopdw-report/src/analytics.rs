//! Post-load analytics summary, computed from the in-memory frames.
//!
//! These are the same headline numbers BI dashboards ask for first; having
//! them at the end of a run doubles as a sanity check that the fact table
//! joined up.

use std::collections::BTreeMap;

use anyhow::{Context, Result, anyhow};

use shopdw_core::{WarehouseFrame, any_to_f64, any_to_i64, column_value_string, round2};
use shopdw_model::TableKind;

/// How many categories/products the summary keeps.
const TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductUnits {
    pub product: String,
    pub units: i64,
}

#[derive(Debug, Clone)]
pub struct Analytics {
    /// Revenue over paid fact rows.
    pub total_revenue_paid: f64,
    /// Top categories by paid revenue, descending.
    pub top_categories: Vec<CategoryRevenue>,
    /// Top products by units sold (paid or not), descending.
    pub top_products: Vec<ProductUnits>,
}

fn frame<'a>(frames: &'a [WarehouseFrame], table: TableKind) -> Result<&'a WarehouseFrame> {
    frames
        .iter()
        .find(|frame| frame.table == table)
        .ok_or_else(|| anyhow!("missing {} frame", table))
}

/// Compute the analytics summary from the finished table set.
pub fn compute_analytics(frames: &[WarehouseFrame]) -> Result<Analytics> {
    let products = frame(frames, TableKind::DimProduct)?;
    let facts = frame(frames, TableKind::FactSales)?;

    // product_id -> (name, category)
    let mut product_info: BTreeMap<i64, (String, String)> = BTreeMap::new();
    let product_ids = products
        .data
        .column("product_id")
        .context("dim_product: product_id")?;
    for idx in 0..products.data.height() {
        let Some(id) = product_ids.get(idx).ok().and_then(any_to_i64) else {
            continue;
        };
        product_info.insert(
            id,
            (
                column_value_string(&products.data, "product_name", idx),
                column_value_string(&products.data, "category", idx),
            ),
        );
    }

    let fact_product_ids = facts
        .data
        .column("product_id")
        .context("fact_sales: product_id")?;
    let totals = facts
        .data
        .column("total_amount")
        .context("fact_sales: total_amount")?;
    let quantities = facts.data.column("quantity").context("fact_sales: quantity")?;
    let paid_flags = facts.data.column("is_paid").context("fact_sales: is_paid")?;

    let mut total_revenue_paid = 0.0f64;
    let mut category_revenue: BTreeMap<String, f64> = BTreeMap::new();
    let mut product_units: BTreeMap<String, i64> = BTreeMap::new();

    for idx in 0..facts.data.height() {
        let amount = totals.get(idx).ok().and_then(any_to_f64).unwrap_or(0.0);
        let quantity = quantities.get(idx).ok().and_then(any_to_i64).unwrap_or(0);
        let is_paid = paid_flags
            .get(idx)
            .ok()
            .and_then(any_to_f64)
            .unwrap_or(0.0)
            != 0.0;
        let info = fact_product_ids
            .get(idx)
            .ok()
            .and_then(any_to_i64)
            .and_then(|id| product_info.get(&id));

        if is_paid {
            total_revenue_paid += amount;
            if let Some((_, category)) = info {
                *category_revenue.entry(category.clone()).or_insert(0.0) += amount;
            }
        }
        if let Some((name, _)) = info {
            *product_units.entry(name.clone()).or_insert(0) += quantity;
        }
    }

    let mut top_categories: Vec<CategoryRevenue> = category_revenue
        .into_iter()
        .map(|(category, revenue)| CategoryRevenue {
            category,
            revenue: round2(revenue),
        })
        .collect();
    top_categories.sort_by(|a, b| {
        b.revenue
            .partial_cmp(&a.revenue)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    top_categories.truncate(TOP_N);

    let mut top_products: Vec<ProductUnits> = product_units
        .into_iter()
        .map(|(product, units)| ProductUnits { product, units })
        .collect();
    top_products.sort_by(|a, b| b.units.cmp(&a.units).then_with(|| a.product.cmp(&b.product)));
    top_products.truncate(TOP_N);

    Ok(Analytics {
        total_revenue_paid: round2(total_revenue_paid),
        top_categories,
        top_products,
    })
}
