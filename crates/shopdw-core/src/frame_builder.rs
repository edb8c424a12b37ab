//! DataFrame construction from typed dimension and fact rows.
//!
//! Column order here follows [`TableKind::columns`] exactly; the CSV export
//! and the generated SQL both rely on that ordering.

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use shopdw_model::{CustomerRow, LocationRow, ProductRow, SalesFactRow, TableKind, TimeRow};

use crate::frame::WarehouseFrame;

fn column<T>(name: &str, values: Vec<T>) -> Column
where
    Series: NamedFrom<Vec<T>, [T]>,
{
    Series::new(name.into(), values).into_column()
}

pub fn customer_frame(rows: &[CustomerRow]) -> Result<WarehouseFrame> {
    let data = DataFrame::new(vec![
        column("customer_id", rows.iter().map(|r| r.customer_id).collect()),
        column("mongo_id", rows.iter().map(|r| r.mongo_id.clone()).collect()),
        column(
            "customer_name",
            rows.iter().map(|r| r.customer_name.clone()).collect(),
        ),
        column("email", rows.iter().map(|r| r.email.clone()).collect()),
        column(
            "registration_date",
            rows.iter()
                .map(|r| r.registration_date.map(|date| date.to_string()))
                .collect::<Vec<Option<String>>>(),
        ),
        column("is_active", rows.iter().map(|r| r.is_active).collect()),
    ])
    .context("build dim_customer frame")?;
    Ok(WarehouseFrame::new(TableKind::DimCustomer, data))
}

pub fn product_frame(rows: &[ProductRow]) -> Result<WarehouseFrame> {
    let data = DataFrame::new(vec![
        column("product_id", rows.iter().map(|r| r.product_id).collect()),
        column("mongo_id", rows.iter().map(|r| r.mongo_id.clone()).collect()),
        column(
            "product_name",
            rows.iter().map(|r| r.product_name.clone()).collect(),
        ),
        column("brand", rows.iter().map(|r| r.brand.clone()).collect()),
        column("category", rows.iter().map(|r| r.category.clone()).collect()),
        column(
            "current_price",
            rows.iter().map(|r| r.current_price).collect::<Vec<f64>>(),
        ),
        column(
            "description",
            rows.iter().map(|r| r.description.clone()).collect(),
        ),
        column(
            "stock_quantity",
            rows.iter().map(|r| r.stock_quantity).collect(),
        ),
    ])
    .context("build dim_product frame")?;
    Ok(WarehouseFrame::new(TableKind::DimProduct, data))
}

pub fn time_frame(rows: &[TimeRow]) -> Result<WarehouseFrame> {
    let data = DataFrame::new(vec![
        column("time_id", rows.iter().map(|r| r.time_id).collect()),
        column(
            "full_date",
            rows.iter()
                .map(|r| r.full_date.to_string())
                .collect::<Vec<String>>(),
        ),
        column("day", rows.iter().map(|r| r.day).collect()),
        column("month", rows.iter().map(|r| r.month).collect()),
        column(
            "month_name",
            rows.iter().map(|r| r.month_name.clone()).collect(),
        ),
        column("quarter", rows.iter().map(|r| r.quarter).collect()),
        column("year", rows.iter().map(|r| r.year).collect()),
        column("day_of_week", rows.iter().map(|r| r.day_of_week).collect()),
        column("day_name", rows.iter().map(|r| r.day_name.clone()).collect()),
        column("is_weekend", rows.iter().map(|r| r.is_weekend).collect()),
        column(
            "week_of_year",
            rows.iter().map(|r| r.week_of_year).collect(),
        ),
    ])
    .context("build dim_time frame")?;
    Ok(WarehouseFrame::new(TableKind::DimTime, data))
}

pub fn location_frame(rows: &[LocationRow]) -> Result<WarehouseFrame> {
    let data = DataFrame::new(vec![
        column("location_id", rows.iter().map(|r| r.location_id).collect()),
        column("city", rows.iter().map(|r| r.city.clone()).collect()),
        column(
            "governorate",
            rows.iter().map(|r| r.governorate.clone()).collect(),
        ),
        column(
            "postal_code",
            rows.iter().map(|r| r.postal_code.clone()).collect(),
        ),
        column("country", rows.iter().map(|r| r.country.clone()).collect()),
    ])
    .context("build dim_location frame")?;
    Ok(WarehouseFrame::new(TableKind::DimLocation, data))
}

pub fn sales_frame(rows: &[SalesFactRow]) -> Result<WarehouseFrame> {
    let data = DataFrame::new(vec![
        column("sale_id", rows.iter().map(|r| r.sale_id).collect()),
        column("time_id", rows.iter().map(|r| r.time_id).collect()),
        column("product_id", rows.iter().map(|r| r.product_id).collect()),
        column("customer_id", rows.iter().map(|r| r.customer_id).collect()),
        column(
            "location_id",
            rows.iter()
                .map(|r| r.location_id)
                .collect::<Vec<Option<i64>>>(),
        ),
        column(
            "order_mongo_id",
            rows.iter().map(|r| r.order_mongo_id.clone()).collect(),
        ),
        column("quantity", rows.iter().map(|r| r.quantity).collect()),
        column(
            "unit_price",
            rows.iter().map(|r| r.unit_price).collect::<Vec<f64>>(),
        ),
        column(
            "total_amount",
            rows.iter().map(|r| r.total_amount).collect::<Vec<f64>>(),
        ),
        column(
            "tax_amount",
            rows.iter().map(|r| r.tax_amount).collect::<Vec<f64>>(),
        ),
        column(
            "shipping_amount",
            rows.iter().map(|r| r.shipping_amount).collect::<Vec<f64>>(),
        ),
        column(
            "payment_method",
            rows.iter().map(|r| r.payment_method.clone()).collect(),
        ),
        column(
            "order_status",
            rows.iter().map(|r| r.order_status.clone()).collect(),
        ),
        column("is_paid", rows.iter().map(|r| r.is_paid).collect()),
        column("is_delivered", rows.iter().map(|r| r.is_delivered).collect()),
    ])
    .context("build fact_sales frame")?;
    Ok(WarehouseFrame::new(TableKind::FactSales, data))
}
