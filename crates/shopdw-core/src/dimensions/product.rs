//! Product dimension builder.

use shopdw_ingest::ProductRecord;
use shopdw_model::{DEFAULT_BRAND, DEFAULT_CATEGORY, DESCRIPTION_MAX_CHARS, ProductRow};

use crate::text::{non_blank, title_case, truncate_chars};

/// Build `dim_product` from the raw product collection. No filtering:
/// every product gets a row, in source iteration order.
pub fn build_product_dimension(products: &[ProductRecord]) -> Vec<ProductRow> {
    let mut rows = Vec::with_capacity(products.len());
    for product in products {
        let brand = match non_blank(product.brand.as_deref()) {
            Some(brand) => title_case(brand),
            None => DEFAULT_BRAND.to_string(),
        };
        let category = match non_blank(product.category.as_deref()) {
            Some(category) => title_case(category),
            None => DEFAULT_CATEGORY.to_string(),
        };
        rows.push(ProductRow {
            product_id: rows.len() as i64 + 1,
            mongo_id: product.id.clone(),
            product_name: product.name.as_deref().unwrap_or("").trim().to_string(),
            brand,
            category,
            current_price: product.price.unwrap_or(0.0),
            description: truncate_chars(
                product.description.as_deref().unwrap_or("").trim(),
                DESCRIPTION_MAX_CHARS,
            ),
            stock_quantity: product.count_in_stock.unwrap_or(0),
        });
    }
    rows
}
