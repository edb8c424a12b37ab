//! Location dimension builder.

use std::collections::BTreeSet;

use shopdw_ingest::OrderRecord;
use shopdw_model::{DEFAULT_COUNTRY, DEFAULT_POSTAL_CODE, LocationRow};

use crate::lookup::location_key;
use crate::text::non_blank;

/// Build `dim_location` from order shipping addresses.
///
/// One row per distinct (city, governorate) pair, in first-seen order.
/// Orders without an address, or with a blank city, contribute nothing.
/// Postal code and country are captured from the first occurrence of a
/// pair and never updated by later orders — a deliberate simplicity
/// trade-off carried over from the source system.
pub fn build_location_dimension(orders: &[OrderRecord]) -> Vec<LocationRow> {
    let mut rows: Vec<LocationRow> = Vec::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();
    for order in orders {
        let Some(address) = order.shipping_address.as_ref() else {
            continue;
        };
        let Some(city) = non_blank(address.city.as_deref()) else {
            continue;
        };
        let governorate_raw = address.governorate.as_deref().unwrap_or("");
        let key = location_key(city, governorate_raw);
        if !seen.insert(key) {
            continue;
        }
        rows.push(LocationRow {
            location_id: rows.len() as i64 + 1,
            city: city.to_string(),
            governorate: non_blank(Some(governorate_raw))
                .unwrap_or("Unknown")
                .to_string(),
            postal_code: non_blank(address.postal_code.as_deref())
                .unwrap_or(DEFAULT_POSTAL_CODE)
                .to_string(),
            country: non_blank(address.country.as_deref())
                .unwrap_or(DEFAULT_COUNTRY)
                .to_string(),
        });
    }
    rows
}
