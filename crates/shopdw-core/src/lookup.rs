//! Natural-key → surrogate-key lookup index.
//!
//! Assembled once after every dimension builder has finished, then treated
//! as read-only. The fact builder depends on the maps being complete: a
//! customer that appears later in iteration order than an order referencing
//! it must still resolve, which is why assembly is a separate phase rather
//! than interleaved with building.

use std::collections::HashMap;

use chrono::NaiveDate;
use shopdw_model::{CustomerRow, LocationRow, ProductRow, TimeRow};

/// Composite location key over the trimmed (city, governorate) pair.
pub fn location_key(city: &str, governorate: &str) -> String {
    format!("{}|{}", city.trim(), governorate.trim())
}

#[derive(Debug, Default)]
pub struct LookupIndex {
    customers: HashMap<String, i64>,
    products: HashMap<String, i64>,
    times: HashMap<NaiveDate, i64>,
    locations: HashMap<String, i64>,
    /// Surrogate id of the first location row, used as the resolution
    /// fallback. `None` when the dimension is empty.
    default_location: Option<i64>,
}

impl LookupIndex {
    /// Pure function over the four dimension outputs; no other state.
    pub fn build(
        customers: &[CustomerRow],
        products: &[ProductRow],
        times: &[TimeRow],
        locations: &[LocationRow],
    ) -> Self {
        let mut index = Self {
            default_location: locations.first().map(|row| row.location_id),
            ..Self::default()
        };
        for row in customers {
            index.customers.insert(row.mongo_id.clone(), row.customer_id);
        }
        for row in products {
            index.products.insert(row.mongo_id.clone(), row.product_id);
        }
        for row in times {
            index.times.insert(row.full_date, row.time_id);
        }
        for row in locations {
            index
                .locations
                .insert(location_key(&row.city, &row.governorate), row.location_id);
        }
        index
    }

    pub fn customer_id(&self, natural_key: &str) -> Option<i64> {
        self.customers.get(natural_key).copied()
    }

    pub fn product_id(&self, natural_key: &str) -> Option<i64> {
        self.products.get(natural_key).copied()
    }

    pub fn time_id(&self, date: NaiveDate) -> Option<i64> {
        self.times.get(&date).copied()
    }

    /// Resolve a composite location key. On a miss the fact falls back to
    /// the first dimension row instead of a null or sentinel — inherited
    /// source-system behavior; the second element reports whether the
    /// fallback was taken so callers can count it.
    pub fn location_id_or_default(&self, key: &str) -> (Option<i64>, bool) {
        match self.locations.get(key) {
            Some(id) => (Some(*id), false),
            None => (self.default_location, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_key_trims_components() {
        assert_eq!(location_key(" Sousse ", "Sousse"), "Sousse|Sousse");
        assert_eq!(location_key("Tunis", ""), "Tunis|");
    }
}
