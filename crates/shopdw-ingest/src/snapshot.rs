//! Whole-snapshot loading.

use std::path::Path;

use tracing::info;

use shopdw_model::IngestStats;

use crate::discovery::locate_snapshot;
use crate::error::Result;
use crate::reader::read_records;
use crate::records::{OrderRecord, ProductRecord, UserRecord};

/// A fully materialized snapshot of the operational store.
///
/// Extraction completes before any transformation starts; the transform
/// engine only ever sees this in-memory view.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub users: Vec<UserRecord>,
    pub products: Vec<ProductRecord>,
    pub orders: Vec<OrderRecord>,
}

/// Load all three collections from a snapshot directory.
pub fn load_snapshot(dir: &Path) -> Result<(Snapshot, IngestStats)> {
    let files = locate_snapshot(dir)?;

    let users = read_records::<UserRecord>(&files.users, "users")?;
    info!(
        collection = "users",
        records = users.records.len(),
        malformed = users.malformed,
        "collection loaded"
    );
    let products = read_records::<ProductRecord>(&files.products, "products")?;
    info!(
        collection = "products",
        records = products.records.len(),
        malformed = products.malformed,
        "collection loaded"
    );
    let orders = read_records::<OrderRecord>(&files.orders, "orders")?;
    info!(
        collection = "orders",
        records = orders.records.len(),
        malformed = orders.malformed,
        "collection loaded"
    );

    let stats = IngestStats {
        users: users.records.len(),
        products: products.records.len(),
        orders: orders.records.len(),
        malformed: users.malformed + products.malformed + orders.malformed,
    };
    let snapshot = Snapshot {
        users: users.records,
        products: products.records,
        orders: orders.records,
    };
    Ok((snapshot, stats))
}
