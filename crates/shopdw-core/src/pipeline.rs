//! Transformation pipeline with explicit stages.
//!
//! The stages run strictly in order:
//! 1. **Dimensions**: the four independent builders, each over its own
//!    record set
//! 2. **Lookup**: assemble the natural-key → surrogate-key index
//! 3. **Facts**: resolve foreign keys and apportion order-level amounts
//! 4. **Frames**: materialize the five tables for the output writers
//!
//! The lookup index must be complete before fact building starts; that
//! ordering is the only synchronization the design needs, since nothing is
//! mutated after its build phase.

use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info, info_span};

use shopdw_ingest::Snapshot;
use shopdw_model::FactStats;

use crate::dimensions::{
    build_customer_dimension, build_location_dimension, build_product_dimension,
    build_time_dimension,
};
use crate::facts::{OrderOutcome, build_sales_facts};
use crate::frame::WarehouseFrame;
use crate::frame_builder::{
    customer_frame, location_frame, product_frame, sales_frame, time_frame,
};
use crate::lookup::LookupIndex;

/// Result of a full transform: the five finished tables in load order, the
/// fact builder's diagnostic counters, and the per-order outcomes they were
/// aggregated from.
#[derive(Debug)]
pub struct TransformOutput {
    pub frames: Vec<WarehouseFrame>,
    pub stats: FactStats,
    pub order_outcomes: Vec<(String, OrderOutcome)>,
}

impl TransformOutput {
    pub fn frame(&self, table: shopdw_model::TableKind) -> Option<&WarehouseFrame> {
        self.frames.iter().find(|frame| frame.table == table)
    }
}

/// Run the whole transformation over a materialized snapshot.
///
/// This is a pure function of the snapshot: surrogate counters are local to
/// each build call, so running it twice over the same input produces
/// identical tables.
pub fn run_transform(snapshot: &Snapshot) -> Result<TransformOutput> {
    let span = info_span!("transform");
    let _guard = span.enter();
    let start = Instant::now();

    let customers =
        info_span!("dim_customer").in_scope(|| build_customer_dimension(&snapshot.users));
    info!(records = customers.len(), "dim_customer built");

    let products =
        info_span!("dim_product").in_scope(|| build_product_dimension(&snapshot.products));
    info!(records = products.len(), "dim_product built");

    let times = info_span!("dim_time").in_scope(|| build_time_dimension(&snapshot.orders));
    info!(records = times.len(), "dim_time built");

    let locations =
        info_span!("dim_location").in_scope(|| build_location_dimension(&snapshot.orders));
    info!(records = locations.len(), "dim_location built");

    let lookup = LookupIndex::build(&customers, &products, &times, &locations);

    let facts = info_span!("fact_sales").in_scope(|| build_sales_facts(&snapshot.orders, &lookup));
    info!(
        rows = facts.stats.rows_emitted,
        orders_skipped = facts.stats.orders_skipped(),
        items_skipped = facts.stats.items_skipped_no_product,
        location_fallbacks = facts.stats.location_fallbacks,
        "fact_sales built"
    );

    let frames = vec![
        customer_frame(&customers)?,
        product_frame(&products)?,
        time_frame(&times)?,
        location_frame(&locations)?,
        sales_frame(&facts.rows)?,
    ];
    debug!(
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );
    Ok(TransformOutput {
        frames,
        stats: facts.stats,
        order_outcomes: facts.outcomes,
    })
}
