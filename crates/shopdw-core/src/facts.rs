//! Fact builder: `fact_sales` at order line-item grain.

use tracing::debug;

use shopdw_ingest::OrderRecord;
use shopdw_model::{FactStats, SalesFactRow};

use crate::lookup::{LookupIndex, location_key};
use crate::money::{apportion, round2};
use crate::text::non_blank;

/// Why an order contributed no fact rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The owning customer is not in the customer dimension.
    UnknownCustomer,
    /// The creation timestamp was missing or unparseable, so no time
    /// dimension row exists for the order.
    MissingDate,
    /// The order carried no line items.
    NoItems,
}

/// Per-order result: either rows were emitted (with any per-item drops
/// noted) or the whole order was skipped for a stated reason. Skips are
/// never bare omissions; the orchestrator folds these into the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Emitted { rows: usize, items_skipped: usize },
    Skipped { reason: SkipReason },
}

/// Fact rows, per-order outcomes, and the aggregated counters.
#[derive(Debug, Default)]
pub struct FactBuild {
    pub rows: Vec<SalesFactRow>,
    /// One entry per source order, in iteration order: (order natural key,
    /// outcome).
    pub outcomes: Vec<(String, OrderOutcome)>,
    pub stats: FactStats,
}

impl FactBuild {
    fn record(&mut self, order_id: &str, outcome: OrderOutcome) {
        match &outcome {
            OrderOutcome::Emitted { items_skipped, .. } => {
                self.stats.items_skipped_no_product += items_skipped;
            }
            OrderOutcome::Skipped { reason } => match reason {
                SkipReason::UnknownCustomer => self.stats.orders_skipped_no_customer += 1,
                SkipReason::MissingDate => self.stats.orders_skipped_no_date += 1,
                SkipReason::NoItems => {}
            },
        }
        self.outcomes.push((order_id.to_string(), outcome));
    }
}

/// Build the fact table from raw orders and the frozen lookup index.
///
/// Resolution rules, in order:
/// - unknown customer: the whole order is skipped;
/// - missing creation timestamp: the whole order is skipped;
/// - unknown product: only that item is skipped, the rest of the order
///   still processes;
/// - unknown location key: the row falls back to the first location row.
///
/// Order-level tax and shipping are apportioned over the order's original
/// item count, not the post-filter count, so reconciliation totals stay
/// comparable with the source system even when items are dropped.
pub fn build_sales_facts(orders: &[OrderRecord], lookup: &LookupIndex) -> FactBuild {
    let mut build = FactBuild::default();
    let mut next_sale_id = 1i64;

    for order in orders {
        build.stats.orders_seen += 1;

        let customer_id = match order.user.as_deref().and_then(|user| lookup.customer_id(user)) {
            Some(id) => id,
            None => {
                debug!(order = %order.id, "skipping order: customer not in dimension");
                build.record(&order.id, OrderOutcome::Skipped {
                    reason: SkipReason::UnknownCustomer,
                });
                continue;
            }
        };

        // The time dimension was built from exactly these timestamps, so a
        // parseable date always resolves; only a missing date skips.
        let time_id = match order
            .created_at
            .map(|dt| dt.date())
            .and_then(|date| lookup.time_id(date))
        {
            Some(id) => id,
            None => {
                debug!(order = %order.id, "skipping order: no creation date");
                build.record(&order.id, OrderOutcome::Skipped {
                    reason: SkipReason::MissingDate,
                });
                continue;
            }
        };

        let item_count = order.order_items.len();
        if item_count == 0 {
            build.record(&order.id, OrderOutcome::Skipped {
                reason: SkipReason::NoItems,
            });
            continue;
        }

        let shipping_key = order
            .shipping_address
            .as_ref()
            .map(|address| {
                location_key(
                    address.city.as_deref().unwrap_or(""),
                    address.governorate.as_deref().unwrap_or(""),
                )
            })
            .unwrap_or_else(|| location_key("", ""));
        let (location_id, fell_back) = lookup.location_id_or_default(&shipping_key);

        let tax_amount = apportion(order.tax_price.unwrap_or(0.0), item_count);
        let shipping_amount = apportion(order.shipping_price.unwrap_or(0.0), item_count);
        let payment_method = non_blank(order.payment_method.as_deref())
            .unwrap_or("Unknown")
            .to_string();
        let order_status = non_blank(order.status.as_deref())
            .unwrap_or("Unknown")
            .to_string();

        let mut emitted = 0usize;
        let mut items_skipped = 0usize;
        for item in &order.order_items {
            let product_id = match item
                .product
                .as_deref()
                .and_then(|product| lookup.product_id(product))
            {
                Some(id) => id,
                None => {
                    debug!(order = %order.id, "skipping item: product not in dimension");
                    items_skipped += 1;
                    continue;
                }
            };

            let quantity = item.quantity.unwrap_or(1);
            let unit_price = item.price.unwrap_or(0.0);
            if fell_back {
                build.stats.location_fallbacks += 1;
            }
            build.rows.push(SalesFactRow {
                sale_id: next_sale_id,
                time_id,
                product_id,
                customer_id,
                location_id,
                order_mongo_id: order.id.clone(),
                quantity,
                unit_price,
                total_amount: round2(unit_price * quantity as f64),
                tax_amount,
                shipping_amount,
                payment_method: payment_method.clone(),
                order_status: order_status.clone(),
                is_paid: order.is_paid,
                is_delivered: order.is_delivered,
            });
            next_sale_id += 1;
            emitted += 1;
        }
        build.record(&order.id, OrderOutcome::Emitted {
            rows: emitted,
            items_skipped,
        });
    }

    build.stats.rows_emitted = build.rows.len();
    build
}
