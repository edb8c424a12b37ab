//! Writer and analytics tests over a small transformed snapshot.

use chrono::NaiveDate;

use shopdw_core::run_transform;
use shopdw_ingest::{
    OrderItem, OrderRecord, ProductRecord, ShippingAddress, Snapshot, UserRecord,
};
use shopdw_model::TableKind;
use shopdw_report::{
    compute_analytics, render_insert_sql, write_csv_outputs, write_sql_outputs,
};

fn item(product: &str, quantity: i64, price: f64) -> OrderItem {
    OrderItem {
        product: Some(product.to_string()),
        quantity: Some(quantity),
        price: Some(price),
    }
}

fn order(id: &str, day: u32, paid: bool, items: Vec<OrderItem>) -> OrderRecord {
    OrderRecord {
        id: id.to_string(),
        user: Some("u1".to_string()),
        created_at: NaiveDate::from_ymd_opt(2025, 1, day)
            .expect("date")
            .and_hms_opt(12, 0, 0),
        shipping_address: Some(ShippingAddress {
            city: Some("Sousse".to_string()),
            governorate: Some("Sousse".to_string()),
            ..ShippingAddress::default()
        }),
        order_items: items,
        tax_price: Some(5.0),
        shipping_price: Some(7.0),
        payment_method: Some("Credit Card".to_string()),
        status: Some("Delivered".to_string()),
        is_paid: paid,
        is_delivered: paid,
    }
}

fn snapshot() -> Snapshot {
    Snapshot {
        users: vec![UserRecord {
            id: "u1".to_string(),
            name: Some("Ahmed".to_string()),
            email: Some("ahmed@store.tn".to_string()),
            ..UserRecord::default()
        }],
        products: vec![
            ProductRecord {
                id: "p1".to_string(),
                name: Some("iPhone 15".to_string()),
                category: Some("Smartphones".to_string()),
                price: Some(799.0),
                ..ProductRecord::default()
            },
            ProductRecord {
                id: "p2".to_string(),
                name: Some("AirPods Pro".to_string()),
                category: Some("Audio".to_string()),
                price: Some(249.0),
                ..ProductRecord::default()
            },
        ],
        orders: vec![
            order("o1", 5, true, vec![item("p1", 1, 799.0)]),
            order("o2", 6, true, vec![item("p2", 3, 249.0)]),
            order("o3", 7, false, vec![item("p2", 1, 249.0)]),
        ],
    }
}

#[test]
fn csv_export_writes_one_file_per_table() {
    let output = run_transform(&snapshot()).expect("transform");
    let dir = tempfile::tempdir().expect("tempdir");

    let written = write_csv_outputs(&output.frames, dir.path()).expect("write csv");
    assert_eq!(written.len(), 5);
    for (table, path) in &written {
        let contents = std::fs::read_to_string(path).expect("read export");
        let header = contents.lines().next().expect("header line");
        let expected: Vec<&str> = table.columns().iter().map(|column| column.name).collect();
        assert_eq!(header, expected.join(","), "header of {table}");
    }
    let facts = std::fs::read_to_string(dir.path().join("fact_sales.csv")).expect("read facts");
    // 3 fact rows plus the header.
    assert_eq!(facts.lines().count(), 4);
}

#[test]
fn sql_outputs_cover_schema_and_data() {
    let output = run_transform(&snapshot()).expect("transform");
    let dir = tempfile::tempdir().expect("tempdir");

    let outputs = write_sql_outputs(&output.frames, dir.path()).expect("write sql");
    let schema = std::fs::read_to_string(&outputs.schema).expect("read schema");
    for table in TableKind::load_order() {
        assert!(schema.contains(&format!("CREATE TABLE {}", table.table_name())));
        assert!(schema.contains(&format!("DROP TABLE IF EXISTS {}", table.table_name())));
    }

    let load = std::fs::read_to_string(&outputs.load).expect("read load");
    assert!(load.contains("INSERT INTO dim_customer"));
    assert!(load.contains("INSERT INTO fact_sales"));
    assert!(load.contains("'Ahmed'"));
    assert!(load.contains("'2025-01-05'"));
}

#[test]
fn insert_sql_emits_one_tuple_per_row() {
    let output = run_transform(&snapshot()).expect("transform");
    let facts = output.frame(TableKind::FactSales).expect("fact frame");
    let sql = render_insert_sql(facts).expect("render inserts");
    let tuples = sql.matches("\n    (").count();
    assert_eq!(tuples, facts.record_count());
}

#[test]
fn analytics_aggregate_paid_revenue_and_units() {
    let output = run_transform(&snapshot()).expect("transform");
    let analytics = compute_analytics(&output.frames).expect("analytics");

    // Paid revenue: 799 + 3*249 = 1546. The unpaid order is excluded.
    assert_eq!(analytics.total_revenue_paid, 1546.0);
    assert_eq!(analytics.top_categories.len(), 2);
    assert_eq!(analytics.top_categories[0].category, "Smartphones");
    assert_eq!(analytics.top_categories[0].revenue, 799.0);
    assert_eq!(analytics.top_categories[1].category, "Audio");
    assert_eq!(analytics.top_categories[1].revenue, 747.0);
    // Units count paid and unpaid rows alike: 3 + 1 AirPods, 1 iPhone.
    assert_eq!(analytics.top_products[0].product, "AirPods Pro");
    assert_eq!(analytics.top_products[0].units, 4);
    assert_eq!(analytics.top_products[1].product, "iPhone 15");
    assert_eq!(analytics.top_products[1].units, 1);
}
