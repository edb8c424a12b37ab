//! End-to-end transform tests over an in-memory snapshot.

use chrono::NaiveDate;

use shopdw_core::run_transform;
use shopdw_ingest::{
    OrderItem, OrderRecord, ProductRecord, ShippingAddress, Snapshot, UserRecord,
};
use shopdw_model::TableKind;

fn snapshot() -> Snapshot {
    let users = vec![
        UserRecord {
            id: "u1".to_string(),
            name: Some("ahmed ben ali".to_string()),
            email: Some("Ahmed@Gmail.com".to_string()),
            ..UserRecord::default()
        },
        UserRecord {
            id: "admin".to_string(),
            name: Some("Admin".to_string()),
            is_admin: true,
            ..UserRecord::default()
        },
    ];
    let products = vec![
        ProductRecord {
            id: "p1".to_string(),
            name: Some("iPhone 15".to_string()),
            price: Some(799.0),
            ..ProductRecord::default()
        },
        ProductRecord {
            id: "p2".to_string(),
            name: Some("AirPods Pro".to_string()),
            price: Some(249.0),
            ..ProductRecord::default()
        },
    ];
    let orders = vec![OrderRecord {
        id: "o1".to_string(),
        user: Some("u1".to_string()),
        created_at: NaiveDate::from_ymd_opt(2025, 1, 5)
            .expect("date")
            .and_hms_opt(10, 30, 0),
        shipping_address: Some(ShippingAddress {
            city: Some("Sousse".to_string()),
            governorate: Some("Sousse".to_string()),
            postal_code: Some("4000".to_string()),
            country: Some("Tunisia".to_string()),
            ..ShippingAddress::default()
        }),
        order_items: vec![
            OrderItem {
                product: Some("p1".to_string()),
                quantity: Some(1),
                price: Some(799.0),
            },
            OrderItem {
                product: Some("p2".to_string()),
                quantity: Some(2),
                price: Some(249.0),
            },
        ],
        tax_price: Some(10.0),
        shipping_price: Some(7.0),
        payment_method: Some("Credit Card".to_string()),
        status: Some("Pending".to_string()),
        is_paid: true,
        is_delivered: false,
    }];
    Snapshot {
        users,
        products,
        orders,
    }
}

#[test]
fn produces_all_five_tables_in_load_order() {
    let output = run_transform(&snapshot()).expect("transform");
    let tables: Vec<TableKind> = output.frames.iter().map(|frame| frame.table).collect();
    assert_eq!(tables, TableKind::load_order());
    assert_eq!(output.frame(TableKind::DimCustomer).expect("frame").record_count(), 1);
    assert_eq!(output.frame(TableKind::DimProduct).expect("frame").record_count(), 2);
    assert_eq!(output.frame(TableKind::DimTime).expect("frame").record_count(), 1);
    assert_eq!(output.frame(TableKind::DimLocation).expect("frame").record_count(), 1);
    assert_eq!(output.frame(TableKind::FactSales).expect("frame").record_count(), 2);
    assert_eq!(output.stats.rows_emitted, 2);
}

#[test]
fn frame_columns_match_the_schema() {
    let output = run_transform(&snapshot()).expect("transform");
    for frame in &output.frames {
        let names: Vec<String> = frame
            .data
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let expected: Vec<String> = frame
            .table
            .columns()
            .iter()
            .map(|column| column.name.to_string())
            .collect();
        assert_eq!(names, expected, "columns of {}", frame.table);
    }
}

#[test]
fn transform_is_deterministic() {
    let first = run_transform(&snapshot()).expect("transform");
    let second = run_transform(&snapshot()).expect("transform");
    for (a, b) in first.frames.iter().zip(second.frames.iter()) {
        assert_eq!(a.table, b.table);
        assert!(
            a.data.equals_missing(&b.data),
            "frame {} differs between runs",
            a.table
        );
    }
    assert_eq!(first.stats, second.stats);
}
