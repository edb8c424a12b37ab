//! End-to-end run tests through the CLI pipeline layer.

use std::fs;
use std::path::Path;

use shopdw_cli::pipeline::{RunOptions, execute_run, resolve_output_dir, schema_ddl};
use shopdw_model::TableKind;

fn write_snapshot(dir: &Path) {
    fs::write(
        dir.join("users.json"),
        r#"[
            {"_id": "u1", "name": "ahmed ben ali", "email": "Ahmed@Gmail.com",
             "isAdmin": false, "createdAt": "2024-11-02T09:00:00Z"},
            {"_id": "admin", "name": "Admin", "isAdmin": true}
        ]"#,
    )
    .expect("write users");
    fs::write(
        dir.join("products.json"),
        r#"[
            {"_id": "p1", "name": "iPhone 15", "category": "Smartphones", "price": 799},
            {"_id": "p2", "name": "AirPods Pro", "category": "Audio", "price": 249}
        ]"#,
    )
    .expect("write products");
    fs::write(
        dir.join("orders.json"),
        r#"[
            {"_id": "o1", "user": "u1", "createdAt": "2025-01-05T10:30:00Z",
             "shippingAddress": {"city": "Sousse", "governorate": "Sousse",
                                 "postalCode": "4000", "country": "Tunisia"},
             "orderItems": [
                 {"product": "p1", "quantity": 1, "price": 799},
                 {"product": "p2", "quantity": 2, "price": 249}
             ],
             "taxPrice": 10, "shippingPrice": 7,
             "paymentMethod": "Credit Card", "status": "Pending", "isPaid": true},
            {"_id": "o2", "user": "ghost", "createdAt": "2025-01-06T11:00:00Z",
             "orderItems": [{"product": "p1", "quantity": 1, "price": 799}]}
        ]"#,
    )
    .expect("write orders");
}

fn options(snapshot: &Path, dry_run: bool) -> RunOptions {
    RunOptions {
        snapshot_dir: snapshot.to_path_buf(),
        output_dir: None,
        write_csv: true,
        write_sql: true,
        dry_run,
        analytics: true,
    }
}

#[test]
fn full_run_writes_all_outputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_snapshot(dir.path());

    let outcome = execute_run(&options(dir.path(), false)).expect("run");
    let summary = &outcome.summary;

    assert_eq!(summary.record_count(TableKind::DimCustomer), 1);
    assert_eq!(summary.record_count(TableKind::DimProduct), 2);
    assert_eq!(summary.record_count(TableKind::DimTime), 2);
    assert_eq!(summary.record_count(TableKind::DimLocation), 1);
    assert_eq!(summary.record_count(TableKind::FactSales), 2);
    assert_eq!(summary.facts.orders_skipped_no_customer, 1);

    let output_dir = dir.path().join("warehouse");
    for table in TableKind::load_order() {
        assert!(
            output_dir.join(format!("{}.csv", table.table_name())).is_file(),
            "missing {} export",
            table.table_name()
        );
    }
    assert!(summary.schema_sql.as_ref().expect("schema path").is_file());
    assert!(summary.load_sql.as_ref().expect("load path").is_file());

    let analytics = outcome.analytics.expect("analytics");
    // Only o1 is paid: 799 + 2*249.
    assert_eq!(analytics.total_revenue_paid, 1297.0);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_snapshot(dir.path());

    let outcome = execute_run(&options(dir.path(), true)).expect("run");
    assert!(outcome.summary.schema_sql.is_none());
    assert!(!dir.path().join("warehouse").exists());
    assert_eq!(outcome.summary.record_count(TableKind::FactSales), 2);
}

#[test]
fn missing_snapshot_aborts_before_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("users.json"), "[]").expect("write users");

    let error = execute_run(&options(dir.path(), false)).expect_err("must fail");
    assert!(format!("{error:#}").contains("load snapshot"));
    assert!(!dir.path().join("warehouse").exists());
}

#[test]
fn output_dir_defaults_under_the_snapshot() {
    assert_eq!(
        resolve_output_dir(Path::new("/data/snap"), None),
        Path::new("/data/snap/warehouse")
    );
    assert_eq!(
        resolve_output_dir(Path::new("/data/snap"), Some("/tmp/out".into())),
        Path::new("/tmp/out")
    );
}

#[test]
fn schema_ddl_lists_all_tables() {
    let ddl = schema_ddl();
    for table in TableKind::load_order() {
        assert!(ddl.contains(table.table_name()));
    }
}
