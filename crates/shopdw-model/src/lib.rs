pub mod dimensions;
pub mod facts;
pub mod schema;
pub mod summary;

pub use dimensions::{CustomerRow, LocationRow, ProductRow, TimeRow};
pub use facts::SalesFactRow;
pub use schema::{
    ColumnDef, ColumnType, DEFAULT_BRAND, DEFAULT_CATEGORY, DEFAULT_COUNTRY, DEFAULT_POSTAL_CODE,
    DESCRIPTION_MAX_CHARS, TableKind, UNKNOWN_EMAIL, UNKNOWN_NAME,
};
pub use summary::{FactStats, IngestStats, OutputPaths, RunSummary, TableSummary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_match_contract() {
        assert_eq!(TableKind::DimCustomer.table_name(), "dim_customer");
        assert_eq!(TableKind::DimProduct.table_name(), "dim_product");
        assert_eq!(TableKind::DimTime.table_name(), "dim_time");
        assert_eq!(TableKind::DimLocation.table_name(), "dim_location");
        assert_eq!(TableKind::FactSales.table_name(), "fact_sales");
    }

    #[test]
    fn fact_table_declares_all_four_foreign_keys() {
        let fks = TableKind::FactSales.foreign_keys();
        assert_eq!(fks.len(), 4);
        for (column, referenced) in fks {
            assert_eq!(*column, referenced.primary_key());
        }
    }

    #[test]
    fn drop_order_removes_fact_table_first() {
        assert_eq!(TableKind::drop_order()[0], TableKind::FactSales);
        assert_eq!(TableKind::load_order()[4], TableKind::FactSales);
    }

    #[test]
    fn primary_key_leads_every_column_list() {
        for table in TableKind::load_order() {
            let columns = table.columns();
            assert_eq!(columns[0].name, table.primary_key());
            assert!(columns[0].not_null);
        }
    }

    #[test]
    fn summary_serializes() {
        let summary = RunSummary {
            snapshot_dir: "snapshot".into(),
            output_dir: "output".into(),
            tables: vec![TableSummary {
                table: TableKind::DimCustomer,
                records: 3,
                outputs: OutputPaths::default(),
            }],
            ingest: IngestStats::default(),
            facts: FactStats::default(),
            schema_sql: None,
            load_sql: None,
        };
        let json = serde_json::to_string(&summary).expect("serialize summary");
        let round: RunSummary = serde_json::from_str(&json).expect("deserialize summary");
        assert_eq!(round.record_count(TableKind::DimCustomer), 3);
    }
}
