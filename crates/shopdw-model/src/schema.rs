//! Static star-schema definition.
//!
//! The warehouse consists of four dimension tables and one fact table. The
//! definition here drives frame construction (column order), CSV export, and
//! the generated DDL, so all three stay in sync.

use std::fmt;

/// Maximum number of characters kept from a product description.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Sentinel email for customers with a missing or blank address.
pub const UNKNOWN_EMAIL: &str = "unknown@email.com";

/// Sentinel customer name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Default brand for products without one.
pub const DEFAULT_BRAND: &str = "Apple";

/// Default category for products without one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Default postal code for addresses that omit one.
pub const DEFAULT_POSTAL_CODE: &str = "0000";

/// Default country for addresses that omit one.
pub const DEFAULT_COUNTRY: &str = "Tunisia";

/// The five warehouse tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum TableKind {
    DimCustomer,
    DimProduct,
    DimTime,
    DimLocation,
    FactSales,
}

impl TableKind {
    /// Physical table name, also used as the export file stem.
    pub fn table_name(self) -> &'static str {
        match self {
            Self::DimCustomer => "dim_customer",
            Self::DimProduct => "dim_product",
            Self::DimTime => "dim_time",
            Self::DimLocation => "dim_location",
            Self::FactSales => "fact_sales",
        }
    }

    /// All tables in load order: dimensions first, the fact table last.
    pub fn load_order() -> [TableKind; 5] {
        [
            Self::DimCustomer,
            Self::DimProduct,
            Self::DimTime,
            Self::DimLocation,
            Self::FactSales,
        ]
    }

    /// Drop order for full-refresh rebuilds: the fact table goes first so
    /// its foreign keys never block a dimension drop.
    pub fn drop_order() -> [TableKind; 5] {
        [
            Self::FactSales,
            Self::DimTime,
            Self::DimProduct,
            Self::DimCustomer,
            Self::DimLocation,
        ]
    }

    pub fn columns(self) -> &'static [ColumnDef] {
        match self {
            Self::DimCustomer => DIM_CUSTOMER_COLUMNS,
            Self::DimProduct => DIM_PRODUCT_COLUMNS,
            Self::DimTime => DIM_TIME_COLUMNS,
            Self::DimLocation => DIM_LOCATION_COLUMNS,
            Self::FactSales => FACT_SALES_COLUMNS,
        }
    }

    /// Foreign keys declared on this table: (column, referenced table).
    pub fn foreign_keys(self) -> &'static [(&'static str, TableKind)] {
        match self {
            Self::FactSales => &[
                ("time_id", TableKind::DimTime),
                ("product_id", TableKind::DimProduct),
                ("customer_id", TableKind::DimCustomer),
                ("location_id", TableKind::DimLocation),
            ],
            _ => &[],
        }
    }

    /// The surrogate primary key column.
    pub fn primary_key(self) -> &'static str {
        match self {
            Self::DimCustomer => "customer_id",
            Self::DimProduct => "product_id",
            Self::DimTime => "time_id",
            Self::DimLocation => "location_id",
            Self::FactSales => "sale_id",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// Semantic column type; the generated DDL maps these to SQL types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Decimal,
    Text,
    Date,
    Boolean,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub not_null: bool,
}

const fn col(name: &'static str, column_type: ColumnType) -> ColumnDef {
    ColumnDef {
        name,
        column_type,
        not_null: false,
    }
}

const fn col_nn(name: &'static str, column_type: ColumnType) -> ColumnDef {
    ColumnDef {
        name,
        column_type,
        not_null: true,
    }
}

const DIM_CUSTOMER_COLUMNS: &[ColumnDef] = &[
    col_nn("customer_id", ColumnType::Integer),
    col("mongo_id", ColumnType::Text),
    col_nn("customer_name", ColumnType::Text),
    col("email", ColumnType::Text),
    col("registration_date", ColumnType::Date),
    col("is_active", ColumnType::Boolean),
];

const DIM_PRODUCT_COLUMNS: &[ColumnDef] = &[
    col_nn("product_id", ColumnType::Integer),
    col("mongo_id", ColumnType::Text),
    col_nn("product_name", ColumnType::Text),
    col("brand", ColumnType::Text),
    col("category", ColumnType::Text),
    col("current_price", ColumnType::Decimal),
    col("description", ColumnType::Text),
    col("stock_quantity", ColumnType::Integer),
];

const DIM_TIME_COLUMNS: &[ColumnDef] = &[
    col_nn("time_id", ColumnType::Integer),
    col_nn("full_date", ColumnType::Date),
    col("day", ColumnType::Integer),
    col("month", ColumnType::Integer),
    col("month_name", ColumnType::Text),
    col("quarter", ColumnType::Integer),
    col("year", ColumnType::Integer),
    col("day_of_week", ColumnType::Integer),
    col("day_name", ColumnType::Text),
    col("is_weekend", ColumnType::Boolean),
    col("week_of_year", ColumnType::Integer),
];

const DIM_LOCATION_COLUMNS: &[ColumnDef] = &[
    col_nn("location_id", ColumnType::Integer),
    col("city", ColumnType::Text),
    col("governorate", ColumnType::Text),
    col("postal_code", ColumnType::Text),
    col("country", ColumnType::Text),
];

const FACT_SALES_COLUMNS: &[ColumnDef] = &[
    col_nn("sale_id", ColumnType::Integer),
    col("time_id", ColumnType::Integer),
    col("product_id", ColumnType::Integer),
    col("customer_id", ColumnType::Integer),
    col("location_id", ColumnType::Integer),
    col("order_mongo_id", ColumnType::Text),
    col_nn("quantity", ColumnType::Integer),
    col_nn("unit_price", ColumnType::Decimal),
    col_nn("total_amount", ColumnType::Decimal),
    col("tax_amount", ColumnType::Decimal),
    col("shipping_amount", ColumnType::Decimal),
    col("payment_method", ColumnType::Text),
    col("order_status", ColumnType::Text),
    col("is_paid", ColumnType::Boolean),
    col("is_delivered", ColumnType::Boolean),
];
