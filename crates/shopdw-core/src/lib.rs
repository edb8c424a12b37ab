pub mod dimensions;
pub mod facts;
pub mod frame;
pub mod frame_builder;
pub mod frame_utils;
pub mod lookup;
pub mod money;
pub mod pipeline;
pub mod text;

pub use dimensions::{
    build_customer_dimension, build_location_dimension, build_product_dimension,
    build_time_dimension,
};
pub use facts::{FactBuild, OrderOutcome, SkipReason, build_sales_facts};
pub use frame::WarehouseFrame;
pub use frame_builder::{customer_frame, location_frame, product_frame, sales_frame, time_frame};
pub use frame_utils::{any_to_f64, any_to_i64, any_to_string, column_value_string, format_numeric};
pub use lookup::{LookupIndex, location_key};
pub use money::{apportion, round2};
pub use pipeline::{TransformOutput, run_transform};
