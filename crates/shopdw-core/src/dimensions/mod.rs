//! Dimension builders.
//!
//! Each builder is a pure function from one raw record set to its dimension
//! rows, assigning a dense 1-based surrogate key in iteration order. The
//! builders are independent of each other; all cross-referencing happens
//! later through the [`crate::lookup::LookupIndex`].

mod customer;
mod location;
mod product;
mod time;

pub use customer::build_customer_dimension;
pub use location::build_location_dimension;
pub use product::build_product_dimension;
pub use time::build_time_dimension;
