//! Product catalog snapshots (read-only).
//!
//! Products come from the external product provider; this crate only models
//! the snapshot shape and the listing filters applied on top of it.

pub mod filter;
pub mod product;

pub use filter::{FilterOptions, PriceRange, ProductFilter, price_bounds, search};
pub use product::{Product, TagList};
