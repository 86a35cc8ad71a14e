//! Shopping cart.
//!
//! [`CartManager`] owns the cart lines, mirrors them into the `cart` storage
//! slot after every change and reports user-facing outcomes through its
//! notifier.

pub mod line;
pub mod manager;
pub mod summary;

pub use line::CartLine;
pub use manager::CartManager;
pub use summary::{OrderSummary, TAX_RATE_PERCENT};
