//! Composition root for a glowcart shopper session.

pub mod config;
pub mod report;
pub mod storefront;

pub use config::{ConfigError, StorefrontConfig};
pub use storefront::Storefront;
