//! `glowcart-core`: storefront foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no clocks).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{OrderId, ProductId};
pub use money::{Money, format_rupiah};
