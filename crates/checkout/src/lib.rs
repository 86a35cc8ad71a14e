//! Simulated checkout.
//!
//! Collects shipping details, takes a (simulated) payment for the current
//! cart, and hands back an order confirmation. No payment provider is
//! involved.

pub mod flow;
pub mod payment;
pub mod shipping;

pub use flow::{CheckoutError, CheckoutFlow, CheckoutStep, OrderConfirmation};
pub use payment::{CardDetails, PaymentMethod};
pub use shipping::{DEFAULT_COUNTRY, ShippingInfo};
