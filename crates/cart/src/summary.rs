use serde::{Deserialize, Serialize};

use glowcart_core::Money;

/// Sales tax applied at checkout, in percent.
pub const TAX_RATE_PERCENT: u64 = 10;

/// Totals shown on the cart and payment pages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Money,
    /// Shipping is free; kept as a field so the breakdown stays explicit.
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderSummary {
    pub fn from_subtotal(subtotal: Money) -> Self {
        let shipping = Money::ZERO;
        let tax = subtotal.percent(TAX_RATE_PERCENT);
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    pub fn is_free_shipping(&self) -> bool {
        self.shipping == Money::ZERO
    }
}
