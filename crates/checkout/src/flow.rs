use serde::{Deserialize, Serialize};
use thiserror::Error;

use glowcart_cart::{CartLine, CartManager, OrderSummary};
use glowcart_core::{DomainError, OrderId};

use crate::payment::{CardDetails, PaymentMethod};
use crate::shipping::ShippingInfo;

/// Checkout step lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    Shipping,
    Payment,
    Confirmation,
}

impl core::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Confirmation => "confirmation",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("checkout is at the {actual} step, expected {expected}")]
    WrongStep {
        expected: CheckoutStep,
        actual: CheckoutStep,
    },

    #[error("cannot check out an empty cart")]
    EmptyCart,
}

/// Receipt for a completed (simulated) payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub shipping: ShippingInfo,
    pub payment_method: PaymentMethod,
    pub lines: Vec<CartLine>,
    pub summary: OrderSummary,
}

/// Shipping → Payment → Confirmation.
///
/// No payment provider is contacted; a valid payment submission always
/// succeeds, empties the cart and yields an [`OrderConfirmation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    shipping: Option<ShippingInfo>,
    payment_method: PaymentMethod,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::Shipping,
            shipping: None,
            payment_method: PaymentMethod::default(),
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn shipping(&self) -> Option<&ShippingInfo> {
        self.shipping.as_ref()
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn submit_shipping(&mut self, info: ShippingInfo) -> Result<(), CheckoutError> {
        self.ensure_step(CheckoutStep::Shipping)?;
        info.validate()?;

        self.shipping = Some(info);
        self.step = CheckoutStep::Payment;
        Ok(())
    }

    pub fn select_payment_method(&mut self, method: PaymentMethod) -> Result<(), CheckoutError> {
        self.ensure_step(CheckoutStep::Payment)?;
        self.payment_method = method;
        Ok(())
    }

    /// Return from the payment step to edit shipping details.
    pub fn back(&mut self) {
        if self.step == CheckoutStep::Payment {
            self.step = CheckoutStep::Shipping;
        }
    }

    /// Take payment for everything in `cart`.
    ///
    /// `card` is only checked when paying by credit card. On success the cart
    /// is cleared and the flow moves to the confirmation step.
    pub fn submit_payment(
        &mut self,
        cart: &mut CartManager,
        card: &CardDetails,
    ) -> Result<OrderConfirmation, CheckoutError> {
        self.ensure_step(CheckoutStep::Payment)?;

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        if self.payment_method == PaymentMethod::CreditCard {
            card.validate()?;
        }

        let shipping = self
            .shipping
            .clone()
            .ok_or_else(|| DomainError::invariant("payment step reached without shipping details"))?;

        let confirmation = OrderConfirmation {
            order_id: OrderId::new(),
            shipping,
            payment_method: self.payment_method,
            lines: cart.lines().to_vec(),
            summary: cart.summary(),
        };

        cart.clear_cart();
        self.step = CheckoutStep::Confirmation;

        tracing::info!(
            order_id = %confirmation.order_id,
            method = %confirmation.payment_method,
            total = confirmation.summary.total.rupiah(),
            "order placed"
        );
        Ok(confirmation)
    }

    /// Start over after a confirmation.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn ensure_step(&self, expected: CheckoutStep) -> Result<(), CheckoutError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(CheckoutError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}
