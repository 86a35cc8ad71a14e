use std::sync::Arc;

use anyhow::Context;
use chrono::Duration;

use glowcart_cart::CartManager;
use glowcart_checkout::{CardDetails, CheckoutError, CheckoutFlow, OrderConfirmation};
use glowcart_compare::CompareManager;
use glowcart_notify::{Clock, Notifier, SystemClock};
use glowcart_storage::{FileStore, ListStore};

use crate::config::StorefrontConfig;

/// One shopper session: cart, compare list and checkout wired to a shared
/// slot store and clock.
///
/// The cart and compare list each own a notifier, so a message from one never
/// replaces a message from the other.
#[derive(Debug)]
pub struct Storefront {
    cart: CartManager,
    compare: CompareManager,
    checkout: CheckoutFlow,
}

impl Storefront {
    /// Open a session backed by the file store in `config.data_dir`.
    pub fn open(config: &StorefrontConfig) -> anyhow::Result<Self> {
        let store = FileStore::open(&config.data_dir)
            .with_context(|| format!("failed to open data dir {}", config.data_dir.display()))?;
        tracing::debug!(dir = %store.dir().display(), "storefront opened");

        Ok(Self::with_store(
            Arc::new(store),
            Arc::new(SystemClock),
            config.notification_ttl,
        ))
    }

    pub fn with_store(store: Arc<dyn ListStore>, clock: Arc<dyn Clock>, notification_ttl: Duration) -> Self {
        let cart = CartManager::load(
            Arc::clone(&store),
            Notifier::with_display_window(Arc::clone(&clock), notification_ttl),
        );
        let compare = CompareManager::load(store, Notifier::with_display_window(clock, notification_ttl));

        Self {
            cart,
            compare,
            checkout: CheckoutFlow::new(),
        }
    }

    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartManager {
        &mut self.cart
    }

    pub fn compare(&self) -> &CompareManager {
        &self.compare
    }

    pub fn compare_mut(&mut self) -> &mut CompareManager {
        &mut self.compare
    }

    pub fn checkout(&self) -> &CheckoutFlow {
        &self.checkout
    }

    pub fn checkout_mut(&mut self) -> &mut CheckoutFlow {
        &mut self.checkout
    }

    /// Pay for the current cart through the checkout flow.
    pub fn place_order(&mut self, card: &CardDetails) -> Result<OrderConfirmation, CheckoutError> {
        self.checkout.submit_payment(&mut self.cart, card)
    }

    /// Drop notifications whose display window has passed.
    pub fn tick(&mut self) {
        self.cart.notifier_mut().tick();
        self.compare.notifier_mut().tick();
    }
}
