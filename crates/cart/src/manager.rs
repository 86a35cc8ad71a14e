use std::sync::Arc;

use glowcart_catalog::Product;
use glowcart_core::{Entity, Money, ProductId};
use glowcart_notify::{Notification, Notifier};
use glowcart_storage::{CART_KEY, ListStore, load_list, save_list};

use crate::line::CartLine;
use crate::summary::OrderSummary;

/// Owns the shopping cart.
///
/// - Lines are kept in insertion order, one per product
/// - Every mutation is written through to the `cart` slot before returning
/// - Operations never fail; storage errors are logged and the in-memory state
///   stays authoritative
#[derive(Debug)]
pub struct CartManager {
    store: Arc<dyn ListStore>,
    notifier: Notifier,
    lines: Vec<CartLine>,
    open: bool,
}

impl CartManager {
    /// Hydrate the cart from the `cart` slot (empty if missing or unreadable).
    pub fn load(store: Arc<dyn ListStore>, notifier: Notifier) -> Self {
        let lines = sanitize(load_list::<CartLine, _>(store.as_ref(), CART_KEY));
        tracing::debug!(lines = lines.len(), "cart hydrated");
        Self {
            store,
            notifier,
            lines,
            open: false,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id() == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` units of `product`, merging into an existing line.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) {
        if quantity > 0 {
            match self.lines.iter_mut().find(|l| l.id() == product.id) {
                Some(line) => line.quantity = line.quantity.saturating_add(quantity),
                None => self.lines.push(CartLine::from_product(product, quantity)),
            }
        }
        tracing::debug!(product_id = %product.id, quantity, "added to cart");

        self.notifier.success(format!("{} added to cart", product.name));
        self.persist();
    }

    pub fn add_one(&mut self, product: &Product) {
        self.add_to_cart(product, 1);
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.id() != product_id);
        tracing::debug!(%product_id, "removed from cart");
        self.persist();
    }

    /// Set a line's quantity exactly; zero or negative removes the line.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|l| l.id() == product_id) {
            line.quantity = quantity;
        }
        tracing::debug!(%product_id, quantity, "cart quantity updated");
        self.persist();
    }

    pub fn clear_cart(&mut self) {
        self.lines.clear();
        tracing::debug!("cart cleared");
        self.persist();
    }

    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_subtotal(self.total_price())
    }

    pub fn is_cart_open(&self) -> bool {
        self.open
    }

    pub fn toggle_cart(&mut self) {
        self.open = !self.open;
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifier.current()
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    fn persist(&self) {
        if let Err(err) = save_list(self.store.as_ref(), CART_KEY, &self.lines) {
            tracing::warn!(error = %err, "failed to persist cart; keeping in-memory state");
        }
    }
}

/// Drop zero-quantity lines and merge duplicate ids from a stored payload.
fn sanitize(stored: Vec<CartLine>) -> Vec<CartLine> {
    let mut lines: Vec<CartLine> = Vec::with_capacity(stored.len());
    for line in stored.into_iter().filter(|l| l.quantity > 0) {
        match lines.iter_mut().find(|l| l.id == line.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => lines.push(line),
        }
    }
    lines
}
