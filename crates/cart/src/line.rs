use serde::{Deserialize, Serialize};

use glowcart_catalog::Product;
use glowcart_core::{Entity, Money, ProductId};

/// Cart line: product snapshot taken at add time plus a quantity.
///
/// The snapshot is never refreshed from the catalog; a price change after the
/// product was added does not reach the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Always ≥ 1 while the line is in a cart.
    pub quantity: u32,
}

impl CartLine {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.image.clone(),
            quantity,
        }
    }

    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

impl Entity for CartLine {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
