//! Product listing filters and search.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use glowcart_core::Money;

use crate::product::{Product, TagList};

/// Inclusive price bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: Money) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Money::ZERO,
            max: Money::new(u64::MAX),
        }
    }
}

/// Filter applied to the product listing.
///
/// Empty selections match everything. Skin-type and concern selections only
/// exclude products that actually declare those attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub skin_types: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default)]
    pub price_range: PriceRange,
    /// Full price span of the listing; a `price_range` covering it is not a
    /// restriction.
    #[serde(skip)]
    bounds: PriceRange,
}

impl ProductFilter {
    /// Untouched filter for a listing: nothing selected, price range preset
    /// to the cheapest and most expensive of `products`.
    pub fn for_products(products: &[Product]) -> Self {
        let bounds = price_bounds(products);
        Self {
            price_range: bounds,
            bounds,
            ..Self::default()
        }
    }

    pub fn bounds(&self) -> PriceRange {
        self.bounds
    }

    /// Whether any selection narrows the listing.
    pub fn is_active(&self) -> bool {
        !self.categories.is_empty()
            || !self.skin_types.is_empty()
            || !self.concerns.is_empty()
            || self.price_range.min > self.bounds.min
            || self.price_range.max < self.bounds.max
    }

    /// Drop every selection, keeping the listing's price bounds.
    pub fn clear(&mut self) {
        *self = Self {
            price_range: self.bounds,
            bounds: self.bounds,
            ..Self::default()
        };
    }

    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty() {
            let category = product.category.to_lowercase();
            if !self.categories.iter().any(|c| *c == category) {
                return false;
            }
        }

        if !self.skin_types.is_empty() {
            if let Some(declared) = declared_tags(&product.skin_type) {
                if !self.skin_types.iter().any(|t| declared.contains(t)) {
                    return false;
                }
            }
        }

        if !self.concerns.is_empty() {
            if let Some(declared) = declared_tags(&product.concerns) {
                if !self.concerns.iter().any(|c| declared.contains(c)) {
                    return false;
                }
            }
        }

        self.price_range.contains(product.price)
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// A tag attribute that is absent or holds no tags counts as undeclared.
fn declared_tags(tags: &Option<TagList>) -> Option<&TagList> {
    tags.as_ref().filter(|t| !t.is_blank())
}

/// Price span of a listing: cheapest to most expensive product.
///
/// An empty listing spans `0..=0`.
pub fn price_bounds(products: &[Product]) -> PriceRange {
    let min = products.iter().map(|p| p.price).min().unwrap_or(Money::ZERO);
    let max = products.iter().map(|p| p.price).max().unwrap_or(Money::ZERO);
    PriceRange::new(min, max)
}

/// Choices offered by the filter panel for a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub skin_types: Vec<String>,
    pub concerns: Vec<String>,
    pub price_range: PriceRange,
}

impl FilterOptions {
    /// Sorted distinct categories, skin types and concerns across `products`,
    /// plus their price span.
    pub fn from_products(products: &[Product]) -> Self {
        let mut categories = BTreeSet::new();
        let mut skin_types = BTreeSet::new();
        let mut concerns = BTreeSet::new();

        for product in products {
            if !product.category.trim().is_empty() {
                categories.insert(product.category.clone());
            }
            if let Some(tags) = &product.skin_type {
                skin_types.extend(tags.tags());
            }
            if let Some(tags) = &product.concerns {
                concerns.extend(tags.tags());
            }
        }

        Self {
            categories: categories.into_iter().collect(),
            skin_types: skin_types.into_iter().collect(),
            concerns: concerns.into_iter().collect(),
            price_range: price_bounds(products),
        }
    }
}

/// Case-insensitive substring search over product name and category.
///
/// A blank term returns every product.
pub fn search<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.category.to_lowercase().contains(&needle)
        })
        .collect()
}
