use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use glowcart_core::{Entity, Money, ProductId};

/// A tag-valued product attribute (skin types, concerns, ingredients).
///
/// The product provider is inconsistent here: some rows carry a JSON array,
/// others a single comma-separated string. Both are accepted and written back
/// in the form they were read so snapshots round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagList {
    List(Vec<String>),
    Csv(String),
}

impl TagList {
    /// Individual tags, trimmed, with empty entries dropped.
    pub fn tags(&self) -> Vec<String> {
        match self {
            TagList::List(items) => items
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            TagList::Csv(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Tags only when the provider sent a real list.
    ///
    /// The comparison table ignores comma-separated strings.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            TagList::List(items) => Some(items),
            TagList::Csv(_) => None,
        }
    }

    /// No usable tags, e.g. `""` or `[" "]`.
    pub fn is_blank(&self) -> bool {
        self.tags().is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }
}

impl From<&str> for TagList {
    fn from(value: &str) -> Self {
        TagList::Csv(value.to_string())
    }
}

impl From<Vec<&str>> for TagList {
    fn from(value: Vec<&str>) -> Self {
        TagList::List(value.into_iter().map(str::to_string).collect())
    }
}

/// Read-only product snapshot as delivered by the product provider.
///
/// Fields the storefront does not interpret are kept in `extra` so a snapshot
/// stored in the compare list carries the full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub price: Money,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "skinType", alias = "skin_type", skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<TagList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concerns: Option<TagList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<TagList>,
    #[serde(default, rename = "howToUse", alias = "how_to_use", skip_serializing_if = "Option::is_none")]
    pub how_to_use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Minimal snapshot with only the fields the cart needs.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
            image: None,
            description: None,
            skin_type: None,
            concerns: None,
            ingredients: None,
            how_to_use: None,
            size: None,
            extra: Map::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_skin_type(mut self, tags: impl Into<TagList>) -> Self {
        self.skin_type = Some(tags.into());
        self
    }

    pub fn with_concerns(mut self, tags: impl Into<TagList>) -> Self {
        self.concerns = Some(tags.into());
        self
    }

    pub fn with_ingredients(mut self, tags: impl Into<TagList>) -> Self {
        self.ingredients = Some(tags.into());
        self
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_provider_row_with_camel_case_keys() {
        let row = json!({
            "id": 3,
            "name": "Hydra Serum",
            "price": 189000,
            "category": "Serum",
            "skinType": ["dry", "normal"],
            "concerns": "dullness, dehydration",
            "howToUse": "Apply twice daily",
            "stock": 12
        });

        let product: Product = serde_json::from_value(row).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price, Money::new(189_000));
        assert_eq!(
            product.skin_type.as_ref().unwrap().tags(),
            vec!["dry".to_string(), "normal".to_string()]
        );
        assert_eq!(
            product.concerns.as_ref().unwrap().tags(),
            vec!["dullness".to_string(), "dehydration".to_string()]
        );
        assert_eq!(product.how_to_use.as_deref(), Some("Apply twice daily"));
        assert_eq!(product.extra.get("stock"), Some(&json!(12)));
    }

    #[test]
    fn missing_price_and_category_default() {
        let product: Product = serde_json::from_value(json!({"id": 1, "name": "Toner"})).unwrap();
        assert_eq!(product.price, Money::ZERO);
        assert_eq!(product.category, "");
    }

    #[test]
    fn snapshot_survives_serialization() {
        let product = Product::new(ProductId::new(9), "Clay Mask", Money::new(99_000), "Mask")
            .with_image("/img/mask.png")
            .with_concerns("acne, pores");
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);

        let value = serde_json::to_value(product.with_skin_type(vec!["oily"])).unwrap();
        assert_eq!(value["skinType"], json!(["oily"]));
        assert_eq!(value["concerns"], json!("acne, pores"));
    }

    #[test]
    fn snake_case_keys_are_written_back_in_camel_case() {
        let row = json!({
            "id": 4,
            "name": "Barrier Cream",
            "skin_type": "dry, sensitive",
            "how_to_use": "Apply at night"
        });
        let product: Product = serde_json::from_value(row).unwrap();
        assert!(product.extra.is_empty());

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["skinType"], json!("dry, sensitive"));
        assert_eq!(value["howToUse"], json!("Apply at night"));
        assert!(value.get("skin_type").is_none());
        assert!(value.get("how_to_use").is_none());
    }

    #[test]
    fn blank_tags_are_reported() {
        assert!(TagList::from("").is_blank());
        assert!(TagList::from(vec![" ", ""]).is_blank());
        assert!(!TagList::from("oily").is_blank());
    }

    #[test]
    fn list_only_view_ignores_csv() {
        assert!(TagList::Csv("a, b".into()).as_list().is_none());
        assert_eq!(TagList::from(vec!["a"]).as_list().unwrap().len(), 1);
    }
}
