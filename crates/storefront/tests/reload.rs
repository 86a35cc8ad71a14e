use std::fs;

use glowcart_catalog::Product;
use glowcart_core::{Money, ProductId};
use glowcart_storefront::{Storefront, StorefrontConfig};

fn product(id: i64, name: &str, price: u64) -> Product {
    Product::new(ProductId::new(id), name, Money::new(price), "Serum")
}

#[test]
fn file_backed_session_reloads_both_lists() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorefrontConfig::new(dir.path());

    {
        let mut shop = Storefront::open(&config).unwrap();
        shop.cart_mut().add_to_cart(&product(1, "Hydrating Toner", 10_000), 2);
        shop.cart_mut().add_to_cart(&product(2, "Clay Mask", 5_000), 1);
        for id in 1..=4 {
            shop.compare_mut().add_to_compare(&product(id, "Item", 1_000));
        }
        shop.compare_mut().reorder_compare_list(2, 0);
    }

    let shop = Storefront::open(&config).unwrap();
    assert_eq!(shop.cart().total_price(), Money::new(25_000));
    assert_eq!(shop.cart().total_items(), 3);

    let ids: Vec<i64> = shop.compare().entries().iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![3, 1, 2]);

    assert!(dir.path().join("cart.json").exists());
    assert!(dir.path().join("compareList.json").exists());
}

#[test]
fn legacy_and_corrupt_files_open_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("cart.json"),
        r#"[{"id":5,"name":"Sunscreen","price":89000,"category":"Sun Care","quantity":1}]"#,
    )
    .unwrap();
    fs::write(dir.path().join("compareList.json"), "not json at all").unwrap();

    let shop = Storefront::open(&StorefrontConfig::new(dir.path())).unwrap();
    assert_eq!(shop.cart().lines().len(), 1);
    assert_eq!(shop.cart().lines()[0].name, "Sunscreen");
    assert!(shop.compare().is_empty());
}

#[test]
fn clearing_persists_empty_lists() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorefrontConfig::new(dir.path());

    let mut shop = Storefront::open(&config).unwrap();
    shop.cart_mut().add_to_cart(&product(9, "Eye Cream", 150_000), 1);
    shop.cart_mut().clear_cart();
    drop(shop);

    let raw = fs::read_to_string(dir.path().join("cart.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["items"], serde_json::json!([]));
}
