//! Cart persistence round-trips against real files.
//!
//! These tests exercise the full mutate -> serialize -> file -> rehydrate
//! path with a unique slot per test, so they can run in parallel.

use std::path::PathBuf;
use std::sync::Arc;

use bramble_core::{Product, ProductId};
use bramble_storefront::cart::{CartStorage, CartStore, JsonFileStorage};
use bramble_storefront::config::StorefrontConfig;
use bramble_storefront::state::AppState;

/// A unique slot path under the system temp directory.
fn temp_slot_path() -> PathBuf {
    std::env::temp_dir().join(format!("bramble-cart-{}.json", uuid::Uuid::new_v4()))
}

fn product(id: i64, title: &str, price: f64) -> Product {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "price": price,
        "category": "men's clothing",
    }))
    .expect("valid product")
}

#[test]
fn test_cart_survives_reload_from_file() {
    bramble_integration_tests::init_tracing();
    let path = temp_slot_path();

    {
        let cart = CartStore::load(Arc::new(JsonFileStorage::new(path.clone())));
        let shirt = product(1, "Red Shirt", 20.0);
        cart.add_to_cart(&shirt);
        cart.add_to_cart(&shirt);
        cart.add_to_cart(&product(2, "Gold Ring", 100.0));
    }

    // A fresh store rehydrates the exact state at the last mutation.
    let reloaded = CartStore::load(Arc::new(JsonFileStorage::new(path.clone())));
    let lines = reloaded.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].id(), ProductId::new(1));
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(lines[1].id(), ProductId::new(2));
    assert_eq!(lines[1].quantity, 1);

    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn test_clear_persists_empty_cart() {
    bramble_integration_tests::init_tracing();
    let path = temp_slot_path();

    let cart = CartStore::load(Arc::new(JsonFileStorage::new(path.clone())));
    cart.add_to_cart(&product(1, "Red Shirt", 20.0));
    cart.clear();

    let reloaded = CartStore::load(Arc::new(JsonFileStorage::new(path.clone())));
    assert!(reloaded.is_empty());

    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn test_corrupt_slot_fails_open_to_empty_cart() {
    bramble_integration_tests::init_tracing();
    let path = temp_slot_path();

    let storage = JsonFileStorage::new(path.clone());
    storage.write("{definitely not a cart").expect("write");

    let cart = CartStore::load(Arc::new(storage));
    assert!(cart.is_empty());

    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn test_slot_format_matches_flattened_lines() {
    bramble_integration_tests::init_tracing();
    let path = temp_slot_path();

    let cart = CartStore::load(Arc::new(JsonFileStorage::new(path.clone())));
    cart.add_to_cart(&product(3, "Blue Shirt", 15.0));

    let raw = std::fs::read_to_string(&path).expect("slot written");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value[0]["id"], serde_json::json!(3));
    assert_eq!(value[0]["title"], serde_json::json!("Blue Shirt"));
    assert_eq!(value[0]["quantity"], serde_json::json!(1));
    // Product fields sit beside quantity, not nested.
    assert!(value[0].get("product").is_none());

    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn test_app_state_wires_file_backed_cart() {
    bramble_integration_tests::init_tracing();
    let path = temp_slot_path();

    let mut config = StorefrontConfig::default();
    config.cart.storage_path.clone_from(&path);

    let state = AppState::new(config.clone()).expect("valid config");
    state.cart().add_to_cart(&product(1, "Red Shirt", 20.0));

    let state2 = AppState::new(config).expect("valid config");
    assert_eq!(state2.cart().total_quantity(), 1);

    std::fs::remove_file(&path).expect("cleanup");
}
