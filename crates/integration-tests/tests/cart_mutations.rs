//! Integration tests for cart mutation semantics.
//!
//! Covers add/remove/update against fresh stock snapshots: quantity bumps,
//! stock shortfalls, missing line items, and the no-op cases.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use cartside_cart::cart::CartError;
use cartside_core::ProductId;

use cartside_integration_tests::{FakeCatalog, cart_with, product};

// =============================================================================
// addProduct
// =============================================================================

#[tokio::test]
async fn test_add_absent_product_enters_with_quantity_one() {
    let catalog = Arc::new(FakeCatalog::new().with_product(product(1, "Sneaker", 17990), 5));
    let (cart, _store) = cart_with(catalog);

    let snapshot = cart.add_product(ProductId::new(1)).await.unwrap();

    assert_eq!(snapshot.len(), 1);
    let item = snapshot.first().unwrap();
    assert_eq!(item.id, ProductId::new(1));
    assert_eq!(item.quantity, 1);
    assert_eq!(item.title, "Sneaker");
}

#[tokio::test]
async fn test_add_present_product_bumps_quantity() {
    // Worked example: [{id:1, amount:1}], stock 5, add(1) -> [{id:1, amount:2}]
    let catalog = Arc::new(FakeCatalog::new().with_product(product(1, "Sneaker", 17990), 5));
    let (cart, _store) = cart_with(catalog);

    cart.add_product(ProductId::new(1)).await.unwrap();
    let snapshot = cart.add_product(ProductId::new(1)).await.unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.first().unwrap().quantity, 2);
}

#[tokio::test]
async fn test_add_fails_when_stock_does_not_exceed_quantity() {
    let catalog = Arc::new(FakeCatalog::new().with_product(product(1, "Sneaker", 17990), 1));
    let (cart, _store) = cart_with(catalog);

    cart.add_product(ProductId::new(1)).await.unwrap();
    // Stock is 1 and quantity is already 1: the bump needs stock > quantity
    let result = cart.add_product(ProductId::new(1)).await;

    assert!(matches!(
        result,
        Err(CartError::OutOfStock { available: 1, .. })
    ));
    assert_eq!(cart.snapshot().await.first().unwrap().quantity, 1);
}

#[tokio::test]
async fn test_add_sees_fresh_stock() {
    let catalog = Arc::new(FakeCatalog::new().with_product(product(1, "Sneaker", 17990), 1));
    let (cart, _store) = cart_with(catalog.clone());

    cart.add_product(ProductId::new(1)).await.unwrap();
    assert!(cart.add_product(ProductId::new(1)).await.is_err());

    // Restock: the very next add must observe it
    catalog.set_stock(ProductId::new(1), 3);
    let snapshot = cart.add_product(ProductId::new(1)).await.unwrap();
    assert_eq!(snapshot.first().unwrap().quantity, 2);
}

#[tokio::test]
async fn test_add_unknown_product_leaves_cart_unchanged() {
    let catalog = Arc::new(FakeCatalog::new());
    let (cart, _store) = cart_with(catalog);

    let result = cart.add_product(ProductId::new(99)).await;

    assert!(matches!(result, Err(CartError::Catalog(_))));
    assert!(cart.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_add_catalog_failure_leaves_cart_unchanged() {
    let catalog = Arc::new(FakeCatalog::new().with_product(product(1, "Sneaker", 17990), 5));
    let (cart, _store) = cart_with(catalog.clone());
    cart.add_product(ProductId::new(1)).await.unwrap();

    catalog.set_failing(true);
    let result = cart.add_product(ProductId::new(1)).await;

    assert!(matches!(result, Err(CartError::Catalog(_))));
    let snapshot = cart.snapshot().await;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.first().unwrap().quantity, 1);
}

// =============================================================================
// removeProduct
// =============================================================================

#[tokio::test]
async fn test_remove_present_product() {
    let catalog = Arc::new(
        FakeCatalog::new()
            .with_product(product(1, "Sneaker", 17990), 5)
            .with_product(product(2, "Boot", 23990), 5),
    );
    let (cart, _store) = cart_with(catalog);
    cart.add_product(ProductId::new(1)).await.unwrap();
    cart.add_product(ProductId::new(2)).await.unwrap();

    let snapshot = cart.remove_product(ProductId::new(1)).await.unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.first().unwrap().id, ProductId::new(2));
}

#[tokio::test]
async fn test_remove_absent_product_fails_and_leaves_cart_unchanged() {
    let catalog = Arc::new(FakeCatalog::new().with_product(product(1, "Sneaker", 17990), 5));
    let (cart, _store) = cart_with(catalog);
    cart.add_product(ProductId::new(1)).await.unwrap();

    let result = cart.remove_product(ProductId::new(2)).await;

    assert!(matches!(
        result,
        Err(CartError::NotInCart(id)) if id == ProductId::new(2)
    ));
    assert_eq!(cart.snapshot().await.len(), 1);
}

// =============================================================================
// updateProductQuantity
// =============================================================================

#[tokio::test]
async fn test_update_zero_quantity_is_silent_noop() {
    let catalog = Arc::new(FakeCatalog::new().with_product(product(1, "Sneaker", 17990), 5));
    let (cart, _store) = cart_with(catalog);
    cart.add_product(ProductId::new(1)).await.unwrap();

    let snapshot = cart
        .update_product_quantity(ProductId::new(1), 0)
        .await
        .unwrap();

    assert_eq!(snapshot.first().unwrap().quantity, 1);
}

#[tokio::test]
async fn test_update_absent_product_fails() {
    let catalog = Arc::new(FakeCatalog::new().with_product(product(1, "Sneaker", 17990), 5));
    let (cart, _store) = cart_with(catalog);

    let result = cart.update_product_quantity(ProductId::new(1), 2).await;

    assert!(matches!(result, Err(CartError::NotInCart(_))));
}

#[tokio::test]
async fn test_update_within_stock_sets_exact_quantity() {
    let catalog = Arc::new(
        FakeCatalog::new()
            .with_product(product(1, "Sneaker", 17990), 5)
            .with_product(product(2, "Boot", 23990), 5),
    );
    let (cart, _store) = cart_with(catalog);
    cart.add_product(ProductId::new(1)).await.unwrap();
    cart.add_product(ProductId::new(2)).await.unwrap();

    let snapshot = cart
        .update_product_quantity(ProductId::new(1), 5)
        .await
        .unwrap();

    let updated = snapshot.iter().find(|i| i.id == ProductId::new(1)).unwrap();
    assert_eq!(updated.quantity, 5);
    // Other items untouched
    let other = snapshot.iter().find(|i| i.id == ProductId::new(2)).unwrap();
    assert_eq!(other.quantity, 1);
    assert_eq!(other.title, "Boot");
}

#[tokio::test]
async fn test_update_beyond_stock_fails_and_leaves_cart_unchanged() {
    let catalog = Arc::new(FakeCatalog::new().with_product(product(1, "Sneaker", 17990), 4));
    let (cart, _store) = cart_with(catalog);
    cart.add_product(ProductId::new(1)).await.unwrap();

    let result = cart.update_product_quantity(ProductId::new(1), 5).await;

    assert!(matches!(
        result,
        Err(CartError::OutOfStock { available: 4, .. })
    ));
    assert_eq!(cart.snapshot().await.first().unwrap().quantity, 1);
}

#[tokio::test]
async fn test_update_to_stock_limit_succeeds() {
    // stock.amount >= quantity allows equality
    let catalog = Arc::new(FakeCatalog::new().with_product(product(1, "Sneaker", 17990), 4));
    let (cart, _store) = cart_with(catalog);
    cart.add_product(ProductId::new(1)).await.unwrap();

    let snapshot = cart
        .update_product_quantity(ProductId::new(1), 4)
        .await
        .unwrap();

    assert_eq!(snapshot.first().unwrap().quantity, 4);
}

// =============================================================================
// Ordering and concurrency
// =============================================================================

#[tokio::test]
async fn test_insertion_order_preserved() {
    let catalog = Arc::new(
        FakeCatalog::new()
            .with_product(product(3, "Cap", 4990), 5)
            .with_product(product(1, "Sneaker", 17990), 5)
            .with_product(product(2, "Boot", 23990), 5),
    );
    let (cart, _store) = cart_with(catalog);
    cart.add_product(ProductId::new(3)).await.unwrap();
    cart.add_product(ProductId::new(1)).await.unwrap();
    cart.add_product(ProductId::new(2)).await.unwrap();

    let ids: Vec<i64> = cart.snapshot().await.iter().map(|i| i.id.as_i64()).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[tokio::test]
async fn test_concurrent_adds_never_duplicate_a_line() {
    // Operations hold the collection lock across the stock fetch, so two
    // racing adds of the same product must serialize into one line with
    // quantity 2.
    let catalog = Arc::new(FakeCatalog::new().with_product(product(1, "Sneaker", 17990), 10));
    let (cart, _store) = cart_with(catalog);

    let a = cart.clone();
    let b = cart.clone();
    let (first, second) = tokio::join!(
        a.add_product(ProductId::new(1)),
        b.add_product(ProductId::new(1)),
    );
    first.unwrap();
    second.unwrap();

    let snapshot = cart.snapshot().await;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.first().unwrap().quantity, 2);
}
