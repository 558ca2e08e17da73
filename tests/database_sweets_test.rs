// ABOUTME: Integration tests for sweet inventory database operations
// ABOUTME: Validates CRUD, search filters, and transactional stock mutations
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use std::sync::Arc;
use sweet_shop_server::database::{Database, SweetChanges, SweetFilter};
use sweet_shop_server::errors::ErrorCode;
use sweet_shop_server::models::Sweet;
use uuid::Uuid;

async fn create_test_database() -> Result<Arc<Database>> {
    common::init_test_logging();
    Ok(Arc::new(Database::new("sqlite::memory:").await?))
}

fn sample_sweet() -> Sweet {
    Sweet::new("Gulab Jamun".to_owned(), "Milk-based".to_owned(), 25.0, 50)
}

#[tokio::test]
async fn test_create_and_get_round_trip() -> Result<()> {
    let database = create_test_database().await?;
    let sweet = sample_sweet();

    database.create_sweet(&sweet).await?;
    let stored = database.get_sweet(sweet.id).await?.expect("stored sweet");

    assert_eq!(stored.id, sweet.id);
    assert_eq!(stored.name, sweet.name);
    assert_eq!(stored.category, sweet.category);
    assert_eq!(stored.price, sweet.price);
    assert_eq!(stored.quantity, sweet.quantity);
    assert_eq!(stored.created_at, sweet.created_at);

    Ok(())
}

#[tokio::test]
async fn test_get_unknown_id_is_none() -> Result<()> {
    let database = create_test_database().await?;
    assert!(database.get_sweet(Uuid::new_v4()).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_update_applies_only_set_fields() -> Result<()> {
    let database = create_test_database().await?;
    let sweet = sample_sweet();
    database.create_sweet(&sweet).await?;

    let changes = SweetChanges {
        price: Some(27.5),
        quantity: Some(0),
        ..SweetChanges::default()
    };
    let updated = database.update_sweet(sweet.id, &changes).await?;

    assert_eq!(updated.name, "Gulab Jamun");
    assert_eq!(updated.price, 27.5);
    assert_eq!(updated.quantity, 0);
    assert!(updated.updated_at >= sweet.updated_at);

    Ok(())
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() -> Result<()> {
    let database = create_test_database().await?;

    let err = database
        .update_sweet(Uuid::new_v4(), &SweetChanges::default())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    Ok(())
}

#[tokio::test]
async fn test_delete_removes_record() -> Result<()> {
    let database = create_test_database().await?;
    let sweet = sample_sweet();
    database.create_sweet(&sweet).await?;

    database.delete_sweet(sweet.id).await?;
    assert!(database.get_sweet(sweet.id).await?.is_none());

    let err = database.delete_sweet(sweet.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    Ok(())
}

#[tokio::test]
async fn test_purchase_decrements_until_out_of_stock() -> Result<()> {
    let database = create_test_database().await?;
    let mut sweet = sample_sweet();
    sweet.quantity = 2;
    database.create_sweet(&sweet).await?;

    assert_eq!(database.purchase_sweet(sweet.id).await?.quantity, 1);
    assert_eq!(database.purchase_sweet(sweet.id).await?.quantity, 0);

    let err = database.purchase_sweet(sweet.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidState);

    // The failed purchase must not have touched the record
    let stored = database.get_sweet(sweet.id).await?.unwrap();
    assert_eq!(stored.quantity, 0);

    Ok(())
}

#[tokio::test]
async fn test_restock_increments_quantity() -> Result<()> {
    let database = create_test_database().await?;
    let sweet = sample_sweet();
    database.create_sweet(&sweet).await?;

    let restocked = database.restock_sweet(sweet.id, 25).await?;
    assert_eq!(restocked.quantity, 75);

    Ok(())
}

#[tokio::test]
async fn test_list_returns_insertion_order() -> Result<()> {
    let database = create_test_database().await?;
    for name in ["Jalebi", "Barfi", "Kulfi"] {
        let sweet = Sweet::new(name.to_owned(), "Misc".to_owned(), 10.0, 5);
        database.create_sweet(&sweet).await?;
    }

    let names: Vec<String> = database
        .list_sweets()
        .await?
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, ["Jalebi", "Barfi", "Kulfi"]);

    Ok(())
}

#[tokio::test]
async fn test_search_treats_like_wildcards_literally() -> Result<()> {
    let database = create_test_database().await?;
    for name in ["100% Cocoa", "Plain Cocoa"] {
        let sweet = Sweet::new(name.to_owned(), "Chocolate".to_owned(), 5.0, 10);
        database.create_sweet(&sweet).await?;
    }

    let filter = SweetFilter {
        name: Some("100%".to_owned()),
        ..SweetFilter::default()
    };
    let results = database.search_sweets(&filter).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "100% Cocoa");

    Ok(())
}

#[tokio::test]
async fn test_search_empty_filter_matches_all() -> Result<()> {
    let database = create_test_database().await?;
    for name in ["Jalebi", "Barfi"] {
        let sweet = Sweet::new(name.to_owned(), "Misc".to_owned(), 10.0, 5);
        database.create_sweet(&sweet).await?;
    }

    let filter = SweetFilter::default();
    assert!(filter.is_empty());
    assert_eq!(database.search_sweets(&filter).await?.len(), 2);

    Ok(())
}
