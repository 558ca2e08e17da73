// ABOUTME: Integration tests for the sweet search endpoint
// ABOUTME: Validates substring matching, price bounds, and filter composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

/// Seed a small catalogue and return the app plus a user token
async fn setup() -> Result<(axum::Router, String)> {
    let resources = common::create_test_resources().await?;
    let app = common::create_test_app(resources.clone());
    let (_, admin_token) =
        common::create_test_admin(&resources, "admin@example.com", "secure-password").await?;
    let (_, user_token) =
        common::create_test_user(&resources, "user@example.com", "secure-password").await?;

    for (name, category, price, quantity) in [
        ("Dark Chocolate Bar", "Chocolate", 4.50, 20),
        ("Milk Chocolate Bar", "Chocolate", 3.50, 25),
        ("Lemon Drops", "Hard Candy", 1.25, 40),
        ("Gummy Bears", "Gummies", 2.00, 30),
        ("Sour Gummy Worms", "Gummies", 2.50, 15),
    ] {
        let (status, _) = common::request(
            &app,
            Method::POST,
            "/api/sweets",
            Some(&admin_token),
            Some(json!({"name": name, "category": category, "price": price, "quantity": quantity})),
        )
        .await?;
        assert_eq!(status, StatusCode::CREATED);
    }

    Ok((app, user_token))
}

async fn search_names(app: &axum::Router, token: &str, query: &str) -> Result<Vec<String>> {
    let (status, body) = common::request(
        app,
        Method::GET,
        &format!("/api/sweets/search{query}"),
        Some(token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    Ok(body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_owned())
        .collect())
}

#[tokio::test]
async fn test_search_by_name_is_case_insensitive_substring() -> Result<()> {
    let (app, token) = setup().await?;

    let names = search_names(&app, &token, "?name=chocolate").await?;
    assert_eq!(names, ["Dark Chocolate Bar", "Milk Chocolate Bar"]);

    let names = search_names(&app, &token, "?name=GUMMY").await?;
    assert_eq!(names, ["Gummy Bears", "Sour Gummy Worms"]);

    Ok(())
}

#[tokio::test]
async fn test_search_by_category() -> Result<()> {
    let (app, token) = setup().await?;

    let names = search_names(&app, &token, "?category=gummies").await?;
    assert_eq!(names, ["Gummy Bears", "Sour Gummy Worms"]);

    Ok(())
}

#[tokio::test]
async fn test_search_by_price_range_is_inclusive() -> Result<()> {
    let (app, token) = setup().await?;

    let names = search_names(&app, &token, "?min_price=2.00&max_price=3.50").await?;
    assert_eq!(names, ["Milk Chocolate Bar", "Gummy Bears", "Sour Gummy Worms"]);

    let names = search_names(&app, &token, "?min_price=4.50").await?;
    assert_eq!(names, ["Dark Chocolate Bar"]);

    Ok(())
}

#[tokio::test]
async fn test_search_composes_filters_with_and() -> Result<()> {
    let (app, token) = setup().await?;

    let names = search_names(&app, &token, "?category=Gummies&max_price=2.00").await?;
    assert_eq!(names, ["Gummy Bears"]);

    Ok(())
}

#[tokio::test]
async fn test_search_without_filters_returns_everything() -> Result<()> {
    let (app, token) = setup().await?;

    let names = search_names(&app, &token, "").await?;
    assert_eq!(names.len(), 5);

    Ok(())
}

#[tokio::test]
async fn test_search_with_no_matches_returns_empty_list() -> Result<()> {
    let (app, token) = setup().await?;

    let names = search_names(&app, &token, "?name=liquorice").await?;
    assert!(names.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_search_requires_authentication() -> Result<()> {
    let (app, _) = setup().await?;

    let (status, body) = common::request(
        &app,
        Method::GET,
        "/api/sweets/search?name=chocolate",
        None,
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "AUTH_REQUIRED");

    Ok(())
}
