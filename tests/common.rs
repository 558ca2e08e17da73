// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, auth, and request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Shared test utilities for `sweet_shop_server`
//!
//! Common setup helpers to reduce duplication across integration tests.

use std::sync::{Arc, Once};

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use sweet_shop_server::config::ServerConfig;
use sweet_shop_server::database::Database;
use sweet_shop_server::models::User;
use sweet_shop_server::resources::ServerResources;
use sweet_shop_server::routes;

/// Low bcrypt cost to keep tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test configuration over an in-memory database
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        database_url: "sqlite::memory:".to_owned(),
        jwt_secret: "test-secret".to_owned(),
        jwt_expiry_hours: 24,
        admin_email: None,
        admin_password: None,
    }
}

/// Standard test resources setup with a fresh in-memory database
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    init_test_logging();
    let database = Arc::new(Database::new("sqlite::memory:").await?);
    Ok(Arc::new(ServerResources::new(database, test_config())))
}

/// Build the full application router over the given resources
pub fn create_test_app(resources: Arc<ServerResources>) -> Router {
    routes::router(resources)
}

/// Create a regular user and a valid token for them
pub async fn create_test_user(
    resources: &Arc<ServerResources>,
    email: &str,
    password: &str,
) -> Result<(User, String)> {
    let password_hash = bcrypt::hash(password, TEST_BCRYPT_COST)?;
    let user = User::new(email.to_owned(), password_hash, Some("Test User".to_owned()));
    resources.database.create_user(&user).await?;
    let token = resources.auth_manager.generate_token(&user)?;
    Ok((user, token))
}

/// Create an admin user and a valid token for them
pub async fn create_test_admin(
    resources: &Arc<ServerResources>,
    email: &str,
    password: &str,
) -> Result<(User, String)> {
    let password_hash = bcrypt::hash(password, TEST_BCRYPT_COST)?;
    let user = User::new_admin(email.to_owned(), password_hash, Some("Test Admin".to_owned()));
    resources.database.create_user(&user).await?;
    let token = resources.auth_manager.generate_token(&user)?;
    Ok((user, token))
}

/// Send a request through the router and decode the JSON response body
///
/// Returns `Value::Null` for empty bodies (204 responses).
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .map_err(|e| anyhow::anyhow!("request failed: {e}"))?;

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, json))
}
