// ABOUTME: Route module organization for the sweet shop HTTP endpoints
// ABOUTME: Assembles domain routers and shared middleware into one axum Router
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route module for the sweet shop API
//!
//! Each domain module contains route definitions and thin handler
//! functions that delegate to the database layer. Handlers authenticate
//! through the shared middleware and admin-only handlers go through the
//! central admin guard.

/// Authentication routes (register, login)
pub mod auth;
/// Health check and readiness routes
pub mod health;
/// Inventory mutation routes (purchase, restock)
pub mod inventory;
/// Sweet CRUD and search routes
pub mod sweets;

pub use auth::{AuthRoutes, AuthService, LoginRequest, LoginResponse, RegisterRequest};
pub use health::HealthRoutes;
pub use inventory::{InventoryRoutes, RestockRequest};
pub use sweets::{CreateSweetRequest, SearchQuery, SweetRoutes, UpdateSweetRequest};

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::resources::ServerResources;

/// Build the full application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AuthRoutes::routes(resources.clone()))
        .merge(SweetRoutes::routes(resources.clone()))
        .merge(InventoryRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
