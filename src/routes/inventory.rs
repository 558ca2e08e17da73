// ABOUTME: Inventory mutation route handlers for purchase and restock
// ABOUTME: Stock decrements for users, role-gated increments for admins
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inventory routes
//!
//! `purchase` decrements a sweet's quantity by exactly one and fails with
//! 400 when the record is out of stock. `restock` is admin-only and
//! increments by a caller-supplied positive amount.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::middleware::require_admin;
use crate::resources::ServerResources;
use crate::routes::sweets::SweetRoutes;

/// Request body for restocking a sweet
#[derive(Debug, Deserialize)]
pub struct RestockRequest {
    pub quantity: i64,
}

/// Inventory routes implementation
pub struct InventoryRoutes;

impl InventoryRoutes {
    /// Create all inventory routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/sweets/:id/purchase", post(Self::handle_purchase))
            .route("/api/sweets/:id/restock", post(Self::handle_restock))
            .with_state(resources)
    }

    /// Handle purchasing one unit of a sweet
    async fn handle_purchase(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let auth = SweetRoutes::authenticate(&headers, &resources).await?;

        let sweet = resources.database.purchase_sweet(id).await?;

        tracing::info!(
            "purchase: {} by {} ({} left)",
            sweet.name,
            auth.email,
            sweet.quantity
        );

        Ok(Json(sweet).into_response())
    }

    /// Handle restocking a sweet (admin only)
    async fn handle_restock(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
        Json(request): Json<RestockRequest>,
    ) -> Result<Response, AppError> {
        let auth = SweetRoutes::authenticate(&headers, &resources).await?;
        require_admin(&auth)?;

        if request.quantity <= 0 {
            return Err(AppError::invalid_input(
                "Restock quantity must be greater than 0",
            ));
        }

        let sweet = resources
            .database
            .restock_sweet(id, request.quantity)
            .await?;

        tracing::info!(
            "restock: {} +{} by {} ({} in stock)",
            sweet.name,
            request.quantity,
            auth.email,
            sweet.quantity
        );

        Ok(Json(sweet).into_response())
    }
}
