// ABOUTME: Sweet CRUD and search route handlers
// ABOUTME: Role-gated REST endpoints over the sweets inventory table
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sweet management routes
//!
//! All endpoints require a valid JWT. Creation and deletion additionally
//! require the admin role, enforced through the central admin guard.
//! Search accepts snake_case query parameters (`name`, `category`,
//! `min_price`, `max_price`), each optional and AND-composed.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::{SweetChanges, SweetFilter};
use crate::errors::AppError;
use crate::middleware::{require_admin, AuthenticatedUser};
use crate::models::{self, Sweet};
use crate::resources::ServerResources;

/// Request body for creating a sweet
#[derive(Debug, Deserialize)]
pub struct CreateSweetRequest {
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Initial stock; defaults to 0 when omitted
    #[serde(default)]
    pub quantity: i64,
}

/// Request body for a partial update
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSweetRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Query parameters for `/api/sweets/search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Sweet management routes implementation
pub struct SweetRoutes;

impl SweetRoutes {
    /// Create all sweet management routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/sweets",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/api/sweets/search", get(Self::handle_search))
            .route(
                "/api/sweets/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Extract and authenticate the user from the authorization header
    pub(crate) async fn authenticate(
        headers: &HeaderMap,
        resources: &Arc<ServerResources>,
    ) -> Result<AuthenticatedUser, AppError> {
        let auth_header = headers.get("authorization").and_then(|h| h.to_str().ok());
        resources
            .auth_middleware
            .authenticate_request(auth_header)
            .await
    }

    /// Handle sweet creation (admin only)
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateSweetRequest>,
    ) -> Result<Response, AppError> {
        let auth = Self::authenticate(&headers, &resources).await?;
        require_admin(&auth)?;

        models::validate_name(&request.name)?;
        models::validate_category(&request.category)?;
        models::validate_price(request.price)?;
        models::validate_quantity(request.quantity)?;

        let sweet = Sweet::new(
            request.name,
            request.category,
            request.price,
            request.quantity,
        );
        resources.database.create_sweet(&sweet).await?;

        tracing::info!("sweet created: {} ({})", sweet.name, sweet.id);

        Ok((StatusCode::CREATED, Json(sweet)).into_response())
    }

    /// Handle listing all sweets
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        Self::authenticate(&headers, &resources).await?;

        let sweets = resources.database.list_sweets().await?;
        Ok(Json(sweets).into_response())
    }

    /// Handle searching sweets by name, category, or price range
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<SearchQuery>,
    ) -> Result<Response, AppError> {
        Self::authenticate(&headers, &resources).await?;

        let filter = SweetFilter {
            name: query.name,
            category: query.category,
            min_price: query.min_price,
            max_price: query.max_price,
        };
        let sweets = resources.database.search_sweets(&filter).await?;
        Ok(Json(sweets).into_response())
    }

    /// Handle fetching a single sweet by id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        Self::authenticate(&headers, &resources).await?;

        let sweet = resources
            .database
            .get_sweet(id)
            .await?
            .ok_or_else(|| AppError::not_found("Sweet"))?;
        Ok(Json(sweet).into_response())
    }

    /// Handle a partial update; changed fields are re-validated
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
        Json(request): Json<UpdateSweetRequest>,
    ) -> Result<Response, AppError> {
        Self::authenticate(&headers, &resources).await?;

        if let Some(name) = &request.name {
            models::validate_name(name)?;
        }
        if let Some(category) = &request.category {
            models::validate_category(category)?;
        }
        if let Some(price) = request.price {
            models::validate_price(price)?;
        }
        if let Some(quantity) = request.quantity {
            models::validate_quantity(quantity)?;
        }

        let changes = SweetChanges {
            name: request.name,
            category: request.category,
            price: request.price,
            quantity: request.quantity,
        };
        let sweet = resources.database.update_sweet(id, &changes).await?;

        Ok(Json(sweet).into_response())
    }

    /// Handle permanent deletion (admin only)
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let auth = Self::authenticate(&headers, &resources).await?;
        require_admin(&auth)?;

        resources.database.delete_sweet(id).await?;

        tracing::info!("sweet deleted: {id}");

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
