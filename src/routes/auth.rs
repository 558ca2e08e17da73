// ABOUTME: User authentication route handlers for registration and login
// ABOUTME: REST endpoints issuing JWTs for the inventory API
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication routes for user management
//!
//! Registration always creates a regular user; administrator accounts are
//! provisioned out of band (startup bootstrap or the seeder). Handlers are
//! thin wrappers that delegate to [`AuthService`].

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::resources::ServerResources;

/// Minimum accepted password length
const PASSWORD_MIN_LEN: usize = 8;

/// User registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

/// User registration response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: String,
    pub message: String,
}

/// User login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User info for the login response
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub user_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub role: String,
}

/// User login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub jwt_token: String,
    pub expires_at: String,
    pub user: UserInfo,
}

/// Authentication service for business logic
#[derive(Clone)]
pub struct AuthService {
    resources: Arc<ServerResources>,
}

impl AuthService {
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Handle user registration
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed email or weak password,
    /// and a conflict error when the email is already registered.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        tracing::info!("user registration attempt for {}", request.email);

        if !is_valid_email(&request.email) {
            return Err(AppError::invalid_input("Invalid email format"));
        }
        if request.password.chars().count() < PASSWORD_MIN_LEN {
            return Err(AppError::invalid_input(format!(
                "Password must be at least {PASSWORD_MIN_LEN} characters"
            )));
        }

        if self
            .resources
            .database
            .get_user_by_email(&request.email)
            .await
            .map_err(AppError::from)?
            .is_some()
        {
            return Err(AppError::already_exists("Email is already registered"));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        let user = User::new(request.email.clone(), password_hash, request.display_name);
        let user_id = self
            .resources
            .database
            .create_user(&user)
            .await
            .map_err(AppError::from)?;

        tracing::info!("user registered: {} ({user_id})", request.email);

        Ok(RegisterResponse {
            user_id: user_id.to_string(),
            message: "User registered successfully".to_owned(),
        })
    }

    /// Handle user login
    ///
    /// # Errors
    ///
    /// Returns an authentication error for unknown emails or a wrong
    /// password; the two cases are indistinguishable to the caller.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        tracing::info!("user login attempt for {}", request.email);

        let user = self
            .resources
            .database
            .get_user_by_email(&request.email)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::auth_invalid("Invalid email or password"))?;

        // Verify on a blocking thread; bcrypt is CPU-bound
        let password = request.password;
        let password_hash = user.password_hash.clone();
        let is_valid =
            tokio::task::spawn_blocking(move || bcrypt::verify(&password, &password_hash))
                .await
                .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
                .map_err(|e| AppError::internal(format!("Password verification error: {e}")))?;

        if !is_valid {
            tracing::warn!("invalid password for {}", request.email);
            return Err(AppError::auth_invalid("Invalid email or password"));
        }

        let jwt_token = self.resources.auth_manager.generate_token(&user)?;
        let expires_at = chrono::Utc::now() + self.resources.auth_manager.token_expiry();

        tracing::info!("login successful for {} ({})", user.email, user.role);

        Ok(LoginResponse {
            jwt_token,
            expires_at: expires_at.to_rfc3339(),
            user: UserInfo {
                user_id: user.id.to_string(),
                email: user.email,
                display_name: user.display_name,
                role: user.role.to_string(),
            },
        })
    }
}

/// Authentication routes implementation
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::handle_register))
            .route("/api/auth/login", post(Self::handle_login))
            .with_state(resources)
    }

    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        let response = AuthService::new(resources).register(request).await?;
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        let response = AuthService::new(resources).login(request).await?;
        Ok(Json(response).into_response())
    }
}

/// Minimal email shape check; full validation is the mail server's job
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
