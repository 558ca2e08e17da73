// ABOUTME: Authentication middleware for bearer-token request authentication
// ABOUTME: Validates JWTs and resolves the authoritative user role from the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use uuid::Uuid;

use crate::auth::AuthManager;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::UserRole;

/// Identity resolved for an authenticated request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Authenticated user id
    pub user_id: Uuid,
    /// User email
    pub email: String,
    /// Role read from the database, not from the token
    pub role: UserRole,
}

/// Middleware for bearer-token authentication
#[derive(Clone)]
pub struct AuthMiddleware {
    auth_manager: AuthManager,
    database: Arc<Database>,
}

impl AuthMiddleware {
    /// Create new auth middleware
    #[must_use]
    pub fn new(auth_manager: AuthManager, database: Arc<Database>) -> Self {
        Self {
            auth_manager,
            database,
        }
    }

    /// Authenticate a request from its authorization header
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The authorization header is missing or not a bearer token
    /// - JWT validation fails
    /// - The token's user no longer exists
    #[tracing::instrument(
        skip(self, auth_header),
        fields(user_id = tracing::field::Empty, success = tracing::field::Empty)
    )]
    pub async fn authenticate_request(
        &self,
        auth_header: Option<&str>,
    ) -> AppResult<AuthenticatedUser> {
        let header = auth_header.ok_or_else(|| {
            tracing::Span::current().record("success", false);
            AppError::auth_required()
        })?;

        let token = extract_bearer_token(header)?;
        let claims = self.auth_manager.validate_token(token)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::auth_invalid("Invalid user id in token"))?;

        // The role in the claims is informational only; re-read the user so
        // revoked accounts and role changes take effect immediately.
        let user = self
            .database
            .get_user(user_id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::auth_invalid("Token does not match a known user"))?;

        tracing::Span::current()
            .record("user_id", user_id.to_string())
            .record("success", true);
        tracing::debug!("authenticated {} as {}", user.email, user.role);

        Ok(AuthenticatedUser {
            user_id,
            email: user.email,
            role: user.role,
        })
    }
}

/// Extract the token from a `Bearer <token>` authorization header value
fn extract_bearer_token(header: &str) -> AppResult<&str> {
    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| {
            AppError::auth_invalid("Invalid authorization header format - must be 'Bearer <token>'")
        })?
        .trim();

    if token.is_empty() {
        return Err(AppError::auth_invalid("Empty bearer token"));
    }

    Ok(token)
}
