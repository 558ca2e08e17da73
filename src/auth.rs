// ABOUTME: JWT-based authentication token generation and validation
// ABOUTME: Handles HS256 signing, expiry, and claims extraction for users
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Authentication Token Management
//!
//! This module provides JWT generation and validation for the sweet shop
//! API. Tokens are signed with HS256 using the configured secret and carry
//! the user id, email, and role. The stored role is re-checked against the
//! database on every request, so claims only identify the user.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::User;

/// `JWT` claims for user authentication
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// User email
    pub email: String,
    /// Role at token issuance (informational; the database is authoritative)
    pub role: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Token manager holding the signing secret and expiry policy
#[derive(Clone)]
pub struct AuthManager {
    jwt_secret: Vec<u8>,
    expiry_hours: i64,
}

impl AuthManager {
    /// Create a new auth manager
    #[must_use]
    pub fn new(jwt_secret: Vec<u8>, expiry_hours: i64) -> Self {
        Self {
            jwt_secret,
            expiry_hours,
        }
    }

    /// Generate a signed token for the given user
    ///
    /// # Errors
    ///
    /// Returns an error if JWT encoding fails.
    pub fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.expiry_hours)).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.jwt_secret),
        )
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))
    }

    /// Validate a token and return its claims
    ///
    /// # Errors
    ///
    /// Returns an authentication error if the token is expired, malformed,
    /// or carries an invalid signature.
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.jwt_secret),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::auth_invalid("Token has expired")
            }
            jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                AppError::auth_invalid("Token signature is invalid")
            }
            _ => AppError::auth_invalid(format!("Token is invalid: {e}")),
        })?;

        Ok(data.claims)
    }

    /// Lifetime applied to newly issued tokens
    #[must_use]
    pub fn token_expiry(&self) -> Duration {
        Duration::hours(self.expiry_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn test_manager() -> AuthManager {
        AuthManager::new(b"test-secret".to_vec(), 24)
    }

    #[test]
    fn test_token_round_trip() {
        let manager = test_manager();
        let user = User::new_admin("admin@shop.test".to_owned(), "hash".to_owned(), None);

        let token = manager.generate_token(&user).unwrap();
        let claims = manager.validate_token(&token).unwrap();

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, UserRole::Admin.to_string());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let manager = test_manager();
        assert!(manager.validate_token("not-a-jwt").is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_secret() {
        let user = User::new("u@shop.test".to_owned(), "hash".to_owned(), None);
        let token = test_manager().generate_token(&user).unwrap();

        let other = AuthManager::new(b"different-secret".to_vec(), 24);
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let manager = AuthManager::new(b"test-secret".to_vec(), -1);
        let user = User::new("u@shop.test".to_owned(), "hash".to_owned(), None);
        let token = manager.generate_token(&user).unwrap();

        let err = test_manager().validate_token(&token).unwrap_err();
        assert!(err.message.contains("expired"));
    }
}
