// ABOUTME: User model for the authentication and authorization system
// ABOUTME: User and UserRole definitions used as the role predicate for routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// User role for the permission system
///
/// The role is the single authorization predicate in this API: `Admin` may
/// create, delete, and restock sweets; `User` may browse, search, update,
/// and purchase them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Administrator with full inventory control
    Admin,
    /// Regular authenticated user
    User,
}

impl UserRole {
    /// Check whether this role grants admin-only operations
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(AppError::invalid_input(format!("Invalid user role: {s}"))),
        }
    }
}

/// Represents an account in the sweet shop system
///
/// Users authenticate with email/password and receive a JWT. The stored
/// role is authoritative; tokens only identify the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// User email address (unique, used for login)
    pub email: String,
    /// Display name
    pub display_name: Option<String>,
    /// Hashed password for authentication
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role for the permission system
    pub role: UserRole,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new regular user with the given email and password hash
    #[must_use]
    pub fn new(email: String, password_hash: String, display_name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            display_name,
            password_hash,
            role: UserRole::User,
            created_at: Utc::now(),
        }
    }

    /// Create a new administrator account
    #[must_use]
    pub fn new_admin(email: String, password_hash: String, display_name: Option<String>) -> Self {
        Self {
            role: UserRole::Admin,
            ..Self::new(email, password_hash, display_name)
        }
    }
}
