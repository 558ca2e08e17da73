// ABOUTME: HTTP middleware for request authentication and role checks
// ABOUTME: Bearer-token authentication plus the central admin guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod admin_guard;
pub mod auth;

pub use admin_guard::require_admin;
pub use auth::{AuthMiddleware, AuthenticatedUser};
