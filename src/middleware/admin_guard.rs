// ABOUTME: Central admin authorization guard for admin-only routes
// ABOUTME: Returns 403 Forbidden for authenticated users without the admin role
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin Authorization Guard
//!
//! All role-gated routes go through [`require_admin`] so the authorization
//! policy stays auditable in one place instead of being scattered through
//! handlers.

use crate::errors::AppError;
use crate::middleware::auth::AuthenticatedUser;

/// Require admin privileges for an authenticated user
///
/// The role carried by [`AuthenticatedUser`] was read from the database by
/// the auth middleware, so no further lookup is needed here.
///
/// # Errors
///
/// Returns a 403 permission error if the user is not an administrator.
pub fn require_admin(auth: &AuthenticatedUser) -> Result<(), AppError> {
    if auth.role.is_admin() {
        Ok(())
    } else {
        Err(AppError::permission_denied("Admin privileges required"))
    }
}
