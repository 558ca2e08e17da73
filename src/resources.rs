// ABOUTME: Shared server dependencies handed to all route handlers
// ABOUTME: Bundles the database, token manager, and auth middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::database::Database;
use crate::middleware::AuthMiddleware;

/// Dependency bundle shared by every route handler
pub struct ServerResources {
    /// Persistence layer
    pub database: Arc<Database>,
    /// JWT generation and validation
    pub auth_manager: AuthManager,
    /// Bearer-token authentication
    pub auth_middleware: AuthMiddleware,
    /// Loaded server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Wire up resources from a database handle and configuration
    #[must_use]
    pub fn new(database: Arc<Database>, config: ServerConfig) -> Self {
        let auth_manager = AuthManager::new(
            config.jwt_secret.clone().into_bytes(),
            config.jwt_expiry_hours,
        );
        let auth_middleware = AuthMiddleware::new(auth_manager.clone(), database.clone());

        Self {
            database,
            auth_manager,
            auth_middleware,
            config,
        }
    }
}
