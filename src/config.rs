// ABOUTME: Environment configuration management for deployment settings
// ABOUTME: Handles environment variables and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration management

use anyhow::{Context, Result};
use std::env;
use tracing::warn;

/// Default HTTP port when `HTTP_PORT` is unset
pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default SQLite database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/sweetshop.db";

/// Default JWT lifetime in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Database connection URL
    pub database_url: String,
    /// Secret used to sign JWTs
    pub jwt_secret: String,
    /// Lifetime of issued JWTs in hours
    pub jwt_expiry_hours: i64,
    /// Optional admin bootstrap email (paired with `admin_password`)
    pub admin_email: Option<String>,
    /// Optional admin bootstrap password
    pub admin_password: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` or `JWT_EXPIRY_HOURS` are set but
    /// not parseable.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("Invalid HTTP_PORT: {value}"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set; using insecure development default");
            "dev-secret-change-me".to_owned()
        });

        let jwt_expiry_hours = match env::var("JWT_EXPIRY_HOURS") {
            Ok(value) => value
                .parse::<i64>()
                .with_context(|| format!("Invalid JWT_EXPIRY_HOURS: {value}"))?,
            Err(_) => DEFAULT_JWT_EXPIRY_HOURS,
        };

        Ok(Self {
            http_port,
            database_url,
            jwt_secret,
            jwt_expiry_hours,
            admin_email: env::var("ADMIN_EMAIL").ok(),
            admin_password: env::var("ADMIN_PASSWORD").ok(),
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} database={} jwt_expiry={}h admin_bootstrap={}",
            self.http_port,
            self.database_url,
            self.jwt_expiry_hours,
            self.admin_email.is_some()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_does_not_leak_secret() {
        let config = ServerConfig {
            http_port: 8081,
            database_url: "sqlite::memory:".to_owned(),
            jwt_secret: "super-secret".to_owned(),
            jwt_expiry_hours: 24,
            admin_email: None,
            admin_password: None,
        };
        assert!(!config.summary().contains("super-secret"));
    }
}
