// ABOUTME: Database management over SQLite with sqlx
// ABOUTME: Connection pool setup, schema migration, and submodule wiring
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Database Management
//!
//! This module provides persistence for the sweet shop API. It owns the
//! SQLite connection pool, runs schema migrations on startup, and exposes
//! user and sweet operations from its submodules.

mod sweets;
mod users;

pub use sweets::{SweetChanges, SweetFilter};

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite, SqlitePool};

/// Database manager for user and inventory storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or a
    /// migration fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        let is_memory = database_url.contains(":memory:");

        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") && !is_memory {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        // A pooled in-memory SQLite opens a fresh database per connection;
        // pin the pool to a single long-lived connection in that case.
        let pool = if is_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(&connection_options)
                .await?
        } else {
            SqlitePool::connect(&connection_options).await?
        };

        let db = Self { pool };

        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_users().await?;
        self.migrate_sweets().await?;
        Ok(())
    }
}
