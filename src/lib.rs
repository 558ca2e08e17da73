// ABOUTME: Main library entry point for the Sweet Shop Management System API
// ABOUTME: Provides a role-gated inventory REST API backed by SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Sweet Shop Management System API
//!
//! A small inventory-management REST service for a retail sweet shop.
//! Users authenticate with email/password and receive a JWT; administrators
//! may create, delete, and restock sweets, while any authenticated user can
//! browse, search, update, and purchase them.
//!
//! ## Architecture
//!
//! - **Models**: `Sweet` and `User` domain types with field validation
//! - **Database**: sqlx/SQLite persistence with single-transaction mutations
//! - **Middleware**: bearer-token authentication and the admin guard
//! - **Routes**: axum handlers, one module per domain area
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use sweet_shop_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// JWT claims, token generation and validation
pub mod auth;

/// Environment-based configuration management
pub mod config;

/// Database management for users and sweets
pub mod database;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Production logging setup
pub mod logging;

/// HTTP middleware for authentication and role checks
pub mod middleware;

/// Common data models for users and inventory records
pub mod models;

/// Shared server dependencies handed to route handlers
pub mod resources;

/// HTTP routes for authentication, inventory, and health checks
pub mod routes;
