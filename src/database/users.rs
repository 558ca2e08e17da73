// ABOUTME: User management database operations
// ABOUTME: Handles user registration, lookup, and admin bootstrap
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::Database;
use crate::models::{User, UserRole};

impl Database {
    /// Create the users table
    pub(super) async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                display_name TEXT,
                password_hash TEXT NOT NULL,
                role TEXT NOT NULL DEFAULT 'user' CHECK (role IN ('admin', 'user')),
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Store a new user
    ///
    /// # Errors
    ///
    /// Returns an error if the email is already in use or the insert fails.
    pub async fn create_user(&self, user: &User) -> Result<Uuid> {
        if self.get_user_by_email(&user.email).await?.is_some() {
            return Err(anyhow!("Email already in use by another user"));
        }

        sqlx::query(
            r"
            INSERT INTO users (id, email, display_name, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(user.id)
    }

    /// Look up a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is corrupt.
    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, email, display_name, password_hash, role, created_at FROM users WHERE id = $1",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_user).transpose()
    }

    /// Look up a user by email
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is corrupt.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, email, display_name, password_hash, role, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_user).transpose()
    }

    /// Ensure an admin account exists for the given credentials
    ///
    /// Used at startup when `ADMIN_EMAIL`/`ADMIN_PASSWORD` are configured.
    /// If the email is already registered the existing account is left
    /// untouched, whatever its role.
    ///
    /// # Errors
    ///
    /// Returns an error if password hashing or the insert fails.
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<()> {
        if self.get_user_by_email(email).await?.is_some() {
            tracing::debug!("admin bootstrap: account {email} already exists");
            return Ok(());
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
        let admin = User::new_admin(email.to_owned(), password_hash, Some("Administrator".to_owned()));
        self.create_user(&admin).await?;
        tracing::info!("admin bootstrap: created admin account {email}");

        Ok(())
    }
}

fn row_to_user(row: SqliteRow) -> Result<User> {
    let id: String = row.try_get("id")?;
    let role: String = row.try_get("role")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(User {
        id: Uuid::parse_str(&id)?,
        email: row.try_get("email")?,
        display_name: row.try_get("display_name")?,
        password_hash: row.try_get("password_hash")?,
        role: UserRole::from_str(&role).map_err(|e| anyhow!(e.to_string()))?,
        created_at,
    })
}
