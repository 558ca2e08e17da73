// ABOUTME: Sweet inventory database operations
// ABOUTME: CRUD, search, and single-transaction purchase/restock mutations
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::Sweet;

const SWEET_COLUMNS: &str = "id, name, category, price, quantity, created_at, updated_at";

/// Optional search filters, AND-composed
///
/// `name` and `category` are case-insensitive substring matches; the price
/// bounds are inclusive. An empty filter matches every record.
#[derive(Debug, Default, Clone)]
pub struct SweetFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SweetFilter {
    /// Check whether no filter is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }
}

/// Partial update to a sweet record
///
/// Each field distinguishes "set to this value" (`Some`) from "leave
/// unchanged" (`None`), so a quantity of zero is never conflated with an
/// absent field.
#[derive(Debug, Default, Clone)]
pub struct SweetChanges {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl Database {
    /// Create the sweets table
    pub(super) async fn migrate_sweets(&self) -> anyhow::Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS sweets (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                price REAL NOT NULL CHECK (price > 0),
                quantity INTEGER NOT NULL DEFAULT 0 CHECK (quantity >= 0),
                created_at DATETIME NOT NULL,
                updated_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_sweets_name ON sweets(name)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_sweets_category ON sweets(category)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Persist a new sweet record
    pub async fn create_sweet(&self, sweet: &Sweet) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO sweets (id, name, category, price, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(sweet.id.to_string())
        .bind(&sweet.name)
        .bind(&sweet.category)
        .bind(sweet.price)
        .bind(sweet.quantity)
        .bind(sweet.created_at)
        .bind(sweet.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Look up a sweet by id
    pub async fn get_sweet(&self, id: Uuid) -> AppResult<Option<Sweet>> {
        let row = sqlx::query(&format!("SELECT {SWEET_COLUMNS} FROM sweets WHERE id = $1"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(row_to_sweet).transpose()
    }

    /// List all sweets in insertion order
    pub async fn list_sweets(&self) -> AppResult<Vec<Sweet>> {
        let rows = sqlx::query(&format!("SELECT {SWEET_COLUMNS} FROM sweets ORDER BY rowid"))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(row_to_sweet).collect()
    }

    /// Search sweets with the given AND-composed filters
    pub async fn search_sweets(&self, filter: &SweetFilter) -> AppResult<Vec<Sweet>> {
        let mut sql = format!("SELECT {SWEET_COLUMNS} FROM sweets WHERE 1 = 1");

        // instr() keeps '%' and '_' in search terms literal, unlike LIKE
        if filter.name.is_some() {
            sql.push_str(" AND instr(lower(name), lower(?)) > 0");
        }
        if filter.category.is_some() {
            sql.push_str(" AND instr(lower(category), lower(?)) > 0");
        }
        if filter.min_price.is_some() {
            sql.push_str(" AND price >= ?");
        }
        if filter.max_price.is_some() {
            sql.push_str(" AND price <= ?");
        }
        sql.push_str(" ORDER BY rowid");

        let mut query = sqlx::query(&sql);
        if let Some(name) = &filter.name {
            query = query.bind(name);
        }
        if let Some(category) = &filter.category {
            query = query.bind(category);
        }
        if let Some(min_price) = filter.min_price {
            query = query.bind(min_price);
        }
        if let Some(max_price) = filter.max_price {
            query = query.bind(max_price);
        }

        let rows = query.fetch_all(&self.pool).await?;

        rows.into_iter().map(row_to_sweet).collect()
    }

    /// Apply a partial update to a sweet record
    ///
    /// Fields absent from `changes` are left untouched. Fails with a
    /// not-found error if the id is unknown.
    pub async fn update_sweet(&self, id: Uuid, changes: &SweetChanges) -> AppResult<Sweet> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&format!("SELECT {SWEET_COLUMNS} FROM sweets WHERE id = $1"))
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await?;

        let mut sweet = row.map(row_to_sweet).transpose()?.ok_or_else(not_found)?;

        if let Some(name) = &changes.name {
            sweet.name = name.clone();
        }
        if let Some(category) = &changes.category {
            sweet.category = category.clone();
        }
        if let Some(price) = changes.price {
            sweet.price = price;
        }
        if let Some(quantity) = changes.quantity {
            sweet.quantity = quantity;
        }
        sweet.updated_at = Utc::now();

        sqlx::query(
            r"
            UPDATE sweets
            SET name = $2, category = $3, price = $4, quantity = $5, updated_at = $6
            WHERE id = $1
            ",
        )
        .bind(id.to_string())
        .bind(&sweet.name)
        .bind(&sweet.category)
        .bind(sweet.price)
        .bind(sweet.quantity)
        .bind(sweet.updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(sweet)
    }

    /// Permanently delete a sweet record
    ///
    /// Fails with a not-found error if the id is unknown.
    pub async fn delete_sweet(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM sweets WHERE id = $1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        Ok(())
    }

    /// Purchase one unit of a sweet
    ///
    /// Decrements the quantity by exactly 1 inside a single transaction.
    /// Fails with a not-found error for unknown ids and with an
    /// out-of-stock error when the quantity is already zero, leaving the
    /// record unchanged.
    pub async fn purchase_sweet(&self, id: Uuid) -> AppResult<Sweet> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&format!("SELECT {SWEET_COLUMNS} FROM sweets WHERE id = $1"))
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await?;

        let mut sweet = row.map(row_to_sweet).transpose()?.ok_or_else(not_found)?;

        if !sweet.is_in_stock() {
            return Err(AppError::invalid_state("Sweet is out of stock"));
        }

        sweet.quantity -= 1;
        sweet.updated_at = Utc::now();

        sqlx::query("UPDATE sweets SET quantity = $2, updated_at = $3 WHERE id = $1")
            .bind(id.to_string())
            .bind(sweet.quantity)
            .bind(sweet.updated_at)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(sweet)
    }

    /// Restock a sweet by the given positive amount
    ///
    /// The caller validates `quantity > 0`; this method performs the
    /// increment inside a single transaction and fails with a not-found
    /// error for unknown ids.
    pub async fn restock_sweet(&self, id: Uuid, quantity: i64) -> AppResult<Sweet> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&format!("SELECT {SWEET_COLUMNS} FROM sweets WHERE id = $1"))
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await?;

        let mut sweet = row.map(row_to_sweet).transpose()?.ok_or_else(not_found)?;

        sweet.quantity += quantity;
        sweet.updated_at = Utc::now();

        sqlx::query("UPDATE sweets SET quantity = $2, updated_at = $3 WHERE id = $1")
            .bind(id.to_string())
            .bind(sweet.quantity)
            .bind(sweet.updated_at)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(sweet)
    }
}

fn not_found() -> AppError {
    AppError::not_found("Sweet")
}

fn row_to_sweet(row: SqliteRow) -> AppResult<Sweet> {
    let id: String = row.try_get("id")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;

    Ok(Sweet {
        id: Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("Corrupt sweet id: {e}")))?,
        name: row.try_get("name")?,
        category: row.try_get("category")?,
        price: row.try_get("price")?,
        quantity: row.try_get("quantity")?,
        created_at,
        updated_at,
    })
}
