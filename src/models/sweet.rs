// ABOUTME: Sweet inventory record model with field validation rules
// ABOUTME: Enforces name/category bounds, positive price, and non-negative quantity
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Maximum length of a sweet name
pub const NAME_MAX_LEN: usize = 100;

/// Maximum length of a sweet category
pub const CATEGORY_MAX_LEN: usize = 50;

/// A sweet in the shop inventory
///
/// Invariants: `quantity` is never negative and `price` is always strictly
/// positive. `updated_at` is refreshed on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sweet {
    /// Unique record identifier, server-assigned
    pub id: Uuid,
    /// Sweet name (non-empty, at most [`NAME_MAX_LEN`] characters)
    pub name: String,
    /// Category label (non-empty, at most [`CATEGORY_MAX_LEN`] characters)
    pub category: String,
    /// Unit price, strictly positive
    pub price: f64,
    /// Stock quantity, never negative
    pub quantity: i64,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last mutated
    pub updated_at: DateTime<Utc>,
}

impl Sweet {
    /// Create a new sweet record with server-assigned id and timestamps
    ///
    /// Callers validate the fields first; this constructor only assembles
    /// the record.
    #[must_use]
    pub fn new(name: String, category: String, price: f64, quantity: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            category,
            price,
            quantity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether at least one unit is available for purchase
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Validate a sweet name: non-empty and within the length bound
pub fn validate_name(name: &str) -> AppResult<()> {
    if name.is_empty() {
        return Err(AppError::invalid_input("name must not be empty"));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(AppError::invalid_input(format!(
            "name must be at most {NAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a category label: non-empty and within the length bound
pub fn validate_category(category: &str) -> AppResult<()> {
    if category.is_empty() {
        return Err(AppError::invalid_input("category must not be empty"));
    }
    if category.chars().count() > CATEGORY_MAX_LEN {
        return Err(AppError::invalid_input(format!(
            "category must be at most {CATEGORY_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a price: finite and strictly positive
pub fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::invalid_input("price must be greater than 0"));
    }
    Ok(())
}

/// Validate a stock quantity: non-negative
pub fn validate_quantity(quantity: i64) -> AppResult<()> {
    if quantity < 0 {
        return Err(AppError::invalid_input("quantity must not be negative"));
    }
    Ok(())
}
