// ABOUTME: Common data models for the sweet shop inventory system
// ABOUTME: User and Sweet definitions with field validation rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0

mod sweet;
mod user;

pub use sweet::{Sweet, CATEGORY_MAX_LEN, NAME_MAX_LEN};
pub use user::{User, UserRole};

pub use sweet::{validate_category, validate_name, validate_price, validate_quantity};
