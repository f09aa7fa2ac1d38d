//! Category entity model and DTOs.

use mesa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Status;

/// What a category groups: plain dishes or bundled meal-sets.
///
/// Stored as SMALLINT: 1 = dish category, 2 = meal-set category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i16)]
pub enum CategoryType {
    Dish = 1,
    MealSet = 2,
}

/// Full category row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub category_type: CategoryType,
    /// Display ordering, ascending.
    pub sort_order: i32,
    pub status: Status,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_by: DbId,
    pub updated_at: Timestamp,
}

/// Insert payload for a new category.
///
/// `id`, `created_at` and `updated_at` are assigned by storage; both
/// timestamps come from the same statement, so they are equal on the
/// returned row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub category_type: CategoryType,
    pub sort_order: i32,
    pub status: Status,
    pub created_by: DbId,
    pub updated_by: DbId,
}

/// Partial update for a category. Only non-`None` fields are applied;
/// `updated_by` is always written and `updated_at` is refreshed by storage.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub category_type: Option<CategoryType>,
    pub sort_order: Option<i32>,
    pub status: Option<Status>,
    pub updated_by: DbId,
}

/// Filter for category listing and paging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryFilter {
    /// Substring match on the category name.
    pub name: Option<String>,
    pub category_type: Option<CategoryType>,
}
