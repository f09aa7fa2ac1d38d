//! Storage ports.
//!
//! Each trait is the contract a storage backend must satisfy; the
//! services only ever talk to these. The Postgres adapters live in
//! [`crate::store`], in-memory fakes in the tests.

use async_trait::async_trait;

use mesa_core::error::StoreError;
use mesa_core::types::DbId;
use mesa_db::models::category::{Category, CategoryFilter, CategoryType, CreateCategory, UpdateCategory};
use mesa_db::models::employee::Employee;

/// Persistence contract for category records.
///
/// The store owns identifier assignment and timestamps: `insert` sets
/// `created_at == updated_at`, and `update` refreshes `updated_at`.
/// No business logic belongs behind this trait.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Insert a new category and return the stored row (id assigned).
    async fn insert(&self, input: &CreateCategory) -> Result<Category, StoreError>;

    /// Apply the non-`None` fields of `changes` to the row with `id`.
    ///
    /// Returns `None` if the id does not exist.
    async fn update(&self, id: DbId, changes: &UpdateCategory)
        -> Result<Option<Category>, StoreError>;

    /// Remove the row with `id`. Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, StoreError>;

    /// List categories in display order, optionally restricted to a type.
    async fn list_by_type(
        &self,
        category_type: Option<CategoryType>,
    ) -> Result<Vec<Category>, StoreError>;

    /// Fetch `(total, page)` for the filter with an explicit offset/limit.
    ///
    /// `total` counts all matching rows, best-effort consistent with the
    /// returned page.
    async fn page_query(
        &self,
        filter: &CategoryFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(i64, Vec<Category>), StoreError>;
}

/// Reference counter over dish records.
#[async_trait]
pub trait DishStore: Send + Sync {
    async fn count_by_category(&self, category_id: DbId) -> Result<i64, StoreError>;
}

/// Reference counter over meal-set records.
#[async_trait]
pub trait SetmealStore: Send + Sync {
    async fn count_by_category(&self, category_id: DbId) -> Result<i64, StoreError>;
}

/// Read-only employee lookup for the login flow.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, StoreError>;
}
