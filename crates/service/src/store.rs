//! Postgres adapters for the storage ports, delegating to the `mesa-db`
//! repositories.

use async_trait::async_trait;
use sqlx::PgPool;

use mesa_core::error::StoreError;
use mesa_core::types::DbId;
use mesa_db::models::category::{Category, CategoryFilter, CategoryType, CreateCategory, UpdateCategory};
use mesa_db::models::employee::Employee;
use mesa_db::repositories::{CategoryRepo, DishRepo, EmployeeRepo, SetmealRepo};

use crate::gateway::{CategoryStore, DishStore, EmployeeStore, SetmealStore};

fn store_err(err: sqlx::Error) -> StoreError {
    StoreError::Database(err.to_string())
}

/// [`CategoryStore`] backed by the `categories` table.
#[derive(Clone)]
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn insert(&self, input: &CreateCategory) -> Result<Category, StoreError> {
        CategoryRepo::insert(&self.pool, input).await.map_err(store_err)
    }

    async fn update(
        &self,
        id: DbId,
        changes: &UpdateCategory,
    ) -> Result<Option<Category>, StoreError> {
        CategoryRepo::update(&self.pool, id, changes).await.map_err(store_err)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError> {
        CategoryRepo::delete_by_id(&self.pool, id).await.map_err(store_err)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, StoreError> {
        CategoryRepo::find_by_id(&self.pool, id).await.map_err(store_err)
    }

    async fn list_by_type(
        &self,
        category_type: Option<CategoryType>,
    ) -> Result<Vec<Category>, StoreError> {
        CategoryRepo::list(&self.pool, category_type).await.map_err(store_err)
    }

    async fn page_query(
        &self,
        filter: &CategoryFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(i64, Vec<Category>), StoreError> {
        // Two statements; the count is best-effort consistent with the page.
        let total = CategoryRepo::count(&self.pool, filter).await.map_err(store_err)?;
        let items = CategoryRepo::page(&self.pool, filter, limit, offset)
            .await
            .map_err(store_err)?;
        Ok((total, items))
    }
}

/// [`DishStore`] backed by the `dishes` table.
#[derive(Clone)]
pub struct PgDishStore {
    pool: PgPool,
}

impl PgDishStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DishStore for PgDishStore {
    async fn count_by_category(&self, category_id: DbId) -> Result<i64, StoreError> {
        DishRepo::count_by_category(&self.pool, category_id)
            .await
            .map_err(store_err)
    }
}

/// [`SetmealStore`] backed by the `setmeals` table.
#[derive(Clone)]
pub struct PgSetmealStore {
    pool: PgPool,
}

impl PgSetmealStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SetmealStore for PgSetmealStore {
    async fn count_by_category(&self, category_id: DbId) -> Result<i64, StoreError> {
        SetmealRepo::count_by_category(&self.pool, category_id)
            .await
            .map_err(store_err)
    }
}

/// [`EmployeeStore`] backed by the `employees` table.
#[derive(Clone)]
pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, StoreError> {
        EmployeeRepo::find_by_username(&self.pool, username)
            .await
            .map_err(store_err)
    }
}
