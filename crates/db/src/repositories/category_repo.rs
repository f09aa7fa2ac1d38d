//! Repository for the `categories` table.

use sqlx::PgPool;

use mesa_core::types::DbId;

use crate::models::category::{Category, CategoryFilter, CategoryType, CreateCategory, UpdateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category_type, sort_order, status, \
    created_by, created_at, updated_by, updated_at";

/// Display ordering used by every list query: sort key ascending,
/// newest first among equal sort keys.
const ORDER: &str = "sort_order ASC, created_at DESC";

/// Provides CRUD and paged-query operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// `created_at` and `updated_at` are both set to the statement time,
    /// so the returned row always has identical timestamps.
    pub async fn insert(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, category_type, sort_order, status, created_by, updated_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(input.category_type)
            .bind(input.sort_order)
            .bind(input.status)
            .bind(input.created_by)
            .bind(input.updated_by)
            .fetch_one(pool)
            .await
    }

    /// Find a category by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a category. Only non-`None` fields in `input` are applied;
    /// `updated_by` is always written and `updated_at` is refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                category_type = COALESCE($3, category_type),
                sort_order = COALESCE($4, sort_order),
                status = COALESCE($5, status),
                updated_by = $6,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.category_type)
            .bind(input.sort_order)
            .bind(input.status)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List categories, optionally restricted to one type, in display order.
    pub async fn list(
        pool: &PgPool,
        category_type: Option<CategoryType>,
    ) -> Result<Vec<Category>, sqlx::Error> {
        match category_type {
            Some(ct) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM categories WHERE category_type = $1 ORDER BY {ORDER}"
                );
                sqlx::query_as::<_, Category>(&query)
                    .bind(ct)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM categories ORDER BY {ORDER}");
                sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
            }
        }
    }

    /// Count categories matching the filter (for pagination metadata).
    pub async fn count(pool: &PgPool, filter: &CategoryFilter) -> Result<i64, sqlx::Error> {
        let (where_clause, name_pattern) = build_filter(filter);
        let query = format!("SELECT COUNT(*)::BIGINT FROM categories {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(pattern) = &name_pattern {
            q = q.bind(pattern.clone());
        }
        if let Some(ct) = filter.category_type {
            q = q.bind(ct);
        }
        q.fetch_one(pool).await
    }

    /// Fetch one page of categories matching the filter, in display order.
    pub async fn page(
        pool: &PgPool,
        filter: &CategoryFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let (where_clause, name_pattern) = build_filter(filter);
        let bind_idx = 1 + name_pattern.iter().len() + filter.category_type.iter().len();
        let query = format!(
            "SELECT {COLUMNS} FROM categories {where_clause} \
             ORDER BY {ORDER} \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let mut q = sqlx::query_as::<_, Category>(&query);
        if let Some(pattern) = &name_pattern {
            q = q.bind(pattern.clone());
        }
        if let Some(ct) = filter.category_type {
            q = q.bind(ct);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }
}

/// Build the WHERE clause for a [`CategoryFilter`].
///
/// Returns the clause plus the prepared LIKE pattern for the name filter,
/// if any. Bind order is always name first, then type.
fn build_filter(filter: &CategoryFilter) -> (String, Option<String>) {
    let name_pattern = filter.name.as_ref().map(|n| format!("%{n}%"));

    let clause = match (&name_pattern, filter.category_type) {
        (Some(_), Some(_)) => "WHERE name LIKE $1 AND category_type = $2".to_string(),
        (Some(_), None) => "WHERE name LIKE $1".to_string(),
        (None, Some(_)) => "WHERE category_type = $1".to_string(),
        (None, None) => String::new(),
    };

    (clause, name_pattern)
}
