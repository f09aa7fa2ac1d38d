//! Repository for the `setmeals` (meal-set) table.
//!
//! As with dishes, only the reference count is needed here.

use sqlx::PgPool;

use mesa_core::types::DbId;

/// Read-only queries against meal-sets.
pub struct SetmealRepo;

impl SetmealRepo {
    /// Count meal-sets assigned to the given category.
    pub async fn count_by_category(pool: &PgPool, category_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM setmeals WHERE category_id = $1",
        )
        .bind(category_id)
        .fetch_one(pool)
        .await
    }
}
