//! Repository for the `dishes` table.
//!
//! The category lifecycle only needs reference counts from this table, so
//! no row model is exposed here.

use sqlx::PgPool;

use mesa_core::types::DbId;

/// Read-only queries against dishes.
pub struct DishRepo;

impl DishRepo {
    /// Count dishes assigned to the given category.
    pub async fn count_by_category(pool: &PgPool, category_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM dishes WHERE category_id = $1",
        )
        .bind(category_id)
        .fetch_one(pool)
        .await
    }
}
