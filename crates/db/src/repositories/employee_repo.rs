//! Repository for the `employees` table.
//!
//! The login flow only reads employee rows; account administration is a
//! separate back-office concern.

use sqlx::PgPool;

use mesa_core::types::DbId;

use crate::models::employee::Employee;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, username, password_hash, phone, sex, id_number, \
    status, created_by, created_at, updated_by, updated_at";

/// Read-only queries against employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Find an employee by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an employee by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE username = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }
}
