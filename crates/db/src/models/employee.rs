//! Employee entity model.

use mesa_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::Status;

/// Full employee row from the `employees` table.
///
/// Contains the password hash -- NEVER serialize this struct into an
/// external response; the hash field is skipped by serde as a backstop.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub name: String,
    pub username: String,
    /// Argon2 hash in PHC string format.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone: Option<String>,
    pub sex: Option<String>,
    pub id_number: Option<String>,
    pub status: Status,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_by: DbId,
    pub updated_at: Timestamp,
}
