use crate::types::DbId;

/// Failure surfaced by a storage port.
///
/// Adapters map their backend error (sqlx, in-memory, ...) into this so
/// the service layer never depends on a concrete driver.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),
}

/// Which dependent record kind is blocking a category deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependent {
    Dish,
    MealSet,
}

impl std::fmt::Display for Dependent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dependent::Dish => f.write_str("dish"),
            Dependent::MealSet => f.write_str("meal-set"),
        }
    }
}

/// Errors raised by the category lifecycle service.
///
/// All variants are recoverable by the caller; none are fatal and no
/// retries happen internally.
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("category not found: id {id}")]
    NotFound { id: DbId },

    #[error("category is still referenced by at least one {0}")]
    DeletionBlocked(Dependent),

    #[error("nothing to update: name and sort are unchanged")]
    NotModified,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised by the credential verifier.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("account not found")]
    AccountNotFound,

    #[error("incorrect password")]
    InvalidPassword,

    #[error("account is locked")]
    AccountLocked,

    #[error("password hash error: {0}")]
    Hash(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
