//! Domain layer for the mesa back-office: shared types, the error
//! taxonomy, and pagination primitives. No database dependencies.

pub mod error;
pub mod pagination;
pub mod types;
