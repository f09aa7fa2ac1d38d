//! Row models and data-transfer structs for the mesa tables.

use serde::{Deserialize, Serialize};

pub mod category;
pub mod employee;

/// Two-state enable flag shared by categories and employee accounts.
///
/// Stored as SMALLINT: 0 = disabled, 1 = enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i16)]
pub enum Status {
    Disabled = 0,
    Enabled = 1,
}
