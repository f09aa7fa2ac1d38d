//! Employee credential verification.

use std::sync::Arc;

use mesa_core::error::AuthError;
use mesa_db::models::employee::Employee;
use mesa_db::models::Status;

use crate::config::PasswordConfig;
use crate::gateway::EmployeeStore;

pub mod password;

/// Checks a presented username/password pair against the employee store.
pub struct CredentialVerifier {
    employees: Arc<dyn EmployeeStore>,
    password_config: PasswordConfig,
}

impl CredentialVerifier {
    pub fn new(employees: Arc<dyn EmployeeStore>, password_config: PasswordConfig) -> Self {
        Self {
            employees,
            password_config,
        }
    }

    /// Authenticate an employee, returning the full row on success.
    ///
    /// The checks run in a fixed order: existence, then password, then
    /// lock state. A wrong password on a locked account therefore reports
    /// `InvalidPassword`, and a known-bad username reports
    /// `AccountNotFound` before any password work happens. This ordering
    /// discloses account existence ahead of lock state and is kept
    /// deliberately for parity with the deployed behavior; do not reorder
    /// without sign-off.
    pub async fn login(&self, username: &str, password: &str) -> Result<Employee, AuthError> {
        // 1. Look up the account.
        let employee = self
            .employees
            .find_by_username(username)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        // 2. Verify the password against the stored PHC hash.
        let password_valid = password::verify_password(password, &employee.password_hash)
            .map_err(|e| AuthError::Hash(e.to_string()))?;
        if !password_valid {
            tracing::warn!(username, "login rejected: bad password");
            return Err(AuthError::InvalidPassword);
        }

        // 3. Reject locked (disabled) accounts.
        if employee.status == Status::Disabled {
            tracing::warn!(username, "login rejected: account locked");
            return Err(AuthError::AccountLocked);
        }

        tracing::info!(username, id = employee.id, "employee logged in");
        Ok(employee)
    }

    /// Hash a plaintext password with the configured cost factors.
    ///
    /// For account provisioning and fixtures; login itself only verifies.
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        password::hash_password(&self.password_config, password)
            .map_err(|e| AuthError::Hash(e.to_string()))
    }
}
