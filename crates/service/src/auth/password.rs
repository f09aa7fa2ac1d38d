//! Argon2id password hashing and verification.
//!
//! Hashes are stored in PHC string format so algorithm parameters and
//! salt travel with the hash itself; verification therefore works across
//! parameter changes. New hashes use the cost factors from
//! [`PasswordConfig`] and a cryptographically random salt via [`OsRng`].

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::config::PasswordConfig;

/// Build an Argon2id hasher from the configured cost factors.
fn hasher(config: &PasswordConfig) -> Result<Argon2<'static>, argon2::password_hash::Error> {
    let params = Params::new(
        config.memory_kib,
        config.iterations,
        config.parallelism,
        Some(config.output_len),
    )
    .map_err(argon2::password_hash::Error::from)?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hash a plaintext password with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params,
/// salt, and hash).
pub fn hash_password(
    config: &PasswordConfig,
    password: &str,
) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher(config)?.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cheap parameters so the tests stay fast; verification still works
    /// because the PHC string carries its own parameters.
    fn test_config() -> PasswordConfig {
        PasswordConfig {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
            output_len: 32,
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let config = test_config();
        let hash = hash_password(&config, "correct-horse-battery-staple").unwrap();

        assert!(
            hash.starts_with("$argon2id$"),
            "expected argon2id PHC prefix"
        );
        assert!(verify_password("correct-horse-battery-staple", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_fails() {
        let config = test_config();
        let hash = hash_password(&config, "real-password").unwrap();
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_configured_params_embedded() {
        let config = test_config();
        let hash = hash_password(&config, "pw").unwrap();
        assert!(hash.contains("m=1024,t=1,p=1"), "params should be in PHC string: {hash}");
    }

    #[test]
    fn test_garbage_hash_is_error() {
        assert!(verify_password("pw", "not-a-phc-string").is_err());
    }
}
