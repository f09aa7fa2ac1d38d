//! Configuration loaded from environment variables.
//!
//! All fields have defaults suitable for local development; override via
//! environment variables (a `.env` file is honored).

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Pool size (default: `5`).
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Load from environment variables.
    ///
    /// | Env Var                    | Default    |
    /// |----------------------------|------------|
    /// | `DATABASE_URL`             | (required) |
    /// | `DATABASE_MAX_CONNECTIONS` | `5`        |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        Self {
            url,
            max_connections,
        }
    }
}

/// Argon2 cost parameters for password hashing.
///
/// Externalized so cost factors can be tuned without a code change. The
/// defaults match the deployed hashes: 60000 KiB memory, 1 iteration,
/// 10 lanes, 32-byte output (salts are random 16-byte values).
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
    pub output_len: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: 60000,
            iterations: 1,
            parallelism: 10,
            output_len: 32,
        }
    }
}

impl PasswordConfig {
    /// Load from environment variables.
    ///
    /// | Env Var              | Default |
    /// |----------------------|---------|
    /// | `ARGON2_MEMORY_KIB`  | `60000` |
    /// | `ARGON2_ITERATIONS`  | `1`     |
    /// | `ARGON2_PARALLELISM` | `10`    |
    /// | `ARGON2_OUTPUT_LEN`  | `32`    |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Self {
            memory_kib: env_or("ARGON2_MEMORY_KIB", defaults.memory_kib),
            iterations: env_or("ARGON2_ITERATIONS", defaults.iterations),
            parallelism: env_or("ARGON2_PARALLELISM", defaults.parallelism),
            output_len: env_or("ARGON2_OUTPUT_LEN", defaults.output_len),
        }
    }
}

fn env_or<T: std::str::FromStr>(var: &str, default: T) -> T {
    match std::env::var(var) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{var} must be a valid number")),
        Err(_) => default,
    }
}

/// Install the global tracing subscriber, honoring `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mesa_service=debug,mesa_db=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_defaults() {
        let cfg = PasswordConfig::default();
        assert_eq!(cfg.memory_kib, 60000);
        assert_eq!(cfg.iterations, 1);
        assert_eq!(cfg.parallelism, 10);
        assert_eq!(cfg.output_len, 32);
    }
}
