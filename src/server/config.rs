use std::{net::SocketAddr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CORS_MAX_AGE_SECS: u64 = 3400;

/// Cheapest bcrypt cost accepted.
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Account created at startup when it doesn't exist yet.
pub struct BootstrapAdmin {
    pub username: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    /// How long browsers may cache CORS preflight responses.
    pub cors_max_age: Duration,
    /// bcrypt cost used when hashing new passwords.
    pub bcrypt_cost: u32,

    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup, applying defaults for optional values.
    ///
    /// `BOOTSTRAP_ADMIN_USERNAME` and `BOOTSTRAP_ADMIN_PASSWORD` must be set together.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| invalid("BIND_ADDR", e))?;

        let cors_max_age = match lookup("CORS_MAX_AGE_SECS") {
            Some(value) => value
                .parse::<u64>()
                .map_err(|e| invalid("CORS_MAX_AGE_SECS", e))?,
            None => DEFAULT_CORS_MAX_AGE_SECS,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(value) => value.parse::<u32>().map_err(|e| invalid("BCRYPT_COST", e))?,
            None => bcrypt::DEFAULT_COST,
        };
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(invalid("BCRYPT_COST", "must be between 4 and 31").into());
        }

        let bootstrap_admin = match (
            lookup("BOOTSTRAP_ADMIN_USERNAME"),
            lookup("BOOTSTRAP_ADMIN_PASSWORD"),
        ) {
            (Some(username), Some(password)) => Some(BootstrapAdmin { username, password }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar("BOOTSTRAP_ADMIN_PASSWORD".to_string()).into())
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar("BOOTSTRAP_ADMIN_USERNAME".to_string()).into())
            }
        };

        Ok(Self {
            database_url,
            bind_addr,
            cors_max_age: Duration::from_secs(cors_max_age),
            bcrypt_cost,
            bootstrap_admin,
        })
    }
}

fn invalid(name: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
