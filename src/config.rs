// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Smarthome Labs

//! # Runtime Configuration
//!
//! Configuration is read from the environment exactly once at startup into an
//! explicit [`Config`] value that gets passed to the components that need it.
//! Nothing looks at the environment after boot.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `TOKEN_SIGNING_KEY` | Symmetric key for signing bearer tokens | Required |
//! | `DATABASE_PATH` | SQLite database file | `smarthome.db` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SEED_USER` / `SEED_PASSWORD` | Credential pair upserted at startup | unset |
//! | `RUST_LOG` | Log level filter | `smarthome_api=info,tower_http=debug` |

use std::env;
use std::path::PathBuf;

use crate::models::User;

/// Environment variable name for the token signing key.
///
/// The server refuses to start without it; issuing unsigned or
/// default-key tokens is not an option.
pub const TOKEN_SIGNING_KEY_ENV: &str = "TOKEN_SIGNING_KEY";

/// Environment variable name for the SQLite database path.
pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

/// Environment variable name for the bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable names for the optional startup credential seed.
pub const SEED_USER_ENV: &str = "SEED_USER";
pub const SEED_PASSWORD_ENV: &str = "SEED_PASSWORD";

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The signing key variable is absent or empty.
    #[error("{TOKEN_SIGNING_KEY_ENV} must be set to a non-empty signing key")]
    MissingSigningKey,

    /// A variable is present but cannot be parsed.
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Process-wide configuration, immutable after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Symmetric key material for token signing and verification.
    pub signing_key: String,
    /// Path of the SQLite database file.
    pub database_path: PathBuf,
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Credential pair to upsert before serving, when both seed
    /// variables are present.
    pub seed_user: Option<User>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let signing_key = get(TOKEN_SIGNING_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingSigningKey)?;

        let database_path = get(DATABASE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("smarthome.db"));

        let host = get(HOST_ENV).unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match get(PORT_ENV) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: PORT_ENV,
                value: raw,
            })?,
            None => 8080,
        };

        let seed_user = match (get(SEED_USER_ENV), get(SEED_PASSWORD_ENV)) {
            (Some(username), Some(password)) => Some(User { username, password }),
            _ => None,
        };

        Ok(Self {
            signing_key,
            database_path,
            host,
            port,
            seed_user,
        })
    }
}
