use std::env;

use crate::config::ConfigError;

const MIN_SECRET_LEN: usize = 32;
const MAX_ACCESS_EXPIRY_SECS: i64 = 7 * 24 * 3600;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // seconds
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        // HS256 needs at least 256 bits of key material
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {} characters", MIN_SECRET_LEN),
            });
        }

        let access_token_expiry = match lookup("JWT_ACCESS_EXPIRY") {
            None => 86_400,
            Some(raw) => raw.trim().parse::<i64>().map_err(|_| ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: format!("could not parse '{}'", raw),
            })?,
        };
        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY_SECS {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: format!("must be between 1 and {} seconds", MAX_ACCESS_EXPIRY_SECS),
            });
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "halili-dental".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
