use chrono::FixedOffset;
use std::env;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Outgoing mail transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpSettings {
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Unauthenticated local catcher (Mailpit, MailHog) used when `RUST_ENV=test`.
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub email_from: String,
    pub smtp: SmtpSettings,
    pub clinic_name: String,
    pub clinic_utc_offset: FixedOffset,
    pub chat_poll_interval_ms: u64,
    pub chat_poll_max_interval_ms: u64,
    pub email_retry_attempts: u32,
    pub admin_seed: Option<AdminSeed>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let smtp = if environment == "test" {
            SmtpSettings::Local {
                host: lookup("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or("SMTP_PORT", lookup("SMTP_PORT"), 1025)?,
            }
        } else {
            SmtpSettings::Relay {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }
        };

        let clinic_utc_offset = match lookup("CLINIC_UTC_OFFSET") {
            Some(raw) => parse_utc_offset(&raw).ok_or_else(|| ConfigError::Invalid {
                key: "CLINIC_UTC_OFFSET",
                reason: format!("expected +HH:MM or -HH:MM, got '{}'", raw),
            })?,
            None => FixedOffset::east_opt(8 * 3600).ok_or_else(|| ConfigError::Invalid {
                key: "CLINIC_UTC_OFFSET",
                reason: "default offset out of range".to_string(),
            })?,
        };

        let chat_poll_interval_ms = parse_or(
            "CHAT_POLL_INTERVAL_MS",
            lookup("CHAT_POLL_INTERVAL_MS"),
            3_000u64,
        )?;
        let chat_poll_max_interval_ms = parse_or(
            "CHAT_POLL_MAX_INTERVAL_MS",
            lookup("CHAT_POLL_MAX_INTERVAL_MS"),
            30_000u64,
        )?;
        if chat_poll_interval_ms == 0 || chat_poll_max_interval_ms < chat_poll_interval_ms {
            return Err(ConfigError::Invalid {
                key: "CHAT_POLL_MAX_INTERVAL_MS",
                reason: "must be >= CHAT_POLL_INTERVAL_MS, which must be > 0".to_string(),
            });
        }

        let email_retry_attempts =
            parse_or("EMAIL_RETRY_ATTEMPTS", lookup("EMAIL_RETRY_ATTEMPTS"), 3u32)?;

        let admin_seed = match (lookup("ADMIN_EMAIL"), lookup("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminSeed {
                email,
                password,
                username: lookup("ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            environment,
            host: required("HOST")?,
            port: required("PORT")?
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid {
                    key: "PORT",
                    reason: "expected a TCP port number".to_string(),
                })?,
            database_url: required("DATABASE_URL")?,
            email_from: required("EMAIL_FROM")?,
            smtp,
            clinic_name: lookup("CLINIC_NAME").unwrap_or_else(|| "Halili's Dental Clinic".to_string()),
            clinic_utc_offset,
            chat_poll_interval_ms,
            chat_poll_max_interval_ms,
            email_retry_attempts,
            admin_seed,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            reason: format!("could not parse '{}'", value),
        }),
    }
}

/// Parses `+HH:MM` / `-HH:MM` (also `Z`) into a fixed offset.
pub fn parse_utc_offset(raw: &str) -> Option<FixedOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = if let Some(rest) = raw.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = raw.strip_prefix('-') {
        (-1, rest)
    } else {
        return None;
    };

    let (hours, minutes) = rest.split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 14 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("RUST_ENV", "test"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/clinic"),
            ("EMAIL_FROM", "noreply@halili.test"),
        ])
    }

    fn load(env: &HashMap<&'static str, &'static str>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn loads_defaults_for_optional_values() {
        let config = load(&base_env()).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.clinic_name, "Halili's Dental Clinic");
        assert_eq!(config.clinic_utc_offset.local_minus_utc(), 8 * 3600);
        assert_eq!(config.chat_poll_interval_ms, 3_000);
        assert_eq!(config.chat_poll_max_interval_ms, 30_000);
        assert_eq!(config.email_retry_attempts, 3);
        assert!(config.admin_seed.is_none());
        assert_eq!(
            config.smtp,
            SmtpSettings::Local {
                host: "localhost".to_string(),
                port: 1025
            }
        );
    }

    #[test]
    fn missing_database_url_is_reported() {
        let mut env = base_env();
        env.remove("DATABASE_URL");

        assert_eq!(load(&env).unwrap_err(), ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn relay_smtp_requires_credentials_outside_test() {
        let mut env = base_env();
        env.insert("RUST_ENV", "production");
        env.insert("SMTP_SERVER", "smtp.example.com");

        assert_eq!(load(&env).unwrap_err(), ConfigError::Missing("SMTP_USERNAME"));
    }

    #[test]
    fn admin_seed_needs_email_and_password() {
        let mut env = base_env();
        env.insert("ADMIN_EMAIL", "admin@halili.test");
        assert!(load(&env).unwrap().admin_seed.is_none());

        env.insert("ADMIN_PASSWORD", "changeme123");
        let seed = load(&env).unwrap().admin_seed.unwrap();
        assert_eq!(seed.username, "admin");
        assert_eq!(seed.email, "admin@halili.test");
    }

    #[test]
    fn rejects_poll_max_below_base() {
        let mut env = base_env();
        env.insert("CHAT_POLL_INTERVAL_MS", "5000");
        env.insert("CHAT_POLL_MAX_INTERVAL_MS", "1000");

        assert!(matches!(
            load(&env),
            Err(ConfigError::Invalid {
                key: "CHAT_POLL_MAX_INTERVAL_MS",
                ..
            })
        ));
    }

    #[test]
    fn parses_utc_offsets() {
        assert_eq!(parse_utc_offset("+08:00").unwrap().local_minus_utc(), 28_800);
        assert_eq!(parse_utc_offset("-05:30").unwrap().local_minus_utc(), -19_800);
        assert_eq!(parse_utc_offset("Z").unwrap().local_minus_utc(), 0);
        assert!(parse_utc_offset("08:00").is_none());
        assert!(parse_utc_offset("+25:00").is_none());
        assert!(parse_utc_offset("").is_none());
    }
}
