use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use temple_db::DbConfig;

/// A configuration value that was present but could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins. `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served for `/` and other static paths (default: `public`).
    pub static_dir: PathBuf,
    /// Database connection settings.
    pub db: DbConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default              |
    /// |---------------------------|----------------------|
    /// | `HOST`                    | `0.0.0.0`            |
    /// | `PORT`                    | `3000`               |
    /// | `CORS_ORIGINS`            | `*`                  |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                 |
    /// | `STATIC_DIR`              | `public`             |
    /// | `DATABASE_URL`            | unset                |
    /// | `DB_HOST`                 | `localhost`          |
    /// | `DB_PORT`                 | `5432`               |
    /// | `DB_USER`                 | `postgres`           |
    /// | `DB_PASSWORD`             | `postgres`           |
    /// | `DB_NAME`                 | `temple_reservation` |
    /// | `DB_MAX_CONNECTIONS`      | `10`                 |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let cors_origins: Vec<String> = text("CORS_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in cors_origins.iter().filter(|o| o.as_str() != "*") {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                key: "CORS_ORIGINS",
                value: origin.clone(),
                reason: e.to_string(),
            })?;
        }

        let defaults = DbConfig::default();
        let db = DbConfig {
            url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            host: text("DB_HOST", &defaults.host),
            port: parse(&lookup, "DB_PORT", defaults.port)?,
            user: text("DB_USER", &defaults.user),
            password: text("DB_PASSWORD", &defaults.password),
            database: text("DB_NAME", &defaults.database),
            max_connections: parse(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            acquire_timeout_secs: parse(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            )?,
        };

        Ok(Self {
            host: text("HOST", "0.0.0.0"),
            port: parse(&lookup, "PORT", 3000)?,
            cors_origins,
            request_timeout_secs: parse(&lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            static_dir: PathBuf::from(text("STATIC_DIR", "public")),
            db,
        })
    }

    /// Whether every origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert!(config.allows_any_origin());
        assert_eq!(config.db.host, "localhost");
        assert_eq!(config.db.port, 5432);
        assert_eq!(config.db.database, "temple_reservation");
        assert!(config.db.url.is_none());
    }

    #[test]
    fn overrides_are_read() {
        let config = load(&[
            ("PORT", "8080"),
            ("DB_HOST", "db.internal"),
            ("DB_USER", "temple"),
            ("DB_NAME", "bookings"),
            ("CORS_ORIGINS", "http://a.test, http://b.test"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.db.host, "db.internal");
        assert_eq!(config.db.user, "temple");
        assert_eq!(config.db.database, "bookings");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn empty_database_url_is_ignored() {
        let config = load(&[("DATABASE_URL", "")]).unwrap();
        assert!(config.db.url.is_none());
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert_matches!(
            load(&[("PORT", "eighty")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        );
    }

    #[test]
    fn invalid_cors_origin_is_an_error() {
        assert_matches!(
            load(&[("CORS_ORIGINS", "http://ok.test,bad\norigin")]),
            Err(ConfigError::Invalid {
                key: "CORS_ORIGINS",
                ..
            })
        );
    }

    #[test]
    fn debug_output_hides_password() {
        let config = load(&[("DB_PASSWORD", "hunter2")]).unwrap();
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
