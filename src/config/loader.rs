//! Load [`ServerConfig`] from the process environment (after `.env`, if any).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

impl ServerConfig {
    /// Reads `.env` then the environment. Unset keys fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. `DB_URI` is accepted when `DATABASE_URL` is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("DB_URI"))
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.database_url);
        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::Load(format!(
                "DATABASE_URL must be a sqlite url, got '{}'",
                database_url
            )));
        }

        Ok(ServerConfig {
            database_url,
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            body_limit_bytes: parse_or(&lookup, "BODY_LIMIT_BYTES", defaults.body_limit_bytes)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(load(&[]).unwrap(), ServerConfig::default());
    }

    #[test]
    fn db_uri_is_an_alias_for_database_url() {
        let cfg = load(&[("DB_URI", "sqlite::memory:")]).unwrap();
        assert_eq!(cfg.database_url, "sqlite::memory:");

        let both = [("DB_URI", "sqlite::memory:"), ("DATABASE_URL", "sqlite://x.db")];
        let cfg = load(&both).unwrap();
        assert_eq!(cfg.database_url, "sqlite://x.db");
    }

    #[test]
    fn bad_port_is_rejected() {
        match load(&[("PORT", "eighty")]) {
            Err(ConfigError::Invalid { key, value }) => {
                assert_eq!(key, "PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("expected invalid PORT, got {:?}", other),
        }
    }

    #[test]
    fn non_sqlite_url_is_rejected() {
        assert!(matches!(
            load(&[("DATABASE_URL", "postgres://localhost/pizza")]),
            Err(ConfigError::Load(_))
        ));
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let cfg = load(&[("HOST", "0.0.0.0"), ("PORT", "8080")]).unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
    }
}
