// src/config.rs
use crate::presentation::http::routes::RouterSettings;
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    base_path: String,
    allowed_origins: Vec<String>,
    request_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://articles.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_base_path() -> String {
    "/api".into()
}

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_CONNECTIONS: u32 = 16;

fn parse_positive<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer, got {raw:?}"
        ))),
    }
}

impl AppConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset and blank
    /// values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(default_database_url);

        let listen_addr = match (get("LISTEN_ADDR"), get("PORT")) {
            (Some(addr), _) => addr,
            (None, Some(port)) => {
                let port: u16 = parse_positive("PORT", &port)?;
                format!("0.0.0.0:{port}")
            }
            (None, None) => default_listen_addr(),
        };

        let base_path = get("BASE_PATH").unwrap_or_else(default_base_path);
        if !base_path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "BASE_PATH must start with '/', got {base_path:?}"
            )));
        }

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let request_timeout_secs = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_positive("REQUEST_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => parse_positive("DATABASE_MAX_CONNECTIONS", &raw)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            base_path,
            allowed_origins,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Empty means any origin is allowed.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn router_settings(&self) -> RouterSettings {
        RouterSettings {
            base_path: self.base_path.clone(),
            allowed_origins: self.allowed_origins.clone(),
            request_timeout: self.request_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url(), "sqlite://articles.db?mode=rwc");
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.base_path(), "/api");
        assert!(config.allowed_origins().is_empty());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.database_max_connections(), 16);
    }

    #[test]
    fn port_alone_binds_all_interfaces() {
        let config = config_from(&[("PORT", "9000")]).unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:9000");

        let config = config_from(&[("PORT", "9000"), ("LISTEN_ADDR", "127.0.0.1:7000")]).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:7000");
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let config =
            config_from(&[("ALLOWED_ORIGINS", "http://a.test, http://b.test ,")]).unwrap();
        assert_eq!(config.allowed_origins(), ["http://a.test", "http://b.test"]);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            config_from(&[("BASE_PATH", "api")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config_from(&[("REQUEST_TIMEOUT_SECS", "0")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config_from(&[("PORT", "http")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config_from(&[("DATABASE_MAX_CONNECTIONS", "-1")]),
            Err(ConfigError::Invalid(_))
        ));
    }
}
