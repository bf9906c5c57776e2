use std::env;
use std::str::FromStr;

use anyhow::{bail, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => bail!("Unknown STORAGE_BACKEND '{other}' (expected 'postgres' or 'memory')"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub skip_migrations: bool,
    /// JSON file loaded into the `memory` backend at start-up.
    pub memory_seed_path: Option<String>,
    pub port: u16,
    pub gql_introspection: bool,
    pub allowed_origins: Vec<String>,
    pub jwt_secret: String,
    pub access_token_expiration_minutes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::default(),
            database_url: None,
            database_max_connections: 30,
            skip_migrations: false,
            memory_seed_path: None,
            port: 8080,
            gql_introspection: false,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:3001".to_string(),
            ],
            jwt_secret: String::new(),
            access_token_expiration_minutes: 15,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key/value source. Unparseable numbers fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) if !secret.is_empty() => secret,
            _ => bail!("JWT_SECRET must be set"),
        };

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => defaults.storage_backend,
        };

        let flag = |key: &str| {
            lookup(key)
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false)
        };

        Ok(Self {
            storage_backend,
            database_url: lookup("DATABASE_URL"),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.database_max_connections),
            skip_migrations: flag("SKIP_MIGRATIONS"),
            memory_seed_path: lookup("MEMORY_SEED_PATH").filter(|path| !path.is_empty()),
            port: lookup("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            gql_introspection: flag("GQL_INTROSPECTION"),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.allowed_origins),
            jwt_secret,
            access_token_expiration_minutes: lookup("ACCESS_TOKEN_EXPIRATION_MINUTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.access_token_expiration_minutes),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[("JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(cfg.storage_backend, StorageBackend::Postgres);
        assert_eq!(cfg.database_max_connections, 30);
        assert_eq!(cfg.port, 8080);
        assert!(!cfg.gql_introspection);
        assert_eq!(cfg.allowed_origins.len(), 2);
    }

    #[test]
    fn missing_secret_is_an_error() {
        assert!(config(&[]).is_err());
        assert!(config(&[("JWT_SECRET", "")]).is_err());
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let cfg = config(&[("JWT_SECRET", "s"), ("PORT", "http"), ("DATABASE_MAX_CONNECTIONS", "-1")])
            .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.database_max_connections, 30);
    }

    #[test]
    fn parses_backend_and_origins() {
        let cfg = config(&[
            ("JWT_SECRET", "s"),
            ("STORAGE_BACKEND", "Memory"),
            ("ALLOWED_ORIGINS", "https://a.test, https://b.test,"),
            ("GQL_INTROSPECTION", "TRUE"),
            ("MEMORY_SEED_PATH", "fixtures/content.json"),
        ])
        .unwrap();
        assert_eq!(cfg.storage_backend, StorageBackend::Memory);
        assert_eq!(cfg.memory_seed_path.as_deref(), Some("fixtures/content.json"));
        assert_eq!(cfg.allowed_origins, vec!["https://a.test", "https://b.test"]);
        assert!(cfg.gql_introspection);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(config(&[("JWT_SECRET", "s"), ("STORAGE_BACKEND", "sqlite")]).is_err());
    }
}
