// Server configuration loaded from the environment
//
// HOST / PORT: listening address (default 0.0.0.0:3000)
// STORAGE_BACKEND: "postgres" (default) or "memory"
// RUN_MIGRATIONS: "true" to apply bundled migrations at startup
// Database variables are documented on eventcal_storage::DatabaseConfig.

use eventcal_storage::DatabaseConfig;

pub const DEFAULT_PORT: u16 = 3000;

/// Which storage backend the server runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Postgres,
    Memory,
}

impl StorageMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Some(Self::Postgres),
            "memory" | "in-memory" | "inmemory" => Some(Self::Memory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageMode,
    pub run_migrations: bool,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup (extracted for testing)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid PORT, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let storage = match lookup("STORAGE_BACKEND") {
            Some(raw) => StorageMode::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unknown STORAGE_BACKEND, using postgres");
                StorageMode::Postgres
            }),
            None => StorageMode::Postgres,
        };

        let run_migrations = lookup("RUN_MIGRATIONS")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            host,
            port,
            storage,
            run_migrations,
            database: DatabaseConfig::from_lookup(&lookup),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.storage, StorageMode::Postgres);
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("STORAGE_BACKEND", "Memory"),
            ("RUN_MIGRATIONS", "true"),
        ]));
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.storage, StorageMode::Memory);
        assert!(config.run_migrations);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "http"),
            ("STORAGE_BACKEND", "mongo"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.storage, StorageMode::Postgres);
    }
}
