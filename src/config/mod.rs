//! Process configuration from the environment (a `.env` file is loaded first by the binary).
//!
//! | Variable | Default |
//! |---|---|
//! | `PORT` | 8080 |
//! | `DB_HOST` | localhost |
//! | `DB_PORT` | 5432 |
//! | `POSTGRES_USER` | postgres |
//! | `POSTGRES_PASSWORD` | (empty) |
//! | `POSTGRES_DB` | postgres |
//! | `DB_MAX_CONNECTIONS` | 5 |
//!
//! `DATABASE_URL`, when set, replaces every `DB_*`/`POSTGRES_*` connection setting.

use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub listen_port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let database = DatabaseConfig {
            url: get("DATABASE_URL"),
            host: get("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or("DB_PORT", get("DB_PORT"), 5432)?,
            user: get("POSTGRES_USER").unwrap_or_else(|| "postgres".into()),
            password: get("POSTGRES_PASSWORD").unwrap_or_default(),
            database: get("POSTGRES_DB").unwrap_or_else(|| "postgres".into()),
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 5)?,
        };
        Ok(AppConfig {
            listen_port: parse_or("PORT", get("PORT"), 8080)?,
            database,
        })
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(|e| ConfigError::DatabaseUrl(e.to_string()));
        }
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database))
    }

    /// Lazily connected pool; connections are opened on first use.
    pub fn pool(&self) -> Result<PgPool, ConfigError> {
        let options = self.connect_options()?;
        Ok(PgPoolOptions::new()
            .max_connections(self.max_connections)
            .connect_lazy_with(options))
    }
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: v }),
    }
}
