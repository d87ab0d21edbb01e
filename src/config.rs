// src/config.rs
//
// Runtime configuration
//
// PRINCIPLES:
// - Defaults first, then environment, then explicit overrides
// - Invalid values are errors, never silently replaced

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const ENV_DATABASE: &str = "FILM_LIBRARY_DATABASE";
pub const ENV_POOL_SIZE: &str = "FILM_LIBRARY_POOL_SIZE";
pub const ENV_CONNECTION_TIMEOUT_SECS: &str = "FILM_LIBRARY_CONNECTION_TIMEOUT_SECS";
pub const ENV_BUSY_TIMEOUT_MS: &str = "FILM_LIBRARY_BUSY_TIMEOUT_MS";

const DEFAULT_POOL_SIZE: u32 = 15;
const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Maximum pooled connections
    pub pool_max_size: u32,

    /// How long a caller waits for a free pooled connection
    pub connection_timeout: Duration,

    /// How long SQLite retries on a locked database before failing
    pub busy_timeout: Duration,
}

impl Config {
    /// Build a configuration from the process environment.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match lookup(ENV_DATABASE) {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_database_path()?,
        };

        let pool_max_size = match lookup(ENV_POOL_SIZE) {
            Some(raw) => parse_number::<u32>(ENV_POOL_SIZE, &raw)?,
            None => DEFAULT_POOL_SIZE,
        };
        if pool_max_size == 0 {
            return Err(AppError::Other(format!(
                "{} must be greater than zero",
                ENV_POOL_SIZE
            )));
        }

        let connection_timeout = match lookup(ENV_CONNECTION_TIMEOUT_SECS) {
            Some(raw) => Duration::from_secs(parse_number(ENV_CONNECTION_TIMEOUT_SECS, &raw)?),
            None => DEFAULT_CONNECTION_TIMEOUT,
        };

        let busy_timeout = match lookup(ENV_BUSY_TIMEOUT_MS) {
            Some(raw) => Duration::from_millis(parse_number(ENV_BUSY_TIMEOUT_MS, &raw)?),
            None => DEFAULT_BUSY_TIMEOUT,
        };

        Ok(Self {
            database_path,
            pool_max_size,
            connection_timeout,
            busy_timeout,
        })
    }

    pub fn with_database_path(mut self, path: PathBuf) -> Self {
        self.database_path = path;
        self
    }
}

/// Default database location
///
/// Path structure: {APP_DATA}/film_library/film_library.db
pub fn default_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    Ok(app_data_dir.join("film_library").join("film_library.db"))
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| AppError::Other(format!("{} has invalid value '{}'", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[(ENV_DATABASE, "/tmp/films.db")])).unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/films.db"));
        assert_eq!(config.pool_max_size, DEFAULT_POOL_SIZE);
        assert_eq!(config.connection_timeout, DEFAULT_CONNECTION_TIMEOUT);
        assert_eq!(config.busy_timeout, DEFAULT_BUSY_TIMEOUT);
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_DATABASE, "/data/films.db"),
            (ENV_POOL_SIZE, "4"),
            (ENV_CONNECTION_TIMEOUT_SECS, "2"),
            (ENV_BUSY_TIMEOUT_MS, "250"),
        ]))
        .unwrap();

        assert_eq!(config.pool_max_size, 4);
        assert_eq!(config.connection_timeout, Duration::from_secs(2));
        assert_eq!(config.busy_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_pool_size_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            (ENV_DATABASE, "/tmp/films.db"),
            (ENV_POOL_SIZE, "many"),
        ]));
        assert!(result.is_err());

        let result = Config::from_lookup(lookup_from(&[
            (ENV_DATABASE, "/tmp/films.db"),
            (ENV_POOL_SIZE, "0"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_path_layout() {
        if let Ok(path) = default_database_path() {
            assert!(path.ends_with("film_library/film_library.db"));
        }
    }
}
