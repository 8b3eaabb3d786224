//! Configuration for the video-hosting process.
//!
//! Built once at startup and passed by value into constructors; nothing in
//! the crate reads configuration on its own.

use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("POSTGRES_URL is required")]
    MissingDsn,

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },

    #[error("failed to load env file: {0}")]
    EnvFile(#[from] dotenv::Error),
}

/// Run mode, selects the log format and level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    Local,
    #[default]
    Dev,
    Prod,
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Mode::Local),
            "dev" => Ok(Mode::Dev),
            "prod" => Ok(Mode::Prod),
            other => Err(ConfigError::Invalid {
                key: "MODE",
                value: other.to_string(),
            }),
        }
    }
}

/// Connection settings for the video store.
#[derive(Clone)]
pub struct DbConfig {
    /// PostgreSQL connection URL
    pub dsn: String,
    /// Upper bound of pooled connections
    pub max_connections: u32,
    /// How long an operation waits for a free connection
    pub acquire_timeout_secs: u64,
    /// Apply embedded migrations after connecting
    pub run_migrations: bool,
}

impl DbConfig {
    pub fn new(dsn: impl Into<String>) -> Self {
        Self {
            dsn: dsn.into(),
            ..Self::default()
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            dsn: String::new(),
            max_connections: 10,
            acquire_timeout_secs: 5,
            run_migrations: false,
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("dsn", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub mode: Mode,
    pub db: DbConfig,
}

impl AppConfig {
    /// Load configuration from environment variables, reading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::read_env()
    }

    /// Load a specific env file, then read the environment.
    /// Variables already set in the process take precedence over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenv::from_path(path.as_ref())?;
        Self::read_env()
    }

    fn read_env() -> Result<Self, ConfigError> {
        let defaults = DbConfig::default();

        let mode = match env::var("MODE") {
            Ok(m) if !m.is_empty() => m.parse()?,
            _ => Mode::default(),
        };

        let dsn = env::var("POSTGRES_URL").unwrap_or_default();
        if dsn.trim().is_empty() {
            return Err(ConfigError::MissingDsn);
        }

        Ok(Self {
            mode,
            db: DbConfig {
                dsn,
                max_connections: parse_var("DB_MAX_CONNECTIONS", defaults.max_connections)?,
                acquire_timeout_secs: parse_var(
                    "DB_ACQUIRE_TIMEOUT_SECS",
                    defaults.acquire_timeout_secs,
                )?,
                run_migrations: parse_var("DB_MIGRATE", defaults.run_migrations)?,
            },
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}
