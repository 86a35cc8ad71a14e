use std::path::PathBuf;

use chrono::Duration;

use thiserror::Error;

use glowcart_notify::DEFAULT_DISPLAY_MS;

pub const DATA_DIR_ENV: &str = "GLOWCART_DATA_DIR";
pub const NOTIFICATION_TTL_ENV: &str = "GLOWCART_NOTIFICATION_TTL_MS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidDuration { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },

    #[error("no data directory available: {0}")]
    NoDataDir(String),
}

/// Runtime settings for a storefront session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding the `cart` and `compareList` slots.
    pub data_dir: PathBuf,
    /// How long a notification stays visible.
    pub notification_ttl: Duration,
}

impl StorefrontConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            notification_ttl: Duration::milliseconds(DEFAULT_DISPLAY_MS),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup(DATA_DIR_ENV) {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::Empty { var: DATA_DIR_ENV });
            }
            Some(raw) => PathBuf::from(raw.trim()),
            None => glowcart_storage::default_data_dir()
                .map_err(|e| ConfigError::NoDataDir(format!("{e:#}")))?,
        };

        let notification_ttl = match lookup(NOTIFICATION_TTL_ENV) {
            Some(raw) => {
                let ms = raw
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ConfigError::InvalidDuration {
                        var: NOTIFICATION_TTL_ENV,
                        value: raw.clone(),
                    })?;
                Duration::milliseconds(i64::from(ms))
            }
            None => Duration::milliseconds(DEFAULT_DISPLAY_MS),
        };

        Ok(Self {
            data_dir,
            notification_ttl,
        })
    }
}
