use crate::error::ConfigError;
use crate::store::DEFAULT_DATA_SOURCE;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub base_path: String,
    pub data_source: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("TICKLIST_PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        let base_path = lookup("TICKLIST_BASE_PATH")
            .map(|path| normalize_base_path(&path))
            .unwrap_or_default();

        let data_source = lookup("TICKLIST_DATA_SOURCE")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string());

        Ok(Config {
            port,
            base_path,
            data_source,
        })
    }
}

/// Leading slash, no trailing slash; the root collapses to an empty prefix.
pub fn normalize_base_path(path: &str) -> String {
    let path = path.trim().trim_end_matches('/');
    if path.is_empty() || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
