//! Runtime configuration.

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_ROOT: &str = "http://localhost:5000/api/";
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
pub const DEFAULT_USER_AGENT: &str = concat!("recipebook/", env!("CARGO_PKG_VERSION"));

pub const ENV_API_ROOT: &str = "RECIPEBOOK_API_ROOT";
pub const ENV_CHANNEL_CAPACITY: &str = "RECIPEBOOK_CHANNEL_CAPACITY";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid API root `{value}`: {reason}")]
    InvalidApiRoot { value: String, reason: String },
    #[error("Invalid channel capacity `{0}`")]
    InvalidCapacity(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Entry point of the API; the start page is read from here.
    pub api_root: String,
    /// Buffer of the browser's request channel.
    pub channel_capacity: usize,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Reads `RECIPEBOOK_API_ROOT` and `RECIPEBOOK_CHANNEL_CAPACITY`, falling
    /// back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(root) = lookup(ENV_API_ROOT) {
            config.api_root = root;
        }
        if let Some(capacity) = lookup(ENV_CHANNEL_CAPACITY) {
            config.channel_capacity = capacity
                .trim()
                .parse()
                .ok()
                .filter(|c| *c > 0)
                .ok_or(ConfigError::InvalidCapacity(capacity))?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    /// The API root must be an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidApiRoot {
            value: self.api_root.clone(),
            reason,
        };
        let url = Url::parse(&self.api_root).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme `{other}`"))),
        }
    }
}
