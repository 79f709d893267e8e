use crate::error::{PdError, Result};
use crate::github::DEFAULT_API_URL;
use crate::validation::validate_color;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file inside the platform config directory.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PdConfig {
    #[serde(default)]
    pub github: GithubSettings,

    #[serde(default)]
    pub standards: StandardsSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubSettings {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u8,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_per_page() -> u8 {
    100
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            per_page: default_per_page(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardsSettings {
    /// Topic every conforming repository carries
    #[serde(default = "default_topic")]
    pub topic: String,

    /// Color required on labels outside the standard table
    #[serde(default = "default_catchall_color")]
    pub catchall_color: String,
}

fn default_topic() -> String {
    "product-delivery".to_string()
}

fn default_catchall_color() -> String {
    "5319e7".to_string()
}

impl Default for StandardsSettings {
    fn default() -> Self {
        Self {
            topic: default_topic(),
            catchall_color: default_catchall_color(),
        }
    }
}

impl PdConfig {
    /// Loads the config from `explicit` when given, otherwise from the
    /// platform config directory. A missing default file yields defaults;
    /// a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "pd").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PdError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Overrides the API base URL (flag or `GH_API_URL`).
    pub fn with_api_url(mut self, api_url: Option<String>) -> Result<Self> {
        if let Some(url) = api_url {
            self.github.api_url = url;
            self.validate()?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.github.api_url).map_err(|e| {
            PdError::Config(format!("Invalid api_url '{}': {}", self.github.api_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(PdError::Config(format!(
                "api_url must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.github.timeout_secs == 0 {
            return Err(PdError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if !(1..=100).contains(&self.github.per_page) {
            return Err(PdError::Config(format!(
                "per_page must be between 1 and 100, got {}",
                self.github.per_page
            )));
        }
        if self.standards.topic.is_empty() {
            return Err(PdError::Config("topic cannot be empty".to_string()));
        }
        validate_color(&self.standards.catchall_color)
            .map_err(|e| PdError::Config(format!("catchall_color: {}", e)))?;
        Ok(())
    }
}
