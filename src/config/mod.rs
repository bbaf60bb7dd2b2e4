use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::{ConfigError, LyrfindError, Result};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the lyrics provider API
    pub provider_url: String,

    /// Bind address for the serve command
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port for the serve command
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider_url: "https://api.lyrics.ovh".to_string(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Pick up .env if present (development setups)
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        // File layer: explicit --config path or the platform default
        let config_file = if let Some(path) = config_path {
            PathBuf::from(path)
        } else {
            Self::default_config_path()?
        };

        if config_file.exists() {
            let content = fs::read_to_string(&config_file)?;
            config = toml::from_str(&content)?;
        }

        // Environment variables take highest priority
        config.load_from_env();

        config.validate()?;

        // Write a default file on first run
        if !config_file.exists() {
            if let Some(parent) = config_file.parent() {
                fs::create_dir_all(parent)?;
            }
            config.save(&config_file)?;
        }

        Ok(config)
    }

    /// Load configuration from environment variables
    fn load_from_env(&mut self) {
        if let Ok(provider_url) = env::var("LYRFIND_PROVIDER_URL") {
            let trimmed = provider_url.trim();
            if !trimmed.is_empty() {
                self.provider_url = trimmed.to_string();
            }
        }

        if let Ok(host) = env::var("LYRFIND_HOST") {
            let trimmed = host.trim();
            if !trimmed.is_empty() {
                self.host = trimmed.to_string();
            }
        }

        if let Ok(port) = env::var("LYRFIND_PORT") {
            if let Ok(value) = port.parse::<u16>() {
                self.port = value;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        Url::parse(&self.provider_url).map_err(|e| {
            LyrfindError::Config(ConfigError::InvalidValue {
                field: "provider_url".to_string(),
                value: format!("{} ({})", self.provider_url, e),
            })
        })?;

        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn default_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("io", "lyrfind", "lyrfind")
            .ok_or_else(|| anyhow::anyhow!("Failed to determine project directories"))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Self::default_config_path()
    }
}
