use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_CHECKS_DIR: &str = "CHECKSMITH_CHECKS_DIR";
const ENV_REGISTRY: &str = "CHECKSMITH_REGISTRY";
const ENV_TIMEOUT: &str = "CHECKSMITH_TIMEOUT";

/// Command-line overrides; highest precedence in resolution.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub checks_dir: Option<PathBuf>,
    pub registry_path: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_checks_dir")]
    pub checks_dir: PathBuf,
    #[serde(default = "default_registry_path")]
    pub registry_path: PathBuf,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_checks_dir() -> PathBuf {
    PathBuf::from("tests/checks")
}

fn default_registry_path() -> PathBuf {
    PathBuf::from("tests/templates/registry.json")
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            checks_dir: default_checks_dir(),
            registry_path: default_registry_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the effective configuration. Priority per field:
    /// CLI flag > environment variable > config file > built-in default.
    pub fn resolve(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::load_from(path)?,
            None => Self::load_from(Path::new("checksmith.toml"))?,
        };

        if let Ok(dir) = std::env::var(ENV_CHECKS_DIR) {
            config.checks_dir = PathBuf::from(dir);
        }
        if let Ok(registry) = std::env::var(ENV_REGISTRY) {
            config.registry_path = PathBuf::from(registry);
        }
        if let Ok(timeout) = std::env::var(ENV_TIMEOUT) {
            config.timeout_secs = timeout.parse().map_err(|_| {
                Error::Config(format!(
                    "{} must be a number of seconds, found '{}'",
                    ENV_TIMEOUT, timeout
                ))
            })?;
        }

        if let Some(dir) = &overrides.checks_dir {
            config.checks_dir = dir.clone();
        }
        if let Some(registry) = &overrides.registry_path {
            config.registry_path = registry.clone();
        }
        if let Some(timeout) = overrides.timeout_secs {
            config.timeout_secs = timeout;
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
