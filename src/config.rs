use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::{DEFAULT_DIALECT, properties};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub db: DbConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// Root of the server distribution.
    pub dist_dir: String,

    /// Properties file with `omero.db.version` / `omero.db.patch`.
    /// Defaults to `etc/omero.properties` under `dist_dir`.
    pub properties_path: Option<String>,

    /// Directory of per-schema SQL (`<sql_dir>/<dialect>/<version>__<patch>`).
    /// When unset, scripts are generated without schema SQL and only the
    /// configured version/patch is accepted.
    pub sql_dir: Option<String>,

    pub dialect: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            dist_dir: ".".to_string(),
            properties_path: None,
            sql_dir: None,
            dialect: DEFAULT_DIALECT.to_string(),
        }
    }
}

impl DbConfig {
    #[must_use]
    pub fn properties_path(&self) -> PathBuf {
        self.properties_path.as_ref().map_or_else(
            || Path::new(&self.dist_dir).join(properties::RELATIVE_PATH),
            PathBuf::from,
        )
    }

    #[must_use]
    pub fn sql_dir(&self) -> Option<PathBuf> {
        self.sql_dir.as_ref().map(PathBuf::from)
    }
}

impl Config {
    /// First existing config file on the search path.
    #[must_use]
    pub fn find_path() -> Option<PathBuf> {
        Self::config_paths().into_iter().find(|path| path.exists())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("omero-admin").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".omero-admin").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.db.dialect.is_empty() {
            anyhow::bail!("db.dialect cannot be empty");
        }

        if self.db.dist_dir.is_empty() {
            anyhow::bail!("db.dist_dir cannot be empty");
        }

        Ok(())
    }
}
