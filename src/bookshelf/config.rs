use crate::catalog::DEFAULT_CATALOG_URL;
use crate::error::{BookshelfError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by `bookshelf config`.
pub const CATALOG_URL_KEY: &str = "catalog-url";

/// Configuration for bookshelf, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookshelfConfig {
    /// Base URL of the catalog service
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

impl Default for BookshelfConfig {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
        }
    }
}

impl BookshelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BookshelfConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        match key {
            CATALOG_URL_KEY => Ok(&self.catalog_url),
            other => Err(BookshelfError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Sets `key`, checking that a catalog URL parses before storing it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            CATALOG_URL_KEY => {
                url::Url::parse(value)?;
                self.catalog_url = value.to_string();
                Ok(())
            }
            other => Err(BookshelfError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Picks the catalog URL: explicit flag, then environment, then this file.
    pub fn resolve_catalog_url(&self, flag: Option<&str>, env: Option<&str>) -> String {
        flag.or(env)
            .map(str::to_string)
            .unwrap_or_else(|| self.catalog_url.clone())
    }
}
