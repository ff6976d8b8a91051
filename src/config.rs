use serde::{Deserialize, Deserializer, de};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::partition::{PartitionError, PartitionSize};

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "pagepart.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid pagination configuration: {0}")]
    InvalidPagination(#[from] PartitionError),
}

/// On-disk layout, e.g. `{ "contentDir": "content", "pagination": { "pagerSize": 10 } }`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ConfigFile {
    content_dir: PathBuf,
    pagination: PaginationSection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PaginationSection {
    #[serde(deserialize_with = "saturating_i64")]
    pager_size: i64,
}

/// Read an integer, clamping values above `i64::MAX` instead of failing
fn saturating_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    number
        .as_i64()
        .or_else(|| number.as_u64().map(|_| i64::MAX))
        .ok_or_else(|| de::Error::custom(format!("pagerSize must be an integer, got {}", number)))
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            pagination: PaginationSection::default(),
        }
    }
}

impl Default for PaginationSection {
    fn default() -> Self {
        Self {
            pager_size: i64::from(PartitionSize::DEFAULT),
        }
    }
}

/// Validated site settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub content_dir: PathBuf,
    pub pager_size: PartitionSize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            pager_size: PartitionSize::DEFAULT,
        }
    }
}

impl SiteConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&contents)
    }

    /// Parse and validate a JSON document; missing keys take defaults
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(contents)?;
        let pager_size = PartitionSize::new(file.pagination.pager_size)?;

        Ok(Self {
            content_dir: file.content_dir,
            pager_size,
        })
    }

    /// Load [`DEFAULT_CONFIG_FILE`] from the working directory if it exists
    pub fn load_default() -> Result<Option<Self>, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let config = Self::load(path)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(Some(config))
    }

    /// Apply a command-line pager size on top of the file value
    pub fn with_pager_size(mut self, size: Option<i64>) -> Result<Self, ConfigError> {
        if let Some(size) = size {
            self.pager_size = PartitionSize::new(size)?;
        }
        Ok(self)
    }
}
