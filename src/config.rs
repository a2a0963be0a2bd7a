use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cache::{CachedSuffixList, DEFAULT_CACHE_SIZE};
use crate::error::{PslError, Result};
use crate::list::PublicSuffixList;
use crate::types::Options;

fn default_cache_size() -> usize {
    DEFAULT_CACHE_SIZE
}

/// Suffix list configuration, usually read from a JSON file.
///
/// ```json
/// { "path": "public_suffix_list.dat", "ignore_private": true, "cache_size": 4096 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Path to the suffix list file
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Only ICANN rules participate when set
    #[serde(default)]
    pub ignore_private: bool,
    /// LRU cache size for [`CachedSuffixList`]
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            path: None,
            ignore_private: false,
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

impl ListConfig {
    /// Create a config pointing at a suffix list file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
            ..Self::default()
        }
    }

    /// Set whether private rules are ignored
    pub fn with_ignore_private(mut self, ignore_private: bool) -> Self {
        self.ignore_private = ignore_private;
        self
    }

    /// Set cache size
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }

    /// Parse a JSON config
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            PslError::ConfigError(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&text)
    }

    /// Matching options for this config
    pub fn options(&self) -> Options {
        Options::new().with_ignore_private(self.ignore_private)
    }

    /// Load the configured suffix list
    pub fn load(&self) -> Result<PublicSuffixList> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| PslError::ConfigError("Suffix list path not configured".to_string()))?;
        PublicSuffixList::from_file(path)
    }

    /// Load the configured suffix list behind an LRU cache
    pub fn load_cached(&self) -> Result<CachedSuffixList> {
        Ok(CachedSuffixList::new(self.load()?, self.cache_size))
    }
}
