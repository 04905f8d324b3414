// Configuration loading.
// Reads the optional TOML config and turns it into catalog and pagination settings.

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CatalogSource;
use crate::error::{FolioError, Result};
use crate::pagination::PageLayout;

/// Default seconds before a remote catalog fetch gives up.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Top-level config file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Local catalog file (.json or .toml).
    pub catalog: Option<PathBuf>,
    /// URL of a JSON catalog fetched once at startup.
    pub remote_catalog: Option<String>,
    pub fetch_timeout_secs: u64,
    pub pagination: PaginationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            remote_catalog: None,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            pagination: PaginationConfig::default(),
        }
    }
}

/// Page sizes and reveal staggering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub project_page_size: usize,
    pub media_page_size: usize,
    pub project_stagger_ms: u64,
    pub media_stagger_ms: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            project_page_size: 3,
            media_page_size: 4,
            project_stagger_ms: 0,
            media_stagger_ms: 0,
        }
    }
}

impl PaginationConfig {
    /// Layout for the projects panel. Its bar hides when one page suffices.
    pub fn project_layout(&self) -> Result<PageLayout> {
        Ok(
            PageLayout::new(page_size("project_page_size", self.project_page_size)?)
                .with_stagger(Duration::from_millis(self.project_stagger_ms))
                .hiding_single_page_controls(),
        )
    }

    /// Layout shared by every media shelf.
    pub fn media_layout(&self) -> Result<PageLayout> {
        Ok(
            PageLayout::new(page_size("media_page_size", self.media_page_size)?)
                .with_stagger(Duration::from_millis(self.media_stagger_ms)),
        )
    }
}

fn page_size(name: &str, value: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(value).ok_or_else(|| FolioError::Config(format!("{name} must be at least 1")))
}

impl Config {
    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or from the default location when present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match crate::paths::config_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "reading config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Reject settings that would break pagination or fetching.
    pub fn validate(&self) -> Result<()> {
        self.pagination.project_layout()?;
        self.pagination.media_layout()?;
        if self.fetch_timeout_secs == 0 {
            return Err(FolioError::Config(
                "fetch_timeout_secs must be at least 1".to_string(),
            ));
        }
        if let Some(url) = &self.remote_catalog {
            reqwest::Url::parse(url)
                .map_err(|e| FolioError::Config(format!("remote_catalog {url:?}: {e}")))?;
        }
        Ok(())
    }

    /// Which catalog to load. A local file wins over a remote URL.
    pub fn catalog_source(&self) -> CatalogSource {
        match (&self.catalog, &self.remote_catalog) {
            (Some(path), _) => CatalogSource::File(path.clone()),
            (None, Some(url)) => CatalogSource::Remote(url.clone()),
            (None, None) => CatalogSource::Bundled,
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
