// Catalog loading.
// Reads the catalog from a local file, a one-shot HTTP fetch, or the bundled copy.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::{info, warn};

use crate::error::{FolioError, Result};

use super::types::Catalog;

/// Sample catalog compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Where to get the catalog from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
    Remote(String),
}

impl CatalogSource {
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Bundled => "bundled catalog".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
            CatalogSource::Remote(url) => url.clone(),
        }
    }
}

/// A catalog along with where it actually came from.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub origin: CatalogSource,
    /// Why the requested source was abandoned for the bundled copy.
    pub fallback_reason: Option<String>,
}

/// Parse the bundled sample catalog.
pub fn bundled() -> Result<Catalog> {
    Ok(serde_json::from_str(BUNDLED_CATALOG)?)
}

/// Read a catalog file, picking the parser from the extension.
pub fn read_file(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(serde_json::from_str(&contents)?),
        Some("toml") => Ok(toml::from_str(&contents)?),
        other => Err(FolioError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

/// HTTP client for fetching a remote catalog.
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Create a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .default_headers(Self::headers())
            .timeout(timeout)
            .build()
            .map_err(FolioError::Fetch)?;
        Ok(Self { client })
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("folio/", env!("CARGO_PKG_VERSION"))),
        );
        headers
    }

    /// Fetch and decode a JSON catalog.
    pub async fn fetch(&self, url: &str) -> Result<Catalog> {
        let response = self.client.get(url).send().await.map_err(FolioError::Fetch)?;
        let response = check_response(response)?;
        let body = response.text().await.map_err(FolioError::Fetch)?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Map non-success statuses to errors.
fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        status => Err(FolioError::HttpStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        }),
    }
}

/// Load a catalog from `source`.
///
/// Local files must parse; a failed remote fetch falls back to the bundled
/// catalog and records the reason.
pub async fn load(source: &CatalogSource, timeout: Duration) -> Result<LoadedCatalog> {
    match source {
        CatalogSource::Bundled => Ok(LoadedCatalog {
            catalog: bundled()?,
            origin: CatalogSource::Bundled,
            fallback_reason: None,
        }),
        CatalogSource::File(path) => {
            let catalog = read_file(path)?;
            info!(path = %path.display(), "loaded catalog file");
            Ok(LoadedCatalog {
                catalog,
                origin: source.clone(),
                fallback_reason: None,
            })
        }
        CatalogSource::Remote(url) => {
            let client = CatalogClient::new(timeout)?;
            load_remote(&client, url).await
        }
    }
}

async fn load_remote(client: &CatalogClient, url: &str) -> Result<LoadedCatalog> {
    match client.fetch(url).await {
        Ok(catalog) => {
            info!(url, "fetched remote catalog");
            Ok(LoadedCatalog {
                catalog,
                origin: CatalogSource::Remote(url.to_string()),
                fallback_reason: None,
            })
        }
        Err(e) => {
            warn!(url, error = %e, "remote catalog unavailable, using bundled catalog");
            Ok(LoadedCatalog {
                catalog: bundled()?,
                origin: CatalogSource::Bundled,
                fallback_reason: Some(e.to_string()),
            })
        }
    }
}
