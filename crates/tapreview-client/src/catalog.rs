//! Business catalog sources.
//!
//! Each source is all-or-nothing: it either yields a complete [`Catalog`] or
//! an error. [`FallbackCatalog`] turns any source into one that never fails
//! by substituting the embedded demo table.

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use tapreview_core::{embedded_catalog, Catalog};

use crate::error::CatalogError;

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short label for log lines.
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Catalog, CatalogError>;
}

#[async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    async fn load(&self) -> Result<Catalog, CatalogError> {
        (**self).load().await
    }
}

/// Picks an HTTP source for `http(s)` locations and a file source otherwise.
#[must_use]
pub fn source_for(location: &str, client: Client) -> Box<dyn CatalogSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpCatalog::new(client, location))
    } else {
        Box::new(FileCatalog::new(location))
    }
}

/// Catalog served as a JSON document over HTTP.
pub struct HttpCatalog {
    client: Client,
    url: String,
}

impl HttpCatalog {
    #[must_use]
    pub fn new(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_owned(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    fn describe(&self) -> String {
        self.url.clone()
    }

    /// # Errors
    ///
    /// - [`CatalogError::Http`] on network failure.
    /// - [`CatalogError::UnexpectedStatus`] for any non-2xx response.
    /// - [`CatalogError::Deserialize`] if the body is not a catalog.
    async fn load(&self) -> Result<Catalog, CatalogError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Deserialize {
            context: self.url.clone(),
            source: e,
        })
    }
}

/// Catalog read from a JSON file on disk, the local counterpart of a
/// relative `businesses.json` resource.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Catalog, CatalogError> {
        let content =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|e| CatalogError::Io {
                    path: self.describe(),
                    source: e,
                })?;
        serde_json::from_str(&content).map_err(|e| CatalogError::Deserialize {
            context: self.describe(),
            source: e,
        })
    }
}

/// The built-in demo table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

#[async_trait]
impl CatalogSource for EmbeddedCatalog {
    fn describe(&self) -> String {
        "embedded".to_string()
    }

    async fn load(&self) -> Result<Catalog, CatalogError> {
        Ok(embedded_catalog())
    }
}

/// Tries `primary`, and on any failure serves the embedded table instead.
/// No retries and no merging of partial results.
pub struct FallbackCatalog<P> {
    primary: P,
    fallback: EmbeddedCatalog,
}

impl<P: CatalogSource> FallbackCatalog<P> {
    #[must_use]
    pub fn new(primary: P) -> Self {
        Self {
            primary,
            fallback: EmbeddedCatalog,
        }
    }

    /// Never fails; a primary error is logged and replaced by the fallback.
    pub async fn load_catalog(&self) -> Catalog {
        match self.primary.load().await {
            Ok(catalog) => {
                tracing::debug!(
                    source = %self.primary.describe(),
                    businesses = catalog.len(),
                    "loaded business catalog"
                );
                catalog
            }
            Err(e) => {
                tracing::warn!(
                    source = %self.primary.describe(),
                    error = %e,
                    "catalog load failed; using embedded fallback"
                );
                embedded_catalog()
            }
        }
    }
}

#[async_trait]
impl<P: CatalogSource> CatalogSource for FallbackCatalog<P> {
    fn describe(&self) -> String {
        format!("{} (fallback: {})", self.primary.describe(), self.fallback.describe())
    }

    async fn load(&self) -> Result<Catalog, CatalogError> {
        Ok(self.load_catalog().await)
    }
}
