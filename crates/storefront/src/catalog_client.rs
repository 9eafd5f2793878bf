//! Remote product catalog client.
//!
//! The storefront fetches the complete product list once at startup with a
//! plain `GET`. A failed fetch is logged and reported to Sentry, and the
//! storefront carries on with an empty catalog. There is no retry.

use std::sync::Arc;

use shopzone_core::{Catalog, Product};
use thiserror::Error;
use tracing::instrument;
use url::Url;

use crate::config::CatalogConfig;

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Catalog API returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The body was not a JSON product list.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the remote catalog API.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("shopzone-storefront/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                endpoint: config.api_url.clone(),
            }),
        })
    }

    /// The configured product list endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on transport failure, a non-success status, or
    /// a body that does not parse as a product list.
    #[instrument(skip(self), fields(endpoint = %self.inner.endpoint))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .inner
            .client
            .get(self.inner.endpoint.clone())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body = response.text().await?;
        parse_products(&body)
    }

    /// Fetch the catalog, falling back to an empty one on any failure.
    pub async fn load_catalog(&self) -> Catalog {
        match self.fetch_products().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "Catalog loaded");
                Catalog::new(products)
            }
            Err(e) => {
                let event_id = sentry::capture_error(&e);
                tracing::error!(
                    error = %e,
                    sentry_event_id = %event_id,
                    "Error fetching products, continuing with an empty catalog"
                );
                Catalog::empty()
            }
        }
    }
}

/// Parse the catalog API response body.
fn parse_products(body: &str) -> Result<Vec<Product>, CatalogError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %body.chars().take(500).collect::<String>(),
            "Failed to parse catalog response"
        );
        CatalogError::Parse(e)
    })
}
