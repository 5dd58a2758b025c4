//! Page transport.
//!
//! The pipeline only needs the body of a page as text. [`PageFetcher`] is the
//! seam that tests replace; [`HttpPageFetcher`] is the `reqwest`-backed
//! default. No retries happen at this layer.

mod sources;

pub use sources::SiteUrls;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::errors::StatsError;

/// Default timeout for a single page request.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = concat!("dugout-stats/", env!("CARGO_PKG_VERSION"));

/// Fetches raw page bodies.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return its body.
    ///
    /// Transport failures and non-success statuses are both
    /// [`StatsError::Network`].
    async fn fetch_page(&self, url: &str) -> Result<String, StatsError>;
}

/// HTTP fetcher built on a shared `reqwest` client.
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

impl Default for HttpPageFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_TIMEOUT)
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, StatsError> {
        info!("Fetching page {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StatsError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::Network {
                url: url.to_string(),
                message: format!("HTTP {} fetching {}", status, url),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| StatsError::network(url, e))?;

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
