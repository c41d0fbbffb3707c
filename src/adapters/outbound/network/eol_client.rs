use crate::enrichment::domain::LifecycleCycle;
use crate::ports::outbound::LifecycleRegistry;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// EolClient adapter for the product-lifecycle registry
///
/// Implements the LifecycleRegistry port against an endoflife.date-shaped
/// API: `GET {base}/api/{slug}.json` returns the release-cycle rows for a
/// product slug. Unknown products answer with a non-success status, which
/// is the ordinary no-data outcome here, not an error.
pub struct EolClient {
    client: reqwest::Client,
    base_url: String,
}

impl EolClient {
    /// Creates a new lifecycle registry client
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("bom-enrich/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl LifecycleRegistry for EolClient {
    async fn product_cycles(&self, slug: &str) -> Option<Vec<LifecycleCycle>> {
        let url = format!("{}/api/{}.json", self.base_url, urlencoding::encode(slug));

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::debug!(%slug, %error, "lifecycle lookup failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(%slug, status = %response.status(), "lifecycle product unknown");
            return None;
        }

        match response.json::<Vec<LifecycleCycle>>().await {
            Ok(cycles) => Some(cycles),
            Err(error) => {
                tracing::debug!(%slug, %error, "lifecycle response unparsable");
                None
            }
        }
    }
}
