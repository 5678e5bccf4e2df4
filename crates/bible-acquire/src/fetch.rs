use crate::config::SiteConfig;
use crate::error::{AcquireError, Result};

/// Anything that can turn a URL into a response body.
///
/// The scheduler only ever needs this one capability, so tests swap in
/// an in-memory page table.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Plain GET over reqwest with a fixed user agent. No retries.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|source| AcquireError::Transport {
                url: config.base_url.clone(),
                source,
            })?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    /// A non-2xx status is only logged: the body is handed on as-is and a
    /// missing content field surfaces further down.
    async fn fetch(&self, url: &str) -> Result<String> {
        let transport = |source| AcquireError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Non-success response");
        }

        let body = response.text().await.map_err(transport)?;
        tracing::debug!(url = %url, bytes = body.len(), "Received response");
        Ok(body)
    }
}
