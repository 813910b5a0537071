use async_trait::async_trait;
use reqwest::Client;

use super::config::UpstreamConfig;
use super::endpoint::Endpoint;
use super::{UpstreamClient, UpstreamResponse};
use crate::error::AppError;

/// reqwest-backed upstream client. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
    base_url: String,
}

impl HttpUpstream {
    /// # Errors
    ///
    /// Will return `Err` if the underlying http client can't be built
    pub fn new(config: &UpstreamConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(config.header_map())
            .build()?;
        Ok(HttpUpstream {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstream {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<UpstreamResponse, AppError> {
        let url = endpoint.url(&self.base_url)?;
        log::debug!("fetching {endpoint} from {url}");

        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(UpstreamResponse { status, body })
    }
}
