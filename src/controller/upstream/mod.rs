pub mod client;
pub mod config;
pub mod endpoint;

pub use client::*;
pub use config::*;
pub use endpoint::*;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Performs the request. Non-2xx statuses are returned, not turned into errors.
    async fn fetch(&self, endpoint: &Endpoint) -> Result<UpstreamResponse, AppError>;
}

/// Fetches `endpoint` and decodes the body.
///
/// # Errors
///
/// Will return `AppError::Upstream` on a non-2xx status, `AppError::Network` when the
/// request fails and `AppError::Parse` when the body isn't json
pub async fn fetch_json(
    upstream: &dyn UpstreamClient,
    endpoint: &Endpoint,
) -> Result<(u16, Value), AppError> {
    let resp = upstream.fetch(endpoint).await?;
    if !resp.is_success() {
        return Err(AppError::Upstream {
            status: resp.status,
            body: resp.body,
        });
    }
    let json: Value = serde_json::from_str(&resp.body)?;
    Ok((resp.status, json))
}
