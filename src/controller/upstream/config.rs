use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT};
use std::time::Duration;

use crate::args::CleanArgs;

pub const ACCEPT_JSON: &str = "application/json; charset=utf-8";
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub const UPSTREAM_REFERER: &str = "https://www.fotmob.com/";
pub const UPSTREAM_ORIGIN: &str = "https://www.fotmob.com";

/// Everything the http client needs to talk to the upstream api. Built once at startup.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub accept: &'static str,
    pub user_agent: &'static str,
    pub referer: &'static str,
    pub origin: &'static str,
}

impl UpstreamConfig {
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        UpstreamConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            accept: ACCEPT_JSON,
            user_agent: BROWSER_USER_AGENT,
            referer: UPSTREAM_REFERER,
            origin: UPSTREAM_ORIGIN,
        }
    }

    #[must_use]
    pub fn from_args(args: &CleanArgs) -> Self {
        Self::new(
            &args.upstream_base_url,
            Duration::from_secs(args.upstream_timeout_secs),
        )
    }

    #[must_use]
    pub fn header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(self.accept));
        headers.insert(USER_AGENT, HeaderValue::from_static(self.user_agent));
        headers.insert(REFERER, HeaderValue::from_static(self.referer));
        headers.insert(ORIGIN, HeaderValue::from_static(self.origin));
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_fixed() {
        let config = UpstreamConfig::new("https://example.test/api/", Duration::from_secs(5));
        assert_eq!(config.base_url, "https://example.test/api");
        let headers = config.header_map();
        assert_eq!(headers[ACCEPT], "application/json; charset=utf-8");
        assert_eq!(headers[ORIGIN], UPSTREAM_ORIGIN);
        assert_eq!(headers[REFERER], UPSTREAM_REFERER);
        assert!(headers.contains_key(USER_AGENT));
    }
}
