//! Rate-limited HTTP page fetching
//!
//! Thin wrapper over `reqwest` that applies the politeness delay before
//! every request and hands back the final URL (after redirects) together
//! with the response body. The body is returned as a `String` and parsed
//! into a document at the call site, keeping these futures Send-friendly.

use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::{Client, ClientBuilder};
use scraper::Html;
use tracing::debug;
use url::Url;

use super::config::CrawlerConfig;
use super::error::CrawlError;
use super::rate_limiter::RateLimiter;

/// One successfully fetched page.
#[derive(Debug)]
pub struct FetchedPage {
    /// URL the response actually came from, after any redirects
    pub final_url: Url,

    /// Raw response body
    pub body: String,
}

impl FetchedPage {
    /// Parse the body into a queryable document.
    pub fn document(&self) -> Html {
        Html::parse_document(&self.body)
    }
}

/// HTTP client with a built-in per-request politeness delay.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    limiter: RateLimiter,
}

impl PageFetcher {
    pub fn new(config: &CrawlerConfig, limiter: RateLimiter) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .gzip(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| anyhow!("failed to create HTTP client: {e}"))?;

        Ok(Self { client, limiter })
    }

    /// Fetch one page, waiting out the politeness delay first. Transport
    /// failures and non-success statuses both surface as [`CrawlError::Fetch`].
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, CrawlError> {
        self.limiter.wait().await;

        debug!("HTTP GET: {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| CrawlError::fetch(url, e))?;

        let final_url = response.url().clone();
        let body = response
            .text()
            .await
            .map_err(|e| CrawlError::fetch(url, e))?;

        Ok(FetchedPage { final_url, body })
    }
}
