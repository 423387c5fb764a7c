//! Core domain types for a workshop crawl session
//!
//! A crawl is described once by a [`CrawlRequest`], enriched with the
//! catalog facts discovered during validation ([`CatalogInfo`]) and ends in
//! a [`CrawlOutput`] that the writer consumes exactly once.

use std::time::Duration;

use crate::infrastructure::error::CrawlError;

/// Immutable description of one crawl run, built from the CLI parameters.
#[derive(Debug, Clone)]
pub struct CrawlRequest {
    /// Numeric Steam app ID of the game whose workshop is crawled
    pub app_id: String,

    /// First workshop page to visit (1-based)
    pub start_page: u32,

    /// Last page to visit; 0 means "use the discovered total page count"
    pub end_page: u32,

    /// Fixed delay applied before every request
    pub delay: Duration,

    /// Upper bound of the random extra delay added on top of `delay`
    pub jitter: Duration,
}

impl CrawlRequest {
    /// Validate the raw invocation parameters into a request.
    ///
    /// The app ID must be a non-empty string of ASCII digits; anything else
    /// is a usage error and is rejected before any network activity.
    pub fn new(
        app_id: &str,
        start_page: u32,
        end_page: u32,
        delay: Duration,
        jitter: Duration,
    ) -> Result<Self, CrawlError> {
        if app_id.is_empty() {
            return Err(CrawlError::usage("the Steam game ID is required"));
        }
        if !app_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CrawlError::usage(format!(
                "the Steam game ID must be numeric, got '{app_id}'"
            )));
        }
        if start_page == 0 {
            return Err(CrawlError::usage("start page must be at least 1"));
        }

        Ok(Self {
            app_id: app_id.to_string(),
            start_page,
            end_page,
            delay,
            jitter,
        })
    }

    /// Upper bound of the page loop: an explicit end page wins over the
    /// total discovered during validation, even when it exceeds it.
    pub fn effective_end_page(&self, total_pages: u32) -> u32 {
        if self.end_page > 0 {
            self.end_page
        } else {
            total_pages
        }
    }
}

/// Catalog facts extracted from the workshop browse front page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogInfo {
    /// Resolved game name; empty when the name container was absent
    pub app_name: String,

    /// Total page count from the paging controls; 0 for a single-page
    /// catalog without controls
    pub total_pages: u32,
}

/// Final result of a crawl: the resolved name plus the ordered,
/// duplicate-preserving item ID sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlOutput {
    pub app_id: String,
    pub app_name: String,
    pub item_ids: Vec<u64>,
}

impl CrawlOutput {
    /// File name the IDs are persisted under: `"<app_id> - <name>.txt"`.
    pub fn file_name(&self) -> String {
        format!("{} - {}.txt", self.app_id, self.app_name)
    }
}
