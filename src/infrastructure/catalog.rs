//! Workshop catalog validation
//!
//! Resolves a game's app ID to its workshop browse front page, confirms the
//! site did not redirect away from the canonical listing (which it does for
//! unknown IDs) and extracts the display name and total page count.

use anyhow::{anyhow, Result};
use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::domain::CatalogInfo;

use super::config::{selectors, WorkshopEndpoints};
use super::error::CrawlError;
use super::page_fetcher::PageFetcher;

pub struct CatalogValidator {
    fetcher: PageFetcher,
    endpoints: WorkshopEndpoints,
    name_selector: Selector,
    paging_selector: Selector,
}

impl CatalogValidator {
    pub fn new(fetcher: PageFetcher, endpoints: WorkshopEndpoints) -> Result<Self> {
        Ok(Self {
            fetcher,
            endpoints,
            name_selector: compile(selectors::APP_NAME)?,
            paging_selector: compile(selectors::LAST_PAGE_CONTROL)?,
        })
    }

    /// Validate that `app_id` has a workshop catalog and return its facts.
    ///
    /// A non-canonical final URL and an unparsable paging control are
    /// equally fatal; a missing name or missing paging control is not.
    pub async fn validate(&self, app_id: &str) -> Result<CatalogInfo, CrawlError> {
        let url = self.endpoints.browse_root(app_id);
        let page = self.fetcher.fetch(&url).await?;

        let canonical = self.endpoints.is_canonical_browse(&page.final_url);
        if !canonical {
            warn!(
                "workshop browse for app {app_id} resolved to '{}' instead of the canonical listing",
                page.final_url
            );
        }

        let document = page.document();
        let app_name = self.extract_app_name(&document).unwrap_or_default();
        let total_pages = self.extract_total_pages(&document);

        match (canonical, total_pages) {
            (true, Ok(total_pages)) => {
                debug!("app {app_id} resolved to '{app_name}' with {total_pages} pages");
                Ok(CatalogInfo {
                    app_name,
                    total_pages,
                })
            }
            _ => Err(CrawlError::validation(app_id)),
        }
    }

    /// Display name from the front page header. Not every catalog front
    /// page carries the header, so absence is tolerated.
    fn extract_app_name(&self, document: &Html) -> Option<String> {
        document
            .select(&self.name_selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|name| !name.is_empty())
    }

    /// Total page count from the second-to-last paging control. An absent
    /// control means a single-page catalog (0); a control that fails to
    /// parse as a number marks the validation failed.
    fn extract_total_pages(&self, document: &Html) -> Result<u32, std::num::ParseIntError> {
        let Some(element) = document.select(&self.paging_selector).next() else {
            return Ok(0);
        };

        let text = element.text().collect::<String>().trim().to_string();
        text.parse::<u32>().map_err(|e| {
            warn!("error parsing page count '{text}': {e}");
            e
        })
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("invalid selector '{selector}': {e}"))
}
