//! Paginated workshop item crawling
//!
//! Visits each browse page of the validated catalog in ascending order and
//! extracts the workshop item IDs from the entry anchors. The accumulator
//! is a plain value owned by the crawl and returned to the caller.

use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};
use url::Url;

use crate::domain::CrawlRequest;

use super::config::{selectors, WorkshopEndpoints};
use super::error::CrawlError;
use super::page_fetcher::PageFetcher;

pub struct PaginationCrawler {
    fetcher: PageFetcher,
    endpoints: WorkshopEndpoints,
    container_selector: Selector,
    link_selector: Selector,
}

impl PaginationCrawler {
    pub fn new(fetcher: PageFetcher, endpoints: WorkshopEndpoints) -> Result<Self> {
        Ok(Self {
            fetcher,
            endpoints,
            container_selector: compile(selectors::ITEM_CONTAINER)?,
            link_selector: compile(selectors::ITEM_LINK)?,
        })
    }

    /// Crawl the page range and return the collected item IDs in page
    /// order, then anchor document order. Duplicates are preserved.
    ///
    /// An empty range (start past the effective end) performs zero fetches
    /// and yields an empty sequence; a failed page fetch aborts the whole
    /// crawl and discards everything collected so far.
    pub async fn crawl(
        &self,
        request: &CrawlRequest,
        total_pages: u32,
    ) -> Result<Vec<u64>, CrawlError> {
        let end_page = request.effective_end_page(total_pages);
        let mut item_ids = Vec::new();

        for page in request.start_page..=end_page {
            info!("visiting page {page} / {end_page}");

            let url = self.endpoints.browse_page(&request.app_id, page);
            let fetched = self.fetcher.fetch(&url).await?;
            let document = fetched.document();
            self.collect_page_ids(&document, &fetched.final_url, &mut item_ids);
        }

        Ok(item_ids)
    }

    /// Append every item ID found on one page, in document order. Entries
    /// whose link or ID is malformed are logged and skipped.
    fn collect_page_ids(&self, document: &Html, page_url: &Url, item_ids: &mut Vec<u64>) {
        for container in document.select(&self.container_selector) {
            for anchor in container.select(&self.link_selector) {
                if let Some(id) = item_id_from_anchor(&anchor, page_url) {
                    item_ids.push(id);
                }
            }
        }
    }
}

/// Parse the workshop item ID out of one entry anchor's `href`.
fn item_id_from_anchor(anchor: &ElementRef<'_>, page_url: &Url) -> Option<u64> {
    let href = anchor.value().attr("href")?;

    let target = match Url::parse(href).or_else(|_| page_url.join(href)) {
        Ok(target) => target,
        Err(e) => {
            warn!("error parsing item URL '{href}': {e}");
            return None;
        }
    };

    let Some(id) = target
        .query_pairs()
        .find(|(key, _)| key.as_ref() == "id")
        .map(|(_, value)| value.into_owned())
    else {
        warn!("item URL '{href}' carries no id parameter");
        return None;
    };

    match id.parse::<u64>() {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("error parsing item ID '{id}': {e}");
            None
        }
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("invalid selector '{selector}': {e}"))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::infrastructure::config::{steam, CrawlerConfig};
    use crate::infrastructure::rate_limiter::RateLimiter;

    fn crawler() -> PaginationCrawler {
        let limiter = RateLimiter::new(Duration::ZERO, Duration::ZERO);
        let fetcher = PageFetcher::new(&CrawlerConfig::default(), limiter).unwrap();
        let endpoints = WorkshopEndpoints::new(steam::BASE_URL).unwrap();
        PaginationCrawler::new(fetcher, endpoints).unwrap()
    }

    fn page_url() -> Url {
        Url::parse("https://steamcommunity.com/workshop/browse/?appid=108600&p=1").unwrap()
    }

    fn listing(anchors: &str) -> Html {
        Html::parse_document(&format!(
            "<div class=\"workshopBrowseItems\"><div>{anchors}</div></div>"
        ))
    }

    #[test]
    fn ids_are_collected_in_document_order() {
        let document = listing(
            "<a class=\"ugc\" href=\"https://steamcommunity.com/sharedfiles/filedetails/?id=111\"></a>\
             <a class=\"ugc\" href=\"https://steamcommunity.com/sharedfiles/filedetails/?id=222\"></a>",
        );

        let mut item_ids = Vec::new();
        crawler().collect_page_ids(&document, &page_url(), &mut item_ids);
        assert_eq!(item_ids, vec![111, 222]);
    }

    #[test]
    fn duplicate_ids_are_preserved() {
        let document = listing(
            "<a class=\"ugc\" href=\"/sharedfiles/filedetails/?id=7\"></a>\
             <a class=\"ugc\" href=\"/sharedfiles/filedetails/?id=7\"></a>",
        );

        let mut item_ids = Vec::new();
        crawler().collect_page_ids(&document, &page_url(), &mut item_ids);
        assert_eq!(item_ids, vec![7, 7]);
    }

    #[test]
    fn malformed_id_skips_only_that_anchor() {
        let document = listing(
            "<a class=\"ugc\" href=\"/sharedfiles/filedetails/?id=not-a-number\"></a>\
             <a class=\"ugc\" href=\"/sharedfiles/filedetails/?id=456\"></a>",
        );

        let mut item_ids = Vec::new();
        crawler().collect_page_ids(&document, &page_url(), &mut item_ids);
        assert_eq!(item_ids, vec![456]);
    }

    #[test]
    fn anchors_outside_the_item_grid_are_ignored() {
        let document = Html::parse_document(
            "<div class=\"sidebar\">\
             <a class=\"ugc\" href=\"/sharedfiles/filedetails/?id=999\"></a></div>",
        );

        let mut item_ids = Vec::new();
        crawler().collect_page_ids(&document, &page_url(), &mut item_ids);
        assert!(item_ids.is_empty());
    }

    #[test]
    fn relative_hrefs_resolve_against_the_page_url() {
        let document = listing("<a class=\"ugc\" href=\"?id=31337\"></a>");

        let mut item_ids = Vec::new();
        crawler().collect_page_ids(&document, &page_url(), &mut item_ids);
        assert_eq!(item_ids, vec![31337]);
    }
}
