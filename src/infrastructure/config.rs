//! Crawler configuration and fixed Steam Workshop endpoints
//!
//! The browse URL templates and CSS selectors are fixed properties of the
//! Steam Community site; the tunable knobs (delays, timeout, user agent)
//! live in [`CrawlerConfig`].

use serde::{Deserialize, Serialize};
use url::Url;

/// Fixed Steam Community URLs
pub mod steam {
    /// Base URL for the Steam Community site
    pub const BASE_URL: &str = "https://steamcommunity.com";

    /// Path of the workshop browse listing
    pub const BROWSE_PATH: &str = "workshop/browse/";

    /// Query template selecting the top-rated, ready-to-use item listing.
    /// The page parameter is omitted, which the site treats as page 1.
    pub const BROWSE_QUERY: &str = "browsesort=toprated&section=readytouseitems";
}

/// CSS selectors for the workshop browse markup
pub mod selectors {
    /// Single-element container holding the game's display name
    pub const APP_NAME: &str = "div.apphub_AppName.ellipsis";

    /// Second-to-last paging control: the last one is the "next" arrow, the
    /// one before it carries the highest page number.
    pub const LAST_PAGE_CONTROL: &str = "div.workshopBrowsePagingControls > a:nth-last-child(2)";

    /// Item entry containers inside the browse grid
    pub const ITEM_CONTAINER: &str = "div.workshopBrowseItems > div";

    /// Item detail link inside an entry; its `id` query parameter is the
    /// workshop item identifier
    pub const ITEM_LINK: &str = "a.ugc";
}

/// Default values for crawl behavior
pub mod defaults {
    /// Fixed delay between requests in milliseconds
    pub const REQUEST_DELAY_MS: u64 = 25;

    /// Upper bound of the random extra delay in milliseconds
    pub const RANDOM_JITTER_MS: u64 = 0;

    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;
}

/// Tunable crawler settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Base URL of the crawled site; overridable for tests
    pub base_url: String,

    /// User agent string sent with every request
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub request_timeout_seconds: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            base_url: steam::BASE_URL.to_string(),
            user_agent: format!(
                "workshop-certis/{} (+https://github.com/workshop-certis)",
                env!("CARGO_PKG_VERSION")
            ),
            request_timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
        }
    }
}

/// URL construction and canonical-form checks for the workshop browse
/// listing of one site instance.
#[derive(Debug, Clone)]
pub struct WorkshopEndpoints {
    base: Url,
}

impl WorkshopEndpoints {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("invalid base URL '{base_url}': {e}"))?;
        Ok(Self { base })
    }

    /// Browse front page for a game; page parameter omitted implies page 1.
    pub fn browse_root(&self, app_id: &str) -> String {
        format!(
            "{}{}?appid={}&{}",
            self.base,
            steam::BROWSE_PATH,
            app_id,
            steam::BROWSE_QUERY
        )
    }

    /// Browse listing page `page` for a game.
    pub fn browse_page(&self, app_id: &str, page: u32) -> String {
        format!(
            "{}{}?appid={}&{}&actualsort=toprated&p={}",
            self.base,
            steam::BROWSE_PATH,
            app_id,
            steam::BROWSE_QUERY,
            page
        )
    }

    /// Whether a final response URL still points at the canonical browse
    /// listing. The site redirects unknown app IDs elsewhere, so origin,
    /// path and a leading numeric `appid` parameter are all required.
    pub fn is_canonical_browse(&self, final_url: &Url) -> bool {
        let origin_matches = final_url.scheme() == self.base.scheme()
            && final_url.host_str() == self.base.host_str()
            && final_url.port_or_known_default() == self.base.port_or_known_default();

        let expected_path = format!("{}{}", self.base.path(), steam::BROWSE_PATH);
        let path_matches = final_url.path() == expected_path;

        let appid_present = final_url
            .query()
            .and_then(|query| query.strip_prefix("appid="))
            .map(|rest| {
                let value = rest.split('&').next().unwrap_or_default();
                !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
            })
            .unwrap_or(false);

        origin_matches && path_matches && appid_present
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> WorkshopEndpoints {
        WorkshopEndpoints::new(steam::BASE_URL).unwrap()
    }

    #[test]
    fn browse_root_matches_the_fixed_template() {
        assert_eq!(
            endpoints().browse_root("108600"),
            "https://steamcommunity.com/workshop/browse/?appid=108600&browsesort=toprated&section=readytouseitems"
        );
    }

    #[test]
    fn browse_page_appends_sort_and_page_number() {
        assert_eq!(
            endpoints().browse_page("108600", 3),
            "https://steamcommunity.com/workshop/browse/?appid=108600&browsesort=toprated&section=readytouseitems&actualsort=toprated&p=3"
        );
    }

    #[test]
    fn canonical_check_accepts_the_browse_root() {
        let endpoints = endpoints();
        let url = Url::parse(&endpoints.browse_root("108600")).unwrap();
        assert!(endpoints.is_canonical_browse(&url));
    }

    #[test]
    fn canonical_check_rejects_a_not_found_redirect() {
        let endpoints = endpoints();
        let url = Url::parse("https://steamcommunity.com/app/108600/workshop/").unwrap();
        assert!(!endpoints.is_canonical_browse(&url));
    }

    #[test]
    fn canonical_check_rejects_a_foreign_host() {
        let endpoints = endpoints();
        let url =
            Url::parse("https://example.com/workshop/browse/?appid=108600").unwrap();
        assert!(!endpoints.is_canonical_browse(&url));
    }

    #[test]
    fn canonical_check_requires_a_numeric_appid() {
        let endpoints = endpoints();
        let url =
            Url::parse("https://steamcommunity.com/workshop/browse/?appid=abc").unwrap();
        assert!(!endpoints.is_canonical_browse(&url));
    }
}
