//! One-shot crawl session orchestration
//!
//! Wires validation, crawling and persistence together:
//! validate (fatal on failure, before any page fetch) -> crawl -> write.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::domain::{CrawlOutput, CrawlRequest};
use crate::infrastructure::catalog::CatalogValidator;
use crate::infrastructure::config::{CrawlerConfig, WorkshopEndpoints};
use crate::infrastructure::crawler::PaginationCrawler;
use crate::infrastructure::error::CrawlError;
use crate::infrastructure::page_fetcher::PageFetcher;
use crate::infrastructure::rate_limiter::RateLimiter;
use crate::infrastructure::writer::ResultWriter;

pub struct CrawlSession {
    request: CrawlRequest,
    validator: CatalogValidator,
    crawler: PaginationCrawler,
    output_dir: PathBuf,
}

impl CrawlSession {
    pub fn new(config: &CrawlerConfig, request: CrawlRequest) -> Result<Self> {
        let limiter = RateLimiter::new(request.delay, request.jitter);
        let fetcher = PageFetcher::new(config, limiter)?;
        let endpoints = WorkshopEndpoints::new(&config.base_url)?;

        Ok(Self {
            request,
            validator: CatalogValidator::new(fetcher.clone(), endpoints.clone())?,
            crawler: PaginationCrawler::new(fetcher, endpoints)?,
            output_dir: PathBuf::from("."),
        })
    }

    /// Directory the result file is written into; defaults to the working
    /// directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Run the whole session and return the crawl output after it has been
    /// persisted.
    pub async fn run(&self) -> Result<CrawlOutput, CrawlError> {
        let catalog = self.validator.validate(&self.request.app_id).await?;
        info!("found game '{}'", catalog.app_name);

        let item_ids = self.crawler.crawl(&self.request, catalog.total_pages).await?;
        info!("collected {} item IDs", item_ids.len());

        let output = CrawlOutput {
            app_id: self.request.app_id.clone(),
            app_name: catalog.app_name,
            item_ids,
        };

        let path = self.output_dir.join(output.file_name());
        ResultWriter::write(&path, &output.item_ids)?;
        info!("file saved as '{}'", output.file_name());

        Ok(output)
    }
}
