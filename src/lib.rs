//! Workshop Certis - Steam Workshop item ID scraper
//!
//! This crate enumerates every workshop item identifier published for a
//! given Steam game by walking the paginated workshop browse listing and
//! writing the collected IDs to a flat text file, one ID per line.

// Module declarations
pub mod domain;
pub mod infrastructure;
pub mod session;

pub use domain::{CatalogInfo, CrawlOutput, CrawlRequest};
pub use infrastructure::error::CrawlError;
pub use session::CrawlSession;
