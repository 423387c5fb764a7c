//! Infrastructure layer: HTTP fetching, markup extraction, rate limiting,
//! logging and the flat-file result sink.

pub mod catalog;
pub mod config;
pub mod crawler;
pub mod error;
pub mod logging;
pub mod page_fetcher;
pub mod rate_limiter;
pub mod writer;
