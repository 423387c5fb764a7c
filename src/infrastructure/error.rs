//! Error types for the crawl pipeline
//!
//! Fatal failures are grouped into [`CrawlError`]; per-anchor extraction
//! problems are logged and skipped at the call site and never reach this
//! taxonomy.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    /// Missing or malformed invocation parameters, rejected before any
    /// network activity.
    #[error("usage problem: {reason}")]
    Usage { reason: String },

    /// The workshop browse root redirected away from its canonical form or
    /// carried an unparsable paging control.
    #[error("could not find catalog for identifier '{app_id}'")]
    Validation { app_id: String },

    /// Transport failure or non-success HTTP status on any fetch.
    #[error("failed to fetch '{url}'")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The result file could not be created or written.
    #[error("failed to write '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CrawlError {
    pub fn usage(reason: impl Into<String>) -> Self {
        Self::Usage {
            reason: reason.into(),
        }
    }

    pub fn validation(app_id: &str) -> Self {
        Self::Validation {
            app_id: app_id.to_string(),
        }
    }

    pub fn fetch(url: &str, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.to_string(),
            source,
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_embeds_the_app_id() {
        let error = CrawlError::validation("108600");
        assert_eq!(
            error.to_string(),
            "could not find catalog for identifier '108600'"
        );
    }
}
