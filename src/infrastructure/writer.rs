//! Flat-file result sink
//!
//! One decimal item ID per line, create-or-truncate semantics, buffered and
//! flushed before returning. A failed write may leave the file partially
//! written; this tool makes no atomicity promises.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::error::CrawlError;

pub struct ResultWriter;

impl ResultWriter {
    pub fn write(path: &Path, item_ids: &[u64]) -> Result<(), CrawlError> {
        debug!("writing {} item IDs to {}", item_ids.len(), path.display());

        let file = File::create(path).map_err(|e| CrawlError::io(path, e))?;
        let mut writer = BufWriter::new(file);

        for id in item_ids {
            writeln!(writer, "{id}").map_err(|e| CrawlError::io(path, e))?;
        }

        writer.flush().map_err(|e| CrawlError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_written_one_per_line_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("108600 - Project Zomboid.txt");

        ResultWriter::write(&path, &[111, 222, 333]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "111\n222\n333\n");
    }

    #[test]
    fn an_empty_sequence_writes_an_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        ResultWriter::write(&path, &[]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn an_existing_file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale contents\nfrom a previous run\n").unwrap();

        ResultWriter::write(&path, &[42]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "42\n");
    }

    #[test]
    fn an_unwritable_sink_surfaces_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-subdir").join("out.txt");

        let result = ResultWriter::write(&path, &[1]);
        assert!(matches!(result, Err(CrawlError::Io { .. })));
    }
}
