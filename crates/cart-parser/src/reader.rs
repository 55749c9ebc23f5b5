//! # Reader
//!
//! Where the text of a cart file comes from.
//!
//! [`CartParser`](crate::CartParser) only ever asks a [`CsvReader`] for the
//! full text of a path. [`FsReader`] goes to disk; [`StaticReader`] hands
//! back fixed text and stands in for the filesystem in tests.

use std::fs;
use std::io;
use std::path::Path;

/// Maps a path to the full text behind it.
pub trait CsvReader: Send + Sync {
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Reads cart files from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl CsvReader for FsReader {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// Returns the same text for every path.
#[derive(Debug, Clone, Default)]
pub struct StaticReader {
    text: String,
}

impl StaticReader {
    pub fn new(text: impl Into<String>) -> Self {
        StaticReader { text: text.into() }
    }
}

impl CsvReader for StaticReader {
    fn read(&self, _path: &Path) -> io::Result<String> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_fs_reader_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Product name,Price,Quantity\nA,1,1\n").unwrap();

        let text = FsReader.read(file.path()).unwrap();
        assert_eq!(text, "Product name,Price,Quantity\nA,1,1\n");
    }

    #[test]
    fn test_fs_reader_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsReader.read(&dir.path().join("missing.csv")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_static_reader_ignores_path() {
        let reader = StaticReader::new("x");
        assert_eq!(reader.read(Path::new("a")).unwrap(), "x");
        assert_eq!(reader.read(Path::new("b")).unwrap(), "x");
    }
}
