//! A decoded source file as read from disk.

use std::path::PathBuf;

/// A source file loaded and decoded into UTF-8.
#[derive(Debug)]
pub struct SourceFile {
    /// The filesystem path of this file.
    pub path: PathBuf,
    /// The full decoded text content.
    pub content: String,
    /// Name of the encoding the content was decoded from (e.g. `"UTF-8"`, `"GBK"`).
    pub encoding: &'static str,
}

impl SourceFile {
    /// Creates a `SourceFile` from already-decoded text.
    pub fn new(path: impl Into<PathBuf>, content: String, encoding: &'static str) -> Self {
        Self {
            path: path.into(),
            content,
            encoding,
        }
    }
}
