//! File loading with character-encoding detection.
//!
//! The raw bytes are sniffed with [`chardetng`] and decoded with
//! [`encoding_rs`]. A byte-order mark takes precedence over the guess. The
//! detector's guess is otherwise trusted as-is: if the bytes contain
//! sequences that are malformed in the guessed encoding, loading fails.

use std::path::Path;

use chardetng::EncodingDetector;

use crate::error::SourceError;
use crate::source_file::SourceFile;

/// Reads and decodes the file at `path`.
pub fn load_file(path: &Path) -> Result<SourceFile, SourceError> {
    let bytes = std::fs::read(path)?;
    let (content, encoding) = decode(&bytes).map_err(|encoding| SourceError::Decode {
        path: path.to_path_buf(),
        encoding,
    })?;
    log::debug!(
        "read {} ({} bytes, decoded as {encoding})",
        path.display(),
        bytes.len()
    );
    Ok(SourceFile::new(path, content, encoding))
}

/// Decodes raw bytes using the sniffed encoding.
///
/// Returns the decoded text together with the name of the encoding actually
/// used, or `None` if the bytes contain malformed sequences for it.
pub fn decode_bytes(bytes: &[u8]) -> Option<(String, &'static str)> {
    decode(bytes).ok()
}

/// Decodes `bytes`, returning the name of the encoding used on failure.
fn decode(bytes: &[u8]) -> Result<(String, &'static str), &'static str> {
    let (text, used, had_errors) = guess_encoding(bytes).decode(bytes);
    if had_errors {
        return Err(used.name());
    }
    Ok((text.into_owned(), used.name()))
}

/// Runs the encoding detector over the whole input.
fn guess_encoding(bytes: &[u8]) -> &'static encoding_rs::Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}
