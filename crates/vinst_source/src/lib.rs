//! Source acquisition and preprocessing for module introspection.
//!
//! This crate loads an HDL file from disk (sniffing its character encoding),
//! and reduces the decoded text to a [`SourceText`]: comments removed,
//! `task`/`function` bodies removed, and only the region between `module`
//! and `endmodule` retained.

#![warn(missing_docs)]

pub mod blocks;
pub mod boundary;
pub mod comments;
pub mod error;
pub mod loader;
pub mod source_file;
pub mod source_text;

pub use blocks::strip_blocks;
pub use boundary::isolate_module;
pub use comments::strip_comments;
pub use error::SourceError;
pub use loader::{decode_bytes, load_file};
pub use source_file::SourceFile;
pub use source_text::SourceText;

/// Runs the full preprocessing pipeline over raw decoded source text.
///
/// Strips comments, then task/function bodies, then isolates the first
/// `module ... endmodule` region.
pub fn strip(raw: &str) -> Result<SourceText, SourceError> {
    let uncommented = strip_comments(raw);
    let unblocked = strip_blocks(&uncommented);
    let module = isolate_module(&unblocked)?;
    log::debug!(
        "preprocessed {} bytes down to a {}-byte module region",
        raw.len(),
        module.len()
    );
    Ok(SourceText::new(module.to_string()))
}
