//! Error types for source loading and preprocessing.

use std::path::PathBuf;

/// Errors that can occur while loading or preprocessing a source file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// An I/O error occurred while reading the source file.
    #[error("failed to read source file: {0}")]
    Io(#[from] std::io::Error),

    /// The file bytes are not valid in the encoding the detector chose.
    #[error("failed to decode {} as {encoding}", path.display())]
    Decode {
        /// The file that failed to decode.
        path: PathBuf,
        /// The encoding the detector guessed.
        encoding: &'static str,
    },

    /// No standalone `module` keyword was found.
    #[error("no `module` keyword found")]
    MissingModule,

    /// A `module` keyword was found but no `endmodule` follows it.
    #[error("no `endmodule` keyword found after `module`")]
    MissingEndmodule,
}
