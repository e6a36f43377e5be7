//! Error types for template emission.

/// Errors that can occur while emitting a template.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// A port-matching pattern could not be compiled.
    #[error("invalid {field} pattern: {source}")]
    InvalidPattern {
        /// The configuration field the pattern came from.
        field: &'static str,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}
