//! Error types for declaration extraction.

/// Errors that can occur while extracting a module interface.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The module region contains no identifier to use as the module name.
    #[error("module name not found after `module` keyword")]
    MissingModuleName,
}
