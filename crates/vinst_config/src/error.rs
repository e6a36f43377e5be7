//! What can go wrong with a `vinst.toml`.

use std::path::PathBuf;

/// A `vinst.toml` that could not be turned into a [`crate::ToolConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists (or was named) but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// The settings file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Not valid TOML, or a key the generators do not know.
    #[error("invalid vinst.toml: {0}")]
    Syntax(#[from] toml::de::Error),

    /// A setting parsed but cannot be used.
    #[error("bad setting `{field}`: {reason}")]
    Setting {
        /// Dotted key, e.g. `testbench.clk_period`.
        field: &'static str,
        /// What is wrong with the value.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn setting(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Setting {
            field,
            reason: reason.into(),
        }
    }
}
