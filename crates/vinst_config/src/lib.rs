//! Parsing and validation of `vinst.toml` generator settings.
//!
//! The file is optional. Every field has a default, so an absent file and an
//! empty file both produce [`ToolConfig::default`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
