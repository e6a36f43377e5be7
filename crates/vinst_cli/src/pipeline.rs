//! Shared pipeline helpers for CLI commands.
//!
//! Every command runs the same front half: resolve the configuration, load
//! and decode the file, preprocess it, and extract the module interface.

use std::path::{Path, PathBuf};

use vinst_config::ToolConfig;
use vinst_parser::ModuleInterface;

use crate::GlobalArgs;

/// Resolves the configuration path from global CLI args.
///
/// An explicit `--config` wins; otherwise walks up from the current
/// directory looking for `vinst.toml`.
pub fn resolve_config_path(global: &GlobalArgs) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    match &global.config {
        Some(path) => Ok(Some(path.clone())),
        None => Ok(vinst_config::find_config(&std::env::current_dir()?)),
    }
}

/// Loads the tool configuration, falling back to defaults when no
/// `vinst.toml` is found.
pub fn resolve_config(global: &GlobalArgs) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let config = match resolve_config_path(global)? {
        Some(path) => {
            log::debug!("using configuration {}", path.display());
            vinst_config::load_config(&path)?
        }
        None => {
            log::debug!("no {} found, using defaults", vinst_config::CONFIG_FILE_NAME);
            ToolConfig::default()
        }
    };
    Ok(config)
}

/// Loads `path` and extracts the interface of the first module in it.
pub fn load_interface(path: &Path) -> Result<ModuleInterface, Box<dyn std::error::Error>> {
    let file = vinst_source::load_file(path)?;
    log::debug!("read {} as {}", file.path.display(), file.encoding);
    interface_from_str(&file.content)
}

/// Extracts the interface of the first module in already-decoded text.
pub fn interface_from_str(content: &str) -> Result<ModuleInterface, Box<dyn std::error::Error>> {
    let text = vinst_source::strip(content)?;
    Ok(vinst_parser::extract(&text)?)
}
