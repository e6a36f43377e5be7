//! Configuration file discovery, loading and validation.

use crate::error::ConfigError;
use crate::types::ToolConfig;
use regex::RegexBuilder;
use std::path::{Path, PathBuf};

/// The configuration file name searched for by [`find_config`].
pub const CONFIG_FILE_NAME: &str = "vinst.toml";

/// Walks up from `start` looking for the nearest `vinst.toml`.
///
/// Returns the path of the file, or `None` if no ancestor has one.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Loads and validates the configuration file at `path`.
pub fn load_config(path: &Path) -> Result<ToolConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loading configuration from {}", path.display());
    load_config_from_str(&content)
}

/// Parses and validates a `vinst.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ToolConfig, ConfigError> {
    let config: ToolConfig = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that values are usable by the generators.
fn validate_config(config: &ToolConfig) -> Result<(), ConfigError> {
    let tb = &config.testbench;
    if tb.clk_period == 0 {
        return Err(ConfigError::setting(
            "testbench.clk_period",
            "must be positive",
        ));
    }
    for (field, pattern) in [
        ("testbench.clock_pattern", &tb.clock_pattern),
        ("testbench.reset_pattern", &tb.reset_pattern),
    ] {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ConfigError::setting(field, e.to_string()))?;
    }
    for (field, value) in [
        ("instance.prefix", &config.instance.prefix),
        ("testbench.module_prefix", &tb.module_prefix),
        ("testbench.input_type", &tb.input_type),
        ("testbench.output_type", &tb.output_type),
        ("testbench.inout_type", &tb.inout_type),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::setting(field, "must not be empty"));
        }
    }
    if let Some(keyword) = &config.instance.port_keyword {
        if keyword.trim().is_empty() {
            return Err(ConfigError::setting(
                "instance.port_keyword",
                "must not be empty when set",
            ));
        }
    }
    Ok(())
}
