//! Configuration types deserialized from `vinst.toml`.

use serde::Deserialize;

/// The top-level configuration parsed from `vinst.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Instance snippet settings (also used by the testbench's instance block).
    #[serde(default)]
    pub instance: InstanceConfig,
    /// Testbench wrapper settings.
    #[serde(default)]
    pub testbench: TestbenchConfig,
    /// Output sink settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings for the module instantiation block.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstanceConfig {
    /// Prefix prepended to the module name to form the instance name.
    pub prefix: String,
    /// Minimum width of the `.name` column in the port connection block.
    pub min_port_column: usize,
    /// What each `#( ... )` argument binds to.
    pub parameter_binding: ParameterBinding,
    /// Keyword used for every port declaration line. When unset, each line
    /// uses the port's own direction keyword.
    pub port_keyword: Option<String>,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            prefix: "u_".to_string(),
            min_port_column: 24,
            parameter_binding: ParameterBinding::Value,
            port_keyword: None,
        }
    }
}

/// The value bound to each parameter in the instantiation's `#( ... )` list.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParameterBinding {
    /// Bind the default value literally: `.WIDTH ( 8 )` (default).
    #[default]
    Value,
    /// Bind the locally declared parameter: `.WIDTH ( WIDTH )`.
    Name,
}

/// Settings for the generated testbench.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestbenchConfig {
    /// Argument of the `` `timescale `` directive.
    pub timescale: String,
    /// Prefix prepended to the module name to form the testbench module name.
    pub module_prefix: String,
    /// Value of the `CLK_PERIOD` parameter, in timescale units.
    pub clk_period: u32,
    /// Number of clock periods before reset is released.
    pub reset_cycles: u32,
    /// Case-insensitive pattern that identifies the clock input.
    pub clock_pattern: String,
    /// Case-insensitive pattern that identifies the reset input.
    pub reset_pattern: String,
    /// Declaration keyword for signals driving module inputs.
    pub input_type: String,
    /// Declaration keyword for signals driven by module outputs.
    pub output_type: String,
    /// Declaration keyword for signals connected to inouts.
    pub inout_type: String,
    /// Initial value for input-driving signals; empty for none.
    pub input_default: String,
}

impl Default for TestbenchConfig {
    fn default() -> Self {
        Self {
            timescale: "1ns / 1ps".to_string(),
            module_prefix: "tb_".to_string(),
            clk_period: 10,
            reset_cycles: 2,
            clock_pattern: "clk|clock".to_string(),
            reset_pattern: "rst|reset".to_string(),
            input_type: "reg".to_string(),
            output_type: "wire".to_string(),
            inout_type: "wire".to_string(),
            input_default: "0".to_string(),
        }
    }
}

/// Settings for where generated text goes besides stdout.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Copy the generated text to the system clipboard.
    pub clipboard: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { clipboard: true }
    }
}
