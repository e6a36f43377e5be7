//! Conformance test helpers for vinst.
//!
//! Provides shared functions that run HDL source text through the full
//! pipeline (preprocess → extract → emit) and return structured results
//! for assertion in integration tests.

#![warn(missing_docs)]

use vinst_config::{InstanceConfig, TestbenchConfig};
use vinst_emit::DeclStyle;
use vinst_parser::{Direction, ModuleInterface, PortEntry, PortList};

/// Preprocesses and extracts the interface of the first module in `source`.
///
/// Panics if the source has no module; use the crates directly to test
/// error paths.
pub fn interface_of(source: &str) -> ModuleInterface {
    let text = vinst_source::strip(source).unwrap();
    vinst_parser::extract(&text).unwrap()
}

/// Runs the instance template with default settings.
pub fn instance_for(source: &str) -> String {
    instance_with(source, &InstanceConfig::default())
}

/// Runs the instance template with the given settings.
pub fn instance_with(source: &str, config: &InstanceConfig) -> String {
    vinst_emit::emit_instance(&interface_of(source), config)
}

/// Runs the testbench template with default settings.
pub fn testbench_for(source: &str) -> String {
    vinst_emit::emit_testbench(
        &interface_of(source),
        &TestbenchConfig::default(),
        &InstanceConfig::default(),
    )
    .unwrap()
}

/// A port list flattened for comparison: `Some((name, range, direction))`
/// per port, `None` per gap. Line numbers are dropped.
pub type PortShape = Vec<Option<(String, String, Direction)>>;

/// Flattens `ports` into a [`PortShape`].
pub fn shape(ports: &PortList) -> PortShape {
    ports
        .entries()
        .iter()
        .map(|entry| match entry {
            PortEntry::Port(p) => Some((p.name.clone(), p.range.clone(), p.direction)),
            PortEntry::Gap => None,
        })
        .collect()
}

/// Renders `ports` as a direction-keyword declaration block, wraps it in a
/// module and extracts the ports again.
pub fn reextract_declarations(ports: &PortList) -> PortList {
    let block = vinst_emit::format_declarations(ports, &DeclStyle::direction());
    let source = format!("module roundtrip;\n{block}\nendmodule\n");
    interface_of(&source).ports
}

/// Returns the `    .NAME ( ... )` binding lines of `text`, parameters
/// and ports alike.
pub fn binding_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| l.starts_with("    .")).collect()
}
