//! `vinst tb`: testbench wrapper for a module.

use std::path::Path;

use crate::pipeline::{load_interface, resolve_config};
use crate::{output, GlobalArgs};

/// Runs the `vinst tb` command.
pub fn run(file: &Path, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let iface = load_interface(file)?;

    if !global.quiet {
        eprintln!(
            "   Generating testbench {}{}",
            config.testbench.module_prefix, iface.name
        );
    }

    let text = vinst_emit::emit_testbench(&iface, &config.testbench, &config.instance)?;
    output::deliver(&text, config.output.clipboard && !global.no_clipboard)?;
    Ok(0)
}
