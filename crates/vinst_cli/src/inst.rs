//! `vinst inst`: instance snippet for a module.

use std::path::Path;

use crate::pipeline::{load_interface, resolve_config};
use crate::{output, GlobalArgs};

/// Runs the `vinst inst` command.
pub fn run(file: &Path, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let iface = load_interface(file)?;

    if !global.quiet {
        eprintln!("   Generating instance of {}", iface.name);
    }

    let text = vinst_emit::emit_instance(&iface, &config.instance);
    output::deliver(&text, config.output.clipboard && !global.no_clipboard)?;
    Ok(0)
}
