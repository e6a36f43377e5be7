//! `vinst dump`: print the extracted module interface.

use std::fmt::Write as _;
use std::path::Path;

use vinst_parser::{ModuleInterface, PortEntry};

use crate::pipeline::load_interface;
use crate::{GlobalArgs, ReportFormat};

/// Runs the `vinst dump` command. Never touches the clipboard.
pub fn run(
    file: &Path,
    format: ReportFormat,
    global: &GlobalArgs,
) -> Result<i32, Box<dyn std::error::Error>> {
    let iface = load_interface(file)?;

    match format {
        ReportFormat::Text => {
            if !global.quiet {
                eprintln!("   Extracted {}", iface.name);
            }
            print!("{}", render_text(&iface));
        }
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&iface)?),
    }
    Ok(0)
}

/// Renders a plain listing: the name, one line per parameter, one line per
/// port, and `-` for each gap.
pub fn render_text(iface: &ModuleInterface) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "module {}", iface.name);
    for pair in iface.parameter_pairs() {
        let _ = writeln!(out, "  parameter {} = {}", pair.name, pair.default);
    }
    for entry in iface.ports.entries() {
        match entry {
            PortEntry::Port(port) => {
                let range = if port.range.is_empty() {
                    String::new()
                } else {
                    format!(" {}", port.range)
                };
                let _ = writeln!(
                    out,
                    "  {:<6}{range} {}  (line {})",
                    port.direction.keyword(),
                    port.name,
                    port.line + 1
                );
            }
            PortEntry::Gap => {
                let _ = writeln!(out, "  -");
            }
        }
    }
    out
}
