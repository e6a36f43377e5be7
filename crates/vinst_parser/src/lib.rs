//! Declaration extraction for HDL module headers.
//!
//! Scans a preprocessed module region (see [`vinst_source::strip`]) for the
//! module name, its `parameter` clauses and its `input`/`output`/`inout`
//! declarations, producing a [`ModuleInterface`].
//!
//! # Architecture
//!
//! - **Name** ([`name`]): first identifier in the region.
//! - **Parameters** ([`params`]): keyword-anchored clauses, bracket-balanced.
//! - **Ports** ([`ports`]): keyword-anchored declarations split into
//!   [`PortRecord`]s, with [`PortEntry::Gap`] markers where the source
//!   skipped lines.

#![warn(missing_docs)]

/// Interface data model types.
pub mod ast;
/// Error types for extraction.
pub mod error;
/// Module name extraction.
pub mod name;
/// Parameter clause extraction.
pub mod params;
/// Port declaration extraction.
pub mod ports;
mod scan;

pub use ast::{
    Direction, ModuleInterface, ParameterDecl, ParameterPair, PortEntry, PortList, PortRecord,
};
pub use error::ExtractError;
pub use name::extract_name;
pub use params::extract_parameters;
pub use ports::extract_ports;

use vinst_source::SourceText;

/// Extracts the name, parameters and ports of a preprocessed module region.
pub fn extract(text: &SourceText) -> Result<ModuleInterface, ExtractError> {
    let name = extract_name(text.as_str())?;
    let parameters = extract_parameters(text);
    let ports = extract_ports(text, &Direction::ALL);
    log::debug!(
        "module `{name}`: {} parameter(s), {} port(s)",
        parameters.len(),
        ports.port_count()
    );
    Ok(ModuleInterface {
        name,
        parameters,
        ports,
    })
}
