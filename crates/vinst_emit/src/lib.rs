//! Text generation from an extracted [`ModuleInterface`](vinst_parser::ModuleInterface).
//!
//! The formatter ([`params`], [`ports`]) turns parameters and ports into
//! column-aligned blocks; the templates ([`instance`], [`testbench`]) stitch
//! those blocks into a complete snippet.

#![warn(missing_docs)]

pub mod error;
pub mod instance;
pub mod params;
pub mod ports;
pub mod testbench;

pub use error::EmitError;
pub use instance::{emit_instance, instantiation};
pub use params::{format_parameters, ParameterBlocks};
pub use ports::{
    format_connections, format_declarations, format_ports, format_ports_extended, DeclRule,
    DeclStyle, PortBlocks,
};
pub use testbench::{emit_testbench, find_port};
