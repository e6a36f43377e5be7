//! Instance-only template.

use vinst_config::InstanceConfig;
use vinst_parser::ModuleInterface;

use crate::params::format_parameters;
use crate::ports::{format_ports, DeclStyle};

/// Emits the parameter declarations, port declarations and instantiation
/// block for `iface`.
///
/// The `// <name> Parameters` section is omitted when the module has no
/// parameters.
pub fn emit_instance(iface: &ModuleInterface, config: &InstanceConfig) -> String {
    let name = &iface.name;
    let params = format_parameters(&iface.parameter_pairs(), config.parameter_binding);
    let ports = format_ports(
        &iface.ports,
        &DeclStyle::for_instance(config),
        config.min_port_column,
    );

    let mut out = String::new();
    if !params.declarations.is_empty() {
        out.push_str(&format!("// {name} Parameters\n{}\n", params.declarations));
    }
    out.push_str(&format!("//---- {name} ports ----\n{}\n", ports.declarations));
    out.push_str(&instantiation(
        name,
        &params.arguments,
        &ports.connections,
        &config.prefix,
    ));
    out
}

/// Renders `<name> #( ... )  <prefix><name> (\n<connections>\n);`.
///
/// Without arguments the `#( ... )` clause is left out entirely.
pub fn instantiation(name: &str, arguments: &str, connections: &str, prefix: &str) -> String {
    if arguments.is_empty() {
        format!("{name} {prefix}{name} (\n{connections}\n);")
    } else {
        format!("{name} {arguments}  {prefix}{name} (\n{connections}\n);")
    }
}
