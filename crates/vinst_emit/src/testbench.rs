//! Testbench template.

use regex::{Regex, RegexBuilder};
use vinst_config::{InstanceConfig, TestbenchConfig};
use vinst_parser::{Direction, ModuleInterface, PortList, PortRecord};

use crate::error::EmitError;
use crate::instance::instantiation;
use crate::params::format_parameters;
use crate::ports::{format_connections, format_ports_extended};

/// Emits a testbench module wrapping `iface`.
///
/// The clock driver and reset pulse are emitted only when an input port
/// matches the configured clock or reset pattern; otherwise the statement is
/// left out.
pub fn emit_testbench(
    iface: &ModuleInterface,
    tb: &TestbenchConfig,
    inst: &InstanceConfig,
) -> Result<String, EmitError> {
    let name = &iface.name;
    let clock_re = compile_pattern("clock", &tb.clock_pattern)?;
    let reset_re = compile_pattern("reset", &tb.reset_pattern)?;

    let params = format_parameters(&iface.parameter_pairs(), inst.parameter_binding);
    let declarations = format_ports_extended(&iface.ports, tb);
    let connections = format_connections(&iface.ports, inst.min_port_column);

    let mut out = String::new();
    out.push_str(&format!("`timescale  {}\n\n", tb.timescale));
    out.push_str(&format!("module {}{name};\n\n", tb.module_prefix));
    out.push_str(&format!("  parameter CLK_PERIOD = {};\n\n", tb.clk_period));

    if !params.declarations.is_empty() {
        out.push_str(&format!("// {name} Parameters\n{}\n\n", params.declarations));
    }
    out.push_str(&format!("// {name} ports\n{declarations}\n\n"));

    let clock = find_port(&iface.ports, Direction::Input, &clock_re);
    let reset = find_port(&iface.ports, Direction::Input, &reset_re);
    if let Some(clk) = clock {
        log::debug!("driving `{}` as the clock", clk.name);
        out.push_str(&format!(
            "  initial forever #(CLK_PERIOD/2) {0} = ~{0};\n",
            clk.name
        ));
    }
    if let Some(rst) = reset {
        log::debug!("pulsing `{}` as the reset", rst.name);
        out.push_str(&format!(
            "  initial #(CLK_PERIOD*{}) {} = 1;\n",
            tb.reset_cycles, rst.name
        ));
    }
    if clock.is_some() || reset.is_some() {
        out.push('\n');
    }

    out.push_str(&instantiation(
        name,
        &params.arguments,
        &connections,
        &inst.prefix,
    ));
    out.push_str("\n\n  initial begin\n      $stop(0);\n  end\n\nendmodule\n");
    Ok(out)
}

/// Returns the first port of `direction` whose name matches `pattern`.
pub fn find_port<'a>(
    ports: &'a PortList,
    direction: Direction,
    pattern: &Regex,
) -> Option<&'a PortRecord> {
    ports
        .ports()
        .find(|p| p.direction == direction && pattern.is_match(&p.name))
}

fn compile_pattern(field: &'static str, pattern: &str) -> Result<Regex, EmitError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| EmitError::InvalidPattern { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interface(source: &str) -> ModuleInterface {
        let text = vinst_source::strip(source).unwrap();
        vinst_parser::extract(&text).unwrap()
    }

    fn testbench(source: &str) -> String {
        emit_testbench(
            &interface(source),
            &TestbenchConfig::default(),
            &InstanceConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn full_layout() {
        let out = testbench(
            "module cnt #(parameter W = 4)(\n  input clk,\n  input rst_n,\n  output [W-1:0] q\n);\nendmodule",
        );
        let expected = "`timescale  1ns / 1ps\n\
\n\
module tb_cnt;\n\
\n\
\x20 parameter CLK_PERIOD = 10;\n\
\n\
// cnt Parameters\n\
parameter W  = 4;\n\
\n\
// cnt ports\n\
reg   clk = 0;\n\
reg   rst_n = 0;\n\
wire  [W-1:0]  q;\n\
\n\
\x20 initial forever #(CLK_PERIOD/2) clk = ~clk;\n\
\x20 initial #(CLK_PERIOD*2) rst_n = 1;\n\
\n\
cnt #(\n\
\x20   .W ( 4 )   // 4\n\
)  u_cnt (\n\
\x20   .clk                     ( clk     ), // input\n\
\x20   .rst_n                   ( rst_n   ), // input\n\
\x20   .q                       ( q       )  // output[W-1:0]\n\
);\n\
\n\
\x20 initial begin\n\
\x20     $stop(0);\n\
\x20 end\n\
\n\
endmodule\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn clock_and_reset_detection_is_case_insensitive() {
        let out = testbench("module m(input SYS_CLOCK, input Reset_N, output d);\nendmodule");
        assert!(out.contains("initial forever #(CLK_PERIOD/2) SYS_CLOCK = ~SYS_CLOCK;"));
        assert!(out.contains("initial #(CLK_PERIOD*2) Reset_N = 1;"));
    }

    #[test]
    fn only_inputs_are_drivers() {
        let out = testbench("module m(output clk_out, output rst_done, input d);\nendmodule");
        assert!(!out.contains("initial forever"));
        assert!(!out.contains("CLK_PERIOD*"));
    }

    #[test]
    fn first_match_wins() {
        let out = testbench("module m(input clk_a, input clk_b);\nendmodule");
        assert!(out.contains("clk_a = ~clk_a;"));
        assert!(!out.contains("clk_b = ~clk_b;"));
    }

    #[test]
    fn no_parameters_section_without_parameters() {
        let out = testbench("module m(input a);\nendmodule");
        assert!(!out.contains("Parameters"));
        assert!(!out.contains("#(\n"));
        assert!(out.contains("m u_m (\n"));
    }

    #[test]
    fn configured_names_and_period() {
        let tb = TestbenchConfig {
            module_prefix: "test_".to_string(),
            clk_period: 8,
            reset_cycles: 5,
            clock_pattern: "aclk".to_string(),
            reset_pattern: "aresetn".to_string(),
            ..TestbenchConfig::default()
        };
        let iface = interface("module axi(input ACLK, input ARESETN, input clk);\nendmodule");
        let out = emit_testbench(&iface, &tb, &InstanceConfig::default()).unwrap();
        assert!(out.contains("module test_axi;"));
        assert!(out.contains("parameter CLK_PERIOD = 8;"));
        assert!(out.contains("ACLK = ~ACLK;"));
        assert!(out.contains("initial #(CLK_PERIOD*5) ARESETN = 1;"));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let tb = TestbenchConfig {
            reset_pattern: "rst(".to_string(),
            ..TestbenchConfig::default()
        };
        let iface = interface("module m(input a);\nendmodule");
        let err = emit_testbench(&iface, &tb, &InstanceConfig::default()).unwrap_err();
        assert!(matches!(err, EmitError::InvalidPattern { field: "reset", .. }));
    }
}
