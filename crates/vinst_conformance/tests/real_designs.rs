//! Realistic module headers in the styles found in the wild.

use vinst_conformance::{instance_for, interface_of, shape, testbench_for};
use vinst_parser::Direction;

fn port(name: &str, range: &str, dir: Direction) -> Option<(String, String, Direction)> {
    Some((name.to_string(), range.to_string(), dir))
}

#[test]
fn verilog_1995_counter() {
    let src = r#"
module counter (clk, rst, en, count);
  parameter WIDTH = 4;
  input clk;
  input rst;
  input en;
  output [WIDTH-1:0] count;
  reg [WIDTH-1:0] count;

  always @(posedge clk)
    if (rst) count <= 0;
    else if (en) count <= count + 1;
endmodule
"#;
    let iface = interface_of(src);
    assert_eq!(iface.name, "counter");
    assert_eq!(
        shape(&iface.ports),
        vec![
            port("clk", "", Direction::Input),
            port("rst", "", Direction::Input),
            port("en", "", Direction::Input),
            port("count", "[WIDTH-1:0]", Direction::Output),
        ]
    );
    let pairs = iface.parameter_pairs();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].name, "WIDTH");
    assert_eq!(pairs[0].default, "4");
}

#[test]
fn systemverilog_typed_parameters() {
    let src = r#"
module automatic sync_fifo #(
  parameter int unsigned DEPTH = 16,
  parameter logic [7:0]  INIT  = 8'hFF,
  parameter              NAME  = "fifo"
) (
  input  logic              clk_i,
  input  logic              rst_ni,
  input  logic              push_i,
  input  logic [7:0]        data_i,
  output logic              full_o,
  output logic [$clog2(DEPTH):0] usage_o
);
endmodule
"#;
    let iface = interface_of(src);
    assert_eq!(iface.name, "sync_fifo");
    let pairs: Vec<(String, String)> = iface
        .parameter_pairs()
        .into_iter()
        .map(|p| (p.name, p.default))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("DEPTH".to_string(), "16".to_string()),
            ("INIT".to_string(), "8'hFF".to_string()),
            ("NAME".to_string(), "\"fifo\"".to_string()),
        ]
    );
    let usage = iface.ports.ports().last().unwrap();
    assert_eq!(usage.name, "usage_o");
    assert_eq!(usage.range, "[$clog2(DEPTH):0]");
    assert_eq!(usage.direction, Direction::Output);
}

#[test]
fn continued_parameter_declaration() {
    let iface = interface_of(
        "module pwm #(parameter PERIOD = 100, DUTY = 50) (input clk, output out);\nendmodule",
    );
    let names: Vec<String> = iface.parameter_pairs().into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["PERIOD", "DUTY"]);
    let out = instance_for(
        "module pwm #(parameter PERIOD = 100, DUTY = 50) (input clk, output out);\nendmodule",
    );
    assert!(out.contains("    .PERIOD ( 100 ),  // 100\n    .DUTY   ( 50  )   // 50\n"));
}

#[test]
fn localparam_is_not_exposed() {
    let iface = interface_of(
        "module m #(parameter N = 8) (input [N-1:0] d);\n  localparam HALF = N / 2;\nendmodule",
    );
    assert_eq!(iface.parameter_pairs().len(), 1);
}

#[test]
fn identifiers_containing_direction_words() {
    let iface = interface_of(
        "module m (\n  input input_valid,\n  output output_ready,\n  inout inout_pin\n);\nendmodule",
    );
    assert_eq!(
        shape(&iface.ports),
        vec![
            port("input_valid", "", Direction::Input),
            port("output_ready", "", Direction::Output),
            port("inout_pin", "", Direction::Inout),
        ]
    );
}

#[test]
fn only_first_module_in_file() {
    let src = "module first (input a);\nendmodule\n\nmodule second (input b, output c);\nendmodule\n";
    let iface = interface_of(src);
    assert_eq!(iface.name, "first");
    assert_eq!(iface.ports.port_count(), 1);
}

#[test]
fn mixed_ansi_testbench() {
    let src = r#"
module axis_skid #(parameter DW = 32) (
  input  wire          aclk,
  input  wire          aresetn,

  input  wire [DW-1:0] s_tdata,
  input  wire          s_tvalid,
  output wire          s_tready,

  output reg  [DW-1:0] m_tdata,
  output reg           m_tvalid,
  input  wire          m_tready
);
endmodule
"#;
    let out = testbench_for(src);
    assert!(out.contains("  initial forever #(CLK_PERIOD/2) aclk = ~aclk;\n"));
    assert!(out.contains("  initial #(CLK_PERIOD*2) aresetn = 1;\n"));
    // Two gaps in the header, two blank lines in each port block.
    let start = out.find("u_axis_skid (\n").unwrap();
    let body = &out[start..];
    let end = body.find("\n);").unwrap();
    assert_eq!(body[..end].matches("\n\n").count(), 2);
}
