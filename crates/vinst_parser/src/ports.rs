//! Port declaration extraction.
//!
//! Each declaration follows the shape
//! `direction [net_type] [signed] {range} identifier {, identifier}` and
//! ends at the next direction keyword, `;`, or an unbalanced `)`.

use vinst_source::SourceText;

use crate::ast::{Direction, PortList, PortRecord};
use crate::scan::{find_keyword, Cursor};

/// Keywords that open a port declaration.
const DIRECTION_KEYWORDS: &[&str] = &["input", "output", "inout"];

/// Net and variable type keywords that may follow a direction.
const NET_TYPES: &[&str] = &["wire", "reg", "logic", "int", "integer", "real"];

/// Signedness qualifiers that may follow the net type.
const SIGNING: &[&str] = &["signed", "unsigned"];

/// One scanned declaration, before it is split into records.
struct Declaration {
    range: String,
    /// `(offset, name)` for each declared identifier.
    names: Vec<(usize, String)>,
    /// Offset of the terminator (not consumed).
    end: usize,
}

/// Extracts ports whose direction is in `directions`, in source order.
///
/// Declarations of other directions are still scanned so that they
/// terminate the neighbouring declarations correctly.
pub fn extract_ports(text: &SourceText, directions: &[Direction]) -> PortList {
    let src = text.as_str();
    let mut ports = PortList::new();
    let mut pos = 0;

    while let Some((start, keyword)) = find_keyword(src, pos, DIRECTION_KEYWORDS) {
        let Some(direction) = Direction::from_keyword(keyword) else {
            break;
        };
        let decl = scan_declaration(src, start + keyword.len());
        pos = decl.end;

        if !directions.contains(&direction) {
            continue;
        }
        for (offset, name) in decl.names {
            ports.push(PortRecord {
                name,
                range: decl.range.clone(),
                direction,
                line: text.line_of(offset),
            });
        }
    }

    log::debug!("found {} port(s)", ports.port_count());
    ports
}

/// Scans one declaration starting just after its direction keyword.
fn scan_declaration(src: &str, from: usize) -> Declaration {
    let mut cursor = Cursor::new(src, from);

    cursor.skip_whitespace();
    while cursor.eat_any_keyword(NET_TYPES) || cursor.eat_any_keyword(SIGNING) {
        cursor.skip_whitespace();
    }

    let range_start = cursor.pos();
    let mut range_end = range_start;
    while cursor.peek() == b'[' {
        cursor.skip_group();
        range_end = cursor.pos();
        cursor.skip_whitespace();
    }
    let range = src[range_start..range_end].trim().to_string();

    let mut names = Vec::new();
    let mut item_start = cursor.pos();
    loop {
        let at_direction = cursor
            .peek_identifier()
            .is_some_and(|ident| Direction::from_keyword(ident).is_some());
        let terminator = cursor.at_end() || at_direction || matches!(cursor.peek(), b';' | b')');
        if terminator || cursor.peek() == b',' {
            if let Some(item) = declared_name(src, item_start, cursor.pos()) {
                names.push(item);
            }
            if terminator {
                break;
            }
            cursor.advance();
            item_start = cursor.pos();
        } else {
            cursor.skip_atom();
        }
    }

    Declaration {
        range,
        names,
        end: cursor.pos(),
    }
}

/// Returns the declared identifier of one list item, dropping `= expr` and
/// unpacked dimensions (`mem [0:3]`).
fn declared_name(src: &str, start: usize, end: usize) -> Option<(usize, String)> {
    let item = &src[start..end];
    let name_part = item.split('=').next().unwrap_or(item);
    let name_part = name_part.split('[').next().unwrap_or(name_part);
    let name = name_part.trim();
    if name.is_empty() {
        return None;
    }
    let lead = name_part.len() - name_part.trim_start().len();
    Some((start + lead, name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::PortEntry;

    fn ports(src: &str) -> PortList {
        extract_ports(&SourceText::new(src.to_string()), &Direction::ALL)
    }

    fn summary(list: &PortList) -> Vec<(String, String, Direction)> {
        list.ports()
            .map(|p| (p.name.clone(), p.range.clone(), p.direction))
            .collect()
    }

    fn rec(name: &str, range: &str, dir: Direction) -> (String, String, Direction) {
        (name.to_string(), range.to_string(), dir)
    }

    #[test]
    fn ansi_header() {
        let src = " fifo_sc #(parameter W = 8) (input CLK, input RST_N, \
                   input [W-1:0] DIN, output [W-1:0] DOUT, output FULL);";
        assert_eq!(
            summary(&ports(src)),
            vec![
                rec("CLK", "", Direction::Input),
                rec("RST_N", "", Direction::Input),
                rec("DIN", "[W-1:0]", Direction::Input),
                rec("DOUT", "[W-1:0]", Direction::Output),
                rec("FULL", "", Direction::Output),
            ]
        );
    }

    #[test]
    fn multiple_identifiers_share_range_and_direction() {
        let list = ports(" m (input [3:0] A, B, C);");
        assert_eq!(
            summary(&list),
            vec![
                rec("A", "[3:0]", Direction::Input),
                rec("B", "[3:0]", Direction::Input),
                rec("C", "[3:0]", Direction::Input),
            ]
        );
        assert!(!list.entries().contains(&PortEntry::Gap));
    }

    #[test]
    fn net_types_and_signed_are_skipped() {
        let src = " m (input wire signed [7:0] a, output reg q, inout logic io, input integer n);";
        assert_eq!(
            summary(&ports(src)),
            vec![
                rec("a", "[7:0]", Direction::Input),
                rec("q", "", Direction::Output),
                rec("io", "", Direction::Inout),
                rec("n", "", Direction::Input),
            ]
        );
    }

    #[test]
    fn multi_dimensional_range_kept_verbatim() {
        let list = ports(" m (input logic [3:0][7:0] bytes);");
        assert_eq!(summary(&list), vec![rec("bytes", "[3:0][7:0]", Direction::Input)]);
    }

    #[test]
    fn range_expression_with_parens() {
        let list = ports(" m (output [$clog2(DEPTH)-1:0] count);");
        assert_eq!(
            summary(&list),
            vec![rec("count", "[$clog2(DEPTH)-1:0]", Direction::Output)]
        );
    }

    #[test]
    fn default_value_is_discarded() {
        let list = ports(" m (output reg [7:0] q = 8'h00, output wire v = f(a, b));");
        assert_eq!(
            summary(&list),
            vec![
                rec("q", "[7:0]", Direction::Output),
                rec("v", "", Direction::Output),
            ]
        );
    }

    #[test]
    fn non_ansi_body_declarations() {
        let src = " m (a, b, y);\n  input a, b;\n  output [1:0] y;\n  reg [1:0] y;\n";
        assert_eq!(
            summary(&ports(src)),
            vec![
                rec("a", "", Direction::Input),
                rec("b", "", Direction::Input),
                rec("y", "[1:0]", Direction::Output),
            ]
        );
    }

    #[test]
    fn gap_on_blank_line() {
        let src = " m (\n  input CLK,\n  input RST_N,\n\n  output [7:0] DOUT\n);";
        let list = ports(src);
        let kinds: Vec<bool> = list
            .entries()
            .iter()
            .map(|e| matches!(e, PortEntry::Gap))
            .collect();
        assert_eq!(kinds, vec![false, false, true, false]);
    }

    #[test]
    fn identifier_lines_are_recorded() {
        let src = " m (\n  input a,\n        b\n);";
        let lines: Vec<usize> = ports(src).ports().map(|p| p.line).collect();
        assert_eq!(lines, vec![1, 2]);
    }

    #[test]
    fn continued_declaration_does_not_gap() {
        let src = " m (\n  input [7:0] a,\n              b,\n  output c\n);";
        let list = ports(src);
        assert!(!list.entries().iter().any(|e| matches!(e, PortEntry::Gap)));
        assert_eq!(list.port_count(), 3);
    }

    #[test]
    fn keyword_prefixed_identifiers_are_not_ports() {
        let src = " m (input input_valid, output output_ready);\n  assign x = input_valid;\n";
        assert_eq!(
            summary(&ports(src)),
            vec![
                rec("input_valid", "", Direction::Input),
                rec("output_ready", "", Direction::Output),
            ]
        );
    }

    #[test]
    fn direction_filter() {
        let src = " m (input a, output b, inout c);";
        let list = extract_ports(&SourceText::new(src.to_string()), &[Direction::Output]);
        assert_eq!(summary(&list), vec![rec("b", "", Direction::Output)]);
    }

    #[test]
    fn no_ports() {
        assert!(ports(" m;\n  assign a = b;\n").is_empty());
    }

    #[test]
    fn quoted_keywords_are_not_ports() {
        let src = " m (input a, output y);\n initial $display(\"input value %d\", a);\n";
        assert_eq!(
            summary(&ports(src)),
            vec![rec("a", "", Direction::Input), rec("y", "", Direction::Output)]
        );
    }

    #[test]
    fn unpacked_dimensions_are_dropped() {
        let src = " m (input logic a [4], input [7:0] mem [0:3][0:1], output b);";
        assert_eq!(
            summary(&ports(src)),
            vec![
                rec("a", "", Direction::Input),
                rec("mem", "[7:0]", Direction::Input),
                rec("b", "", Direction::Output),
            ]
        );
    }
}
