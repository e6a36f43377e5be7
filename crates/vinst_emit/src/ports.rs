//! Port block formatting.
//!
//! The declaration block declares one signal per port; the connection block
//! is the body of the instantiation's port list. [`PortEntry::Gap`] renders
//! as an empty line in both and is ignored when computing column widths.

use vinst_config::{InstanceConfig, TestbenchConfig};
use vinst_parser::{Direction, PortEntry, PortList};

/// How the declaration of a port of one direction is rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeclRule {
    /// Declaration keyword; `None` uses the direction keyword itself.
    pub keyword: Option<String>,
    /// Initial value appended as ` = value`.
    pub initial: Option<String>,
}

/// Declaration rules for each port direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeclStyle {
    input: DeclRule,
    output: DeclRule,
    inout: DeclRule,
}

impl DeclStyle {
    /// Declares every port with its own direction keyword, no initial value.
    ///
    /// The resulting block re-extracts to the original records.
    pub fn direction() -> Self {
        Self::default()
    }

    /// Declares every port with the same keyword (e.g. `wire`).
    pub fn uniform(keyword: &str) -> Self {
        let rule = DeclRule {
            keyword: Some(keyword.to_string()),
            initial: None,
        };
        Self {
            input: rule.clone(),
            output: rule.clone(),
            inout: rule,
        }
    }

    /// Builds the style an instance snippet uses.
    pub fn for_instance(config: &InstanceConfig) -> Self {
        match &config.port_keyword {
            Some(keyword) => Self::uniform(keyword),
            None => Self::direction(),
        }
    }

    /// Builds the testbench style: configured keywords per direction and an
    /// initial value on input-driving signals.
    pub fn testbench(config: &TestbenchConfig) -> Self {
        let initial = Some(config.input_default.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        Self {
            input: DeclRule {
                keyword: Some(config.input_type.clone()),
                initial,
            },
            output: DeclRule {
                keyword: Some(config.output_type.clone()),
                initial: None,
            },
            inout: DeclRule {
                keyword: Some(config.inout_type.clone()),
                initial: None,
            },
        }
    }

    /// Returns the rule for `direction`.
    pub fn rule(&self, direction: Direction) -> &DeclRule {
        match direction {
            Direction::Input => &self.input,
            Direction::Output => &self.output,
            Direction::Inout => &self.inout,
        }
    }
}

/// The two port blocks of a generated snippet.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PortBlocks {
    /// One declaration line per port.
    pub declarations: String,
    /// One `.name( name )` connection line per port.
    pub connections: String,
}

/// Formats both port blocks.
///
/// `min_column` is the floor for the width of the `.name` column.
pub fn format_ports(ports: &PortList, style: &DeclStyle, min_column: usize) -> PortBlocks {
    PortBlocks {
        declarations: format_declarations(ports, style),
        connections: format_connections(ports, min_column),
    }
}

/// Formats the testbench declaration block: per-direction keywords from
/// `config` and the configured initial value on input-driving signals.
pub fn format_ports_extended(ports: &PortList, config: &TestbenchConfig) -> String {
    format_declarations(ports, &DeclStyle::testbench(config))
}

/// Formats the declaration block: `<keyword padded to 4>  <range  ><name>[ = init];`.
pub fn format_declarations(ports: &PortList, style: &DeclStyle) -> String {
    ports
        .entries()
        .iter()
        .map(|entry| match entry {
            PortEntry::Port(port) => {
                let rule = style.rule(port.direction);
                let keyword = rule.keyword.as_deref().unwrap_or(port.direction.keyword());
                let range = if port.range.is_empty() {
                    String::new()
                } else {
                    format!("{}  ", port.range)
                };
                let initial = rule
                    .initial
                    .as_deref()
                    .map(|v| format!(" = {v}"))
                    .unwrap_or_default();
                format!("{keyword:<4}  {range}{}{initial};", port.name)
            }
            PortEntry::Gap => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats the connection block.
///
/// Each port renders as `    .<name>( <name> )<sep> // <direction><range>`,
/// where the inner name is padded to the longest name plus two, the outer
/// one to that or `min_column`, whichever is larger. Every line but the
/// last port's ends its connection with `,`.
pub fn format_connections(ports: &PortList, min_column: usize) -> String {
    let inner = ports.ports().map(|p| p.name.len()).max().unwrap_or(0) + 2;
    let outer = inner.max(min_column);
    let last = ports
        .entries()
        .iter()
        .rposition(|e| matches!(e, PortEntry::Port(_)));

    ports
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            PortEntry::Port(port) => {
                let sep = if Some(i) == last { ' ' } else { ',' };
                format!(
                    "    .{name:<outer$}( {name:<inner$} ){sep} // {}{}",
                    port.direction,
                    port.range,
                    name = port.name
                )
            }
            PortEntry::Gap => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
