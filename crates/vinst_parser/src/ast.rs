//! Interface data model produced by the declaration extractor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Port direction keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `input`
    Input,
    /// `output`
    Output,
    /// `inout`
    Inout,
}

impl Direction {
    /// All directions, in the order declarations are scanned for.
    pub const ALL: [Direction; 3] = [Direction::Input, Direction::Output, Direction::Inout];

    /// Returns the lower-case keyword for this direction.
    pub fn keyword(self) -> &'static str {
        match self {
            Direction::Input => "input",
            Direction::Output => "output",
            Direction::Inout => "inout",
        }
    }

    /// Parses a direction keyword. Matching is case-sensitive, as in the language.
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "input" => Some(Direction::Input),
            "output" => Some(Direction::Output),
            "inout" => Some(Direction::Inout),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One declared port.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRecord {
    /// The port identifier.
    pub name: String,
    /// The bit-range text exactly as written (e.g. `[DATA_WIDTH-1:0]`), or empty.
    pub range: String,
    /// The port direction.
    pub direction: Direction,
    /// 0-indexed line of the identifier within the module region.
    pub line: usize,
}

impl PortRecord {
    /// Creates a port record.
    pub fn new(
        name: impl Into<String>,
        range: impl Into<String>,
        direction: Direction,
        line: usize,
    ) -> Self {
        Self {
            name: name.into(),
            range: range.into(),
            direction,
            line,
        }
    }
}

/// An entry in the ordered port list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PortEntry {
    /// A declared port.
    Port(PortRecord),
    /// A visual gap: the source skipped at least one line between two
    /// declarations. Rendered as one blank line.
    Gap,
}

impl PortEntry {
    /// Returns the port record, or `None` for a gap.
    pub fn as_port(&self) -> Option<&PortRecord> {
        match self {
            PortEntry::Port(p) => Some(p),
            PortEntry::Gap => None,
        }
    }
}

/// Ports in source declaration order, with gap markers.
///
/// A [`PortEntry::Gap`] is inserted before a record whose line is more than
/// one past the previous record's line. Records on the same or the next line
/// never produce a gap, and a list never starts with one.
///
/// The line compared is the identifier's own line, not the line of its
/// `input`/`output`/`inout` keyword. A declaration that continues its
/// identifiers over several lines therefore counts as one line per name:
/// `input [7:0] a,\n b,\n output c` has no gap before `c`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortList {
    entries: Vec<PortEntry>,
}

impl PortList {
    /// Creates an empty port list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a port, inserting a gap first if the source skipped lines.
    ///
    /// Gaps are keyed on [`PortRecord::line`], the identifier's line.
    pub fn push(&mut self, record: PortRecord) {
        let skipped_lines = self
            .ports()
            .last()
            .is_some_and(|prev| record.line > prev.line + 1);
        if skipped_lines {
            self.entries.push(PortEntry::Gap);
        }
        self.entries.push(PortEntry::Port(record));
    }

    /// Returns all entries, gaps included.
    pub fn entries(&self) -> &[PortEntry] {
        &self.entries
    }

    /// Iterates over the declared ports only.
    pub fn ports(&self) -> impl DoubleEndedIterator<Item = &PortRecord> {
        self.entries.iter().filter_map(PortEntry::as_port)
    }

    /// Returns the number of declared ports (gaps excluded).
    pub fn port_count(&self) -> usize {
        self.ports().count()
    }

    /// Returns `true` if no ports were declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<PortRecord> for PortList {
    fn from_iter<I: IntoIterator<Item = PortRecord>>(iter: I) -> Self {
        let mut list = PortList::new();
        for record in iter {
            list.push(record);
        }
        list
    }
}

/// One raw `parameter NAME = DEFAULT` clause, as written in the source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDecl {
    /// The clause text, including its `;`/`,` terminator when it had one.
    pub text: String,
    /// 0-indexed line where the clause starts.
    pub line: usize,
}

/// A parameter name and its default value text, both trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterPair {
    /// The parameter identifier.
    pub name: String,
    /// The default value expression text.
    pub default: String,
}

impl ParameterPair {
    /// Creates a parameter pair, trimming both fields.
    pub fn new(name: &str, default: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            default: default.trim().to_string(),
        }
    }
}

/// Everything extracted from one module definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInterface {
    /// The module name.
    pub name: String,
    /// Parameter clauses in source order.
    pub parameters: Vec<ParameterDecl>,
    /// Ports in source order, with gap markers.
    pub ports: PortList,
}

impl ModuleInterface {
    /// Returns the `(name, default)` pairs of all parameters that have a default.
    pub fn parameter_pairs(&self) -> Vec<ParameterPair> {
        self.parameters.iter().filter_map(ParameterDecl::pair).collect()
    }
}
