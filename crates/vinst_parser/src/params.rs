//! Parameter clause extraction.
//!
//! A clause starts at a standalone `parameter` keyword and runs to the first
//! `;` or `,` outside brackets, or to the `)` that closes the surrounding
//! `#( ... )` list. A `,` followed by `NAME =` continues the same
//! declaration with another clause (`parameter A = 1, B = 2`).

use vinst_source::SourceText;

use crate::ast::{ParameterDecl, ParameterPair};
use crate::scan::{find_keyword, identifiers, Cursor};

/// Keywords that can never start a continuation clause.
const CLAUSE_STOPWORDS: &[&str] = &["parameter", "localparam", "input", "output", "inout"];

/// How a clause ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClauseEnd {
    /// `;` or end of text.
    Statement,
    /// `,` outside brackets.
    Comma,
    /// The `)` closing the parameter port list.
    ListClose,
}

/// Extracts every parameter clause in source order.
pub fn extract_parameters(text: &SourceText) -> Vec<ParameterDecl> {
    let src = text.as_str();
    let mut decls = Vec::new();
    let mut pos = 0;

    while let Some((keyword_start, keyword)) = find_keyword(src, pos, &["parameter"]) {
        let mut start = keyword_start;
        let mut scan_from = keyword_start + keyword.len();
        loop {
            let (end, how) = clause_end(src, scan_from);
            decls.push(ParameterDecl {
                text: src[start..end].to_string(),
                line: text.line_of(start),
            });
            pos = end;
            match (how, continuation_at(src, end)) {
                (ClauseEnd::Comma, Some(next)) => {
                    start = next;
                    scan_from = next;
                }
                _ => break,
            }
        }
    }

    log::debug!("found {} parameter clause(s)", decls.len());
    decls
}

/// Scans forward from `from` to the end of one clause.
///
/// Returns the end offset (past a `;`/`,` terminator, before a closing `)`)
/// and how the clause ended.
fn clause_end(src: &str, from: usize) -> (usize, ClauseEnd) {
    let mut cursor = Cursor::new(src, from);
    while !cursor.at_end() {
        match cursor.peek() {
            b';' => return (cursor.pos() + 1, ClauseEnd::Statement),
            b',' => return (cursor.pos() + 1, ClauseEnd::Comma),
            b')' => return (cursor.pos(), ClauseEnd::ListClose),
            b']' | b'}' => cursor.advance(),
            _ => cursor.skip_atom(),
        }
    }
    (src.len(), ClauseEnd::Statement)
}

/// If the text after a comma is `NAME =`, returns the offset of `NAME`.
fn continuation_at(src: &str, after_comma: usize) -> Option<usize> {
    let mut cursor = Cursor::new(src, after_comma);
    cursor.skip_whitespace();
    let start = cursor.pos();
    let ident = cursor.peek_identifier()?;
    if CLAUSE_STOPWORDS.contains(&ident) {
        return None;
    }
    let rest = src[start + ident.len()..].trim_start();
    (rest.starts_with('=') && !rest.starts_with("==")).then_some(start)
}

impl ParameterDecl {
    /// Splits the clause into its name and default value.
    ///
    /// The name is the last identifier before the first `=` outside brackets
    /// (so type keywords and packed ranges are skipped); the default is the
    /// text after it, without the clause terminator. Returns `None` for a
    /// clause with no default.
    pub fn pair(&self) -> Option<ParameterPair> {
        let eq = assignment_offset(&self.text)?;
        let (_, name) = identifiers(&self.text[..eq])
            .into_iter()
            .rfind(|(_, ident)| *ident != "parameter")?;
        let default = self.text[eq + 1..]
            .trim()
            .trim_end_matches([';', ','])
            .trim_end();
        Some(ParameterPair::new(name, default))
    }
}

/// Finds the first `=` outside brackets and strings.
fn assignment_offset(text: &str) -> Option<usize> {
    let mut cursor = Cursor::new(text, 0);
    while !cursor.at_end() {
        if cursor.peek() == b'=' {
            return Some(cursor.pos());
        }
        cursor.skip_atom();
    }
    None
}
