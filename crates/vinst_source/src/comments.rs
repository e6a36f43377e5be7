//! Comment removal that respects string literals and protected regions.
//!
//! Line comments (`// ...`) are removed up to, but not including, the
//! newline. Block comments (`/* ... */`, non-nesting) are replaced by the
//! newlines they contained, or by one space when they contained none, so
//! line numbers are preserved and no new comment delimiter can be formed by
//! joining the surrounding text. String literals and
//! `` `pragma protect begin_protected `` regions are copied verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

static PROTECT_BEGIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^`pragma\s+protect\s+begin_protected\b").unwrap());

static PROTECT_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`pragma\s+protect\s+end_protected\b").unwrap());

/// Removes line and block comments from `text`.
///
/// Idempotent: `strip_comments(&strip_comments(x)) == strip_comments(x)`.
pub fn strip_comments(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied_from = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'"' => pos = skip_string(bytes, pos),
            b'`' if PROTECT_BEGIN.is_match(&text[pos..]) => pos = skip_protected(text, pos),
            b'/' if peek_at(bytes, pos + 1) == b'/' => {
                out.push_str(&text[copied_from..pos]);
                let end = text[pos..].find('\n').map_or(text.len(), |i| pos + i);
                pos = end;
                copied_from = end;
            }
            b'/' if peek_at(bytes, pos + 1) == b'*' => match text[pos + 2..].find("*/") {
                Some(i) => {
                    let end = pos + 2 + i + 2;
                    out.push_str(&text[copied_from..pos]);
                    let newlines = text[pos..end].matches('\n').count();
                    if newlines == 0 {
                        out.push(' ');
                    } else {
                        out.extend(std::iter::repeat('\n').take(newlines));
                    }
                    pos = end;
                    copied_from = end;
                }
                // Unterminated: not a comment, keep scanning.
                None => pos += 1,
            },
            _ => pos += 1,
        }
    }

    out.push_str(&text[copied_from..]);
    out
}

fn peek_at(bytes: &[u8], pos: usize) -> u8 {
    bytes.get(pos).copied().unwrap_or(0)
}

/// Skips a string literal starting at the opening quote.
///
/// Returns the offset just past the closing quote. An unterminated quote is
/// treated as an ordinary character.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'"' => return pos + 1,
            _ => pos += 1,
        }
    }
    start + 1
}

/// Skips a vendor-encrypted region through its `end_protected` pragma.
fn skip_protected(text: &str, start: usize) -> usize {
    match PROTECT_END.find(&text[start..]) {
        Some(m) => start + m.end(),
        None => text.len(),
    }
}
