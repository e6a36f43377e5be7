//! Module name extraction.

use crate::error::ExtractError;
use crate::scan::{identifiers, Cursor};

/// Lifetime qualifiers allowed between `module` and the name.
const LIFETIMES: &[&str] = &["automatic", "static"];

/// Returns the first identifier in the module region, skipping a lifetime
/// qualifier if present.
pub fn extract_name(text: &str) -> Result<String, ExtractError> {
    let mut cursor = Cursor::new(text, 0);
    cursor.skip_whitespace();
    cursor.eat_any_keyword(LIFETIMES);
    identifiers(&text[cursor.pos()..])
        .first()
        .map(|(_, name)| name.to_string())
        .ok_or(ExtractError::MissingModuleName)
}
