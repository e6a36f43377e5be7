//! Module boundary isolation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SourceError;

static MODULE_KW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bmodule\b").unwrap());
static ENDMODULE_KW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bendmodule\b").unwrap());

/// Returns the text strictly between the first `module` keyword and the
/// first `endmodule` keyword after it.
pub fn isolate_module(text: &str) -> Result<&str, SourceError> {
    let begin = MODULE_KW
        .find(text)
        .ok_or(SourceError::MissingModule)?
        .end();
    let end = ENDMODULE_KW
        .find_at(text, begin)
        .ok_or(SourceError::MissingEndmodule)?
        .start();
    Ok(&text[begin..end])
}
