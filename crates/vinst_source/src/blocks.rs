//! Removal of `task` and `function` bodies.
//!
//! Behavioural subroutines may declare their own `input`/`output` arguments,
//! which would otherwise be picked up as module ports.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TASK_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\btask\b.*?\bendtask\b").unwrap());

static FUNCTION_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\bfunction\b.*?\bendfunction\b").unwrap());

/// Deletes every `task ... endtask` and `function ... endfunction` span.
///
/// Each span is replaced by the newlines it contained so later line numbers
/// are unchanged.
pub fn strip_blocks(text: &str) -> String {
    let text = TASK_BLOCK.replace_all(text, keep_newlines);
    FUNCTION_BLOCK.replace_all(&text, keep_newlines).into_owned()
}

fn keep_newlines(caps: &Captures) -> String {
    "\n".repeat(caps[0].matches('\n').count())
}
