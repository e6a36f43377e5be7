//! Parameter block formatting.

use vinst_config::ParameterBinding;
use vinst_parser::ParameterPair;

/// The two parameter blocks of a generated snippet.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParameterBlocks {
    /// One `parameter NAME = DEFAULT;` line per parameter.
    pub declarations: String,
    /// The `#( ... )` argument list of the instantiation.
    pub arguments: String,
}

/// Formats parameters into a declaration block and an argument block.
///
/// Names are padded to one past the longest name, defaults to the longest
/// default. Both blocks are empty when `pairs` is empty.
pub fn format_parameters(pairs: &[ParameterPair], binding: ParameterBinding) -> ParameterBlocks {
    let Some(last) = pairs.len().checked_sub(1) else {
        return ParameterBlocks::default();
    };
    let name_width = pairs.iter().map(|p| p.name.len()).max().unwrap_or(0);
    let default_width = pairs.iter().map(|p| p.default.len()).max().unwrap_or(0);
    let name_col = name_width + 1;

    let declarations = pairs
        .iter()
        .map(|p| format!("parameter {:<name_col$} = {:<default_width$};", p.name, p.default))
        .collect::<Vec<_>>()
        .join("\n");

    let arguments = pairs
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let (bound, bound_width) = match binding {
                ParameterBinding::Value => (&p.default, default_width),
                ParameterBinding::Name => (&p.name, name_width),
            };
            let tail = if i == last { "   " } else { ",  " };
            format!(
                "    .{:<name_col$}( {:<bound_width$} ){tail}// {}",
                p.name, bound, p.default
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    ParameterBlocks {
        declarations,
        arguments: format!("#(\n{arguments}\n)"),
    }
}
