/// Single-line C function signature heuristic.
///
/// A definition line looks like `[static ]<type>[ *]<name>(<args>)[ {]` with
/// nothing after the optional brace. The argument list may not contain
/// parentheses, so function pointers and macro-generated definitions are
/// not recognized.
use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)] // Static regex pattern is hardcoded and valid
static SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(static\s+)?(\w+\s+\*?)(\w+)\s*\([^)]*\)\s*\{?$").unwrap()
});

/// Return the function name if `trimmed` looks like a function definition line.
/// Lines starting with `typedef` never match.
pub fn function_name(trimmed: &str) -> Option<&str> {
    if trimmed.starts_with("typedef") {
        return None;
    }
    SIGNATURE
        .captures(trimmed)
        .and_then(|caps| caps.get(3))
        .map(|m| m.as_str())
}

#[cfg(test)]
#[path = "signature_test.rs"]
mod tests;
