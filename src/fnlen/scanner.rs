/// Brace-depth function scanner.
///
/// Walks a file's lines once, opening a function on a signature line and
/// closing it on the line where the running brace depth returns to zero.
/// Blank lines, `//` comments and preprocessor lines are skipped before any
/// brace counting, so braces on them never count, even inside a body.
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::signature::function_name;

#[allow(clippy::unwrap_used)] // Static regex pattern is hardcoded and valid
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// One detected function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    pub name: String,
    /// 1-based line of the signature.
    pub start_line: usize,
    /// Lines from the signature through the closing brace, inclusive.
    pub length: usize,
    pub source_path: PathBuf,
}

/// A function whose signature has been seen but whose body is still open.
#[derive(Debug)]
struct OpenFunction {
    name: String,
    start_line: usize,
    depth: isize,
}

/// Per-file scanner state. Each scan owns a fresh instance.
#[derive(Debug, Default)]
struct ScanState {
    open: Option<OpenFunction>,
}

impl ScanState {
    /// Feed one trimmed, non-skipped line. Returns `(name, start_line, length)`
    /// when this line closes the open function.
    fn feed(&mut self, line_no: usize, trimmed: &str) -> Option<(String, usize, usize)> {
        if self.open.is_none() {
            self.open = function_name(trimmed).map(|name| OpenFunction {
                name: name.to_string(),
                start_line: line_no,
                depth: brace_delta(trimmed),
            });
            return None;
        }

        let open = self.open.as_mut()?;
        open.depth += brace_delta(trimmed);
        if open.depth != 0 {
            return None;
        }

        let closed = self.open.take()?;
        Some((
            closed.name,
            closed.start_line,
            line_no - closed.start_line + 1,
        ))
    }
}

/// Net change in brace depth contributed by a line.
fn brace_delta(line: &str) -> isize {
    let opens = line.matches('{').count() as isize;
    let closes = line.matches('}').count() as isize;
    opens - closes
}

/// Lines that never start or end a function and never contribute braces.
fn is_skipped(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with('#')
}

/// Split file content into lines, treating `\r\n`, a lone `\r` and `\n`
/// all as line breaks.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK.split(content)
}

/// Scan one file's lines and return every function whose body closes.
/// A function still open at end of input is dropped.
pub fn scan<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    source_path: &Path,
) -> Vec<FunctionRecord> {
    let mut state = ScanState::default();
    let mut records = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let trimmed = line.trim();
        if is_skipped(trimmed) {
            continue;
        }

        if let Some((name, start_line, length)) = state.feed(idx + 1, trimmed) {
            records.push(FunctionRecord {
                name,
                start_line,
                length,
                source_path: source_path.to_path_buf(),
            });
        }
    }

    records
}

#[cfg(test)]
#[path = "scanner_test.rs"]
mod tests;
