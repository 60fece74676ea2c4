/// CLI argument definitions for the `longfn` command.
use std::path::PathBuf;

use clap::Parser;

/// Printed when no directory is given.
pub const USAGE: &str = "Usage: longfn <src_directory>";

#[derive(Parser)]
#[command(
    name = "longfn",
    version,
    about = "Report the longest C functions in a source tree",
    long_about = "\
Report the longest C functions in a source tree.

Every .c file under the directory is scanned with a line-oriented heuristic:
a definition is a single line shaped like `[static] <type> <name>(<args>) [{]`,
and the function ends where its brace depth returns to zero. The five longest
functions are listed. The command exits with status 1 if any function is
longer than 150 lines, so it can gate a build."
)]
pub struct Cli {
    /// Directory to scan recursively for .c files
    pub path: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
