mod report;
mod scanner;
mod signature;

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::walk;
pub use report::GateStatus;
use report::{aggregate, print_json, print_report};
use scanner::{FunctionRecord, scan, split_lines};

/// Functions longer than this many lines fail the run.
pub const THRESHOLD: usize = 150;

/// Number of functions listed in the report.
pub const TOP_N: usize = 5;

/// Only files with this extension are scanned.
pub const EXTENSION: &str = "c";

/// Scan a single file. Unreadable or non-UTF-8 files yield no records.
fn scan_file(path: &Path) -> Vec<FunctionRecord> {
    match fs::read_to_string(path) {
        Ok(content) => scan(split_lines(&content), path),
        Err(_) => Vec::new(),
    }
}

pub fn run(path: &Path, json: bool) -> Result<GateStatus, Box<dyn Error>> {
    let mut records: Vec<FunctionRecord> = Vec::new();

    for file in walk::source_files(path, EXTENSION) {
        records.extend(scan_file(&file));
    }

    let agg = aggregate(records, TOP_N, THRESHOLD);

    if json {
        print_json(&agg)?;
    } else {
        print_report(&agg);
    }

    Ok(agg.status)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
