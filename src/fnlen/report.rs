//! Ranking and output for function length results.
//!
//! Records from the whole tree are sorted once by length, the top entries are
//! rendered, and any function longer than the threshold turns the run into a
//! failing quality gate.
use serde::Serialize;

use super::scanner::FunctionRecord;

/// Pass/fail outcome of a run, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateStatus {
    Passed,
    Failed,
}

impl GateStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Passed => 0,
            Self::Failed => 1,
        }
    }
}

/// Sorted and truncated view over every record found in a run.
#[derive(Debug)]
pub struct Aggregate {
    /// Longest functions first, at most `top` of them.
    pub ranked: Vec<FunctionRecord>,
    pub top: usize,
    pub threshold: usize,
    pub total_functions: usize,
    /// Functions strictly longer than `threshold`, counted before truncation.
    pub long_count: usize,
    pub status: GateStatus,
}

/// Rank records by length (stable, so ties keep discovery order) and
/// derive the gate status from `threshold`.
pub fn aggregate(mut records: Vec<FunctionRecord>, top: usize, threshold: usize) -> Aggregate {
    records.sort_by(|a, b| b.length.cmp(&a.length));

    let total_functions = records.len();
    let long_count = records.iter().filter(|r| r.length > threshold).count();
    let status = if long_count > 0 {
        GateStatus::Failed
    } else {
        GateStatus::Passed
    };

    records.truncate(top);

    Aggregate {
        ranked: records,
        top,
        threshold,
        total_functions,
        long_count,
        status,
    }
}

/// Render the plain-text report.
pub fn render(agg: &Aggregate) -> String {
    let mut out = format!("Top {} longest functions:\n", agg.top);

    for (i, r) in agg.ranked.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} ({}:{}) - {} lines\n",
            i + 1,
            r.name,
            r.source_path.display(),
            r.start_line,
            r.length
        ));
    }

    if agg.long_count > 0 {
        out.push_str(&format!(
            "\nFound {} functions exceeding {} lines\n",
            agg.long_count, agg.threshold
        ));
    }

    out
}

pub fn print_report(agg: &Aggregate) {
    print!("{}", render(agg));
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    rank: usize,
    name: &'a str,
    path: String,
    start_line: usize,
    length: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    threshold: usize,
    total_functions: usize,
    long_functions: usize,
    status: GateStatus,
    top: Vec<JsonEntry<'a>>,
}

fn json_report(agg: &Aggregate) -> JsonReport<'_> {
    JsonReport {
        threshold: agg.threshold,
        total_functions: agg.total_functions,
        long_functions: agg.long_count,
        status: agg.status,
        top: agg
            .ranked
            .iter()
            .enumerate()
            .map(|(i, r)| JsonEntry {
                rank: i + 1,
                name: &r.name,
                path: r.source_path.display().to_string(),
                start_line: r.start_line,
                length: r.length,
            })
            .collect(),
    }
}

pub fn print_json(agg: &Aggregate) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&json_report(agg))?);
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
