//! Student marks batch processing.
//!
//! Loads comma-separated student records, computes a weighted overall score
//! and letter grade per record, sorts the batch by overall score descending,
//! writes a formatted report, and prints grade-distribution counts.

pub mod grade;
pub mod loader;
pub mod record;
pub mod report;

use std::path::{Path, PathBuf};

use tracing::info;

pub use grade::Grade;
pub use record::StudentRecord;

/// Failure modes of a marks processing run. Each is terminal for the run
/// but not fatal to the process; the caller owns the presentation.
#[derive(thiserror::Error, Debug)]
pub enum MarksError {
    /// The input file does not exist.
    #[error("input file '{}' not found", .0.display())]
    SourceNotFound(PathBuf),
    /// A line had the wrong field count or a non-numeric score.
    #[error("invalid mark detected in input file (line {line}: {reason})")]
    MalformedRecord { line: usize, reason: String },
    /// Anything else that kept the run from finishing.
    #[error("unexpected failure: {0}")]
    Unexpected(#[from] std::io::Error),
}

/// Runs the full batch: load, sort, write, tally, report.
///
/// The report is only opened for writing after the entire input has loaded
/// cleanly, so a failed run never produces partial output.
pub fn run(input: &Path, output: &Path) -> Result<(), MarksError> {
    let mut records = loader::load_records(input)?;
    report::sort_batch(&mut records);
    report::write_report(output, &records)?;

    let tally = report::grade_distribution(&records);
    report::print_summary(&tally, output);

    info!(
        students = records.len(),
        output = %output.display(),
        "marks batch processed"
    );
    Ok(())
}
