use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::marks::{MarksError, StudentRecord};

/// Loads the full batch from `path`.
///
/// Each line must hold exactly `RegNo,Exam,Coursework`; quoting is not
/// supported. The first malformed line aborts the whole batch, so callers
/// never observe a partial load.
pub fn load_records(path: &Path) -> Result<Vec<StudentRecord>, MarksError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MarksError::SourceNotFound(path.to_path_buf()),
        _ => MarksError::Unexpected(e),
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| MarksError::Unexpected(io::Error::other(e)))?;
        let line = record.position().map_or(idx + 1, |p| p.line() as usize);
        if record.len() != 3 {
            return Err(MarksError::MalformedRecord {
                line,
                reason: format!("expected 3 fields, found {}", record.len()),
            });
        }
        let exam = parse_score(&record[1], line)?;
        let coursework = parse_score(&record[2], line)?;
        records.push(StudentRecord::new(record[0].to_string(), exam, coursework));
    }

    debug!(count = records.len(), path = %path.display(), "batch loaded");
    Ok(records)
}

fn parse_score(field: &str, line: usize) -> Result<f64, MarksError> {
    field
        .parse::<f64>()
        .map_err(|_| MarksError::MalformedRecord {
            line,
            reason: format!("'{field}' is not a number"),
        })
}
