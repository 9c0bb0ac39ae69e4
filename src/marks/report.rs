use std::fs::File;
use std::io;
use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use crate::marks::{Grade, MarksError, StudentRecord};

const HEADER: [&str; 5] = ["RegNo", "Exam", "Coursework", "Overall", "Grade"];

/// Sorts the batch by overall score descending. The sort is stable, so
/// records with equal scores keep their input order.
pub fn sort_batch(records: &mut [StudentRecord]) {
    records.sort_by(|a, b| b.overall.total_cmp(&a.overall));
}

/// Writes the report to `path`: a header row, then one row per record with
/// every numeric field at exactly 2 decimal places.
pub fn write_report(path: &Path, records: &[StudentRecord]) -> Result<(), MarksError> {
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().from_writer(file);

    writer.write_record(HEADER).map_err(io::Error::other)?;
    for r in records {
        let exam = format!("{:.2}", r.exam);
        let coursework = format!("{:.2}", r.coursework);
        let overall = format!("{:.2}", r.overall);
        writer
            .write_record([
                r.reg_no.as_str(),
                exam.as_str(),
                coursework.as_str(),
                overall.as_str(),
                r.grade.as_str(),
            ])
            .map_err(io::Error::other)?;
    }
    writer.flush()?;

    debug!(rows = records.len(), path = %path.display(), "report written");
    Ok(())
}

/// Tallies grades in the fixed A, B, C, D, F order. Every letter is
/// present, even at zero.
pub fn grade_distribution(records: &[StudentRecord]) -> [(Grade, usize); 5] {
    let mut counts = [0usize; 5];
    for r in records {
        counts[r.grade as usize] += 1;
    }
    Grade::ALL.map(|g| (g, counts[g as usize]))
}

/// Prints the grade tally and confirms where the report was written.
pub fn print_summary(tally: &[(Grade, usize); 5], output: &Path) {
    println!("Grade statistics:");
    for (grade, count) in tally {
        println!("Grade {grade}: {count} students");
    }
    println!();
    println!("Results successfully written to {}", output.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    fn record(reg_no: &str, exam: f64, coursework: f64) -> StudentRecord {
        StudentRecord::new(reg_no.to_string(), exam, coursework)
    }

    #[test]
    fn test_sort_descending_and_stable() {
        // Overalls: 55, 90, 90, 40. The two 90s must keep input order.
        let mut records = vec![
            record("S1", 55.0, 55.0),
            record("S2", 90.0, 90.0),
            record("S3", 90.0, 90.0),
            record("S4", 40.0, 40.0),
        ];
        sort_batch(&mut records);

        let order: Vec<_> = records.iter().map(|r| r.reg_no.as_str()).collect();
        assert_eq!(order, ["S2", "S3", "S1", "S4"]);
    }

    #[test]
    fn test_grade_distribution_fixed_order() {
        let records = vec![
            record("S1", 80.0, 70.0), // A
            record("S2", 50.0, 40.0), // D
            record("S3", 95.0, 90.0), // A
        ];
        let tally = grade_distribution(&records);

        assert_eq!(tally[0], (Grade::A, 2));
        assert_eq!(tally[1], (Grade::B, 0));
        assert_eq!(tally[2], (Grade::C, 0));
        assert_eq!(tally[3], (Grade::D, 1));
        assert_eq!(tally[4], (Grade::F, 0));
    }

    #[test]
    fn test_grade_distribution_empty_batch() {
        let tally = grade_distribution(&[]);
        assert!(tally.iter().all(|&(_, count)| count == 0));
    }

    #[test]
    fn test_report_rows_have_two_decimals() {
        let path = temp_path("coursetools_report_format.txt");
        let records = vec![record("S3", 95.0, 90.0)];

        write_report(&path, &records).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "RegNo,Exam,Coursework,Overall,Grade");
        assert_eq!(lines[1], "S3,95.00,90.00,93.50,A");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_report_with_empty_batch_is_header_only() {
        let path = temp_path("coursetools_report_empty.txt");

        write_report(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "RegNo,Exam,Coursework,Overall,Grade\n");

        fs::remove_file(&path).unwrap();
    }
}
