use crate::marks::grade::Grade;

/// Weight of the exam component in the overall score.
pub const EXAM_WEIGHT: f64 = 0.7;
/// Weight of the coursework component in the overall score.
pub const COURSEWORK_WEIGHT: f64 = 0.3;

/// One student's marks. The overall score and grade are derived from the
/// two input scores at construction and never change afterwards.
#[derive(Debug, Clone)]
pub struct StudentRecord {
    pub reg_no: String,
    pub exam: f64,
    pub coursework: f64,
    pub overall: f64,
    pub grade: Grade,
}

impl StudentRecord {
    pub fn new(reg_no: String, exam: f64, coursework: f64) -> Self {
        let overall = EXAM_WEIGHT * exam + COURSEWORK_WEIGHT * coursework;
        StudentRecord {
            reg_no,
            exam,
            coursework,
            overall,
            grade: Grade::for_overall(overall),
        }
    }
}
