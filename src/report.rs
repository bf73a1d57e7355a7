//! Report row types - read-only shapes derived from the grade ledger.
//!
//! Every report computes average and status from the stored component
//! scores at query time. Per-course rows carry the raw scores and derive
//! average/status through [`crate::grade`]; grouped rows carry averages
//! already rounded to 2 decimals by the aggregation query.

use crate::grade::{Status, average};

/// One (student, course, semester) line of a situation report.
#[derive(Debug, Clone, PartialEq)]
pub struct SituationRow {
    pub student_code: String,
    pub student_name: String,
    pub course_code: String,
    pub course_name: String,
    pub score1: f64,
    pub score2: f64,
    pub score3: f64,
    pub semester: String,
}

impl SituationRow {
    pub fn average(&self) -> f64 {
        average(self.score1, self.score2, self.score3)
    }

    pub fn status(&self) -> Status {
        Status::from_average(self.average())
    }
}

/// Per (student, semester) aggregate used by the summary report.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub student_code: String,
    pub student_name: String,
    pub semester: String,
    pub courses: i64,
    pub passed: i64,
    pub failed: i64,
    /// Mean of the per-course averages, rounded to 2 decimals.
    pub average: f64,
}

/// A (student, semester) group with no failed courses.
#[derive(Debug, Clone, PartialEq)]
pub struct PassedGroup {
    pub student_code: String,
    pub student_name: String,
    pub semester: String,
    pub courses: i64,
    pub average: f64,
}

/// A (student, semester) group with at least one failed course.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedGroup {
    pub student_code: String,
    pub student_name: String,
    pub semester: String,
    pub failed: i64,
    pub average: f64,
}

/// Semester-wide statistics across all students.
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterStats {
    pub semester: String,
    /// Distinct students with at least one grade record.
    pub students: i64,
    /// Total grade records.
    pub records: i64,
    pub passed: i64,
    pub failed: i64,
    /// Overall average, rounded to 2 decimals.
    pub average: f64,
    /// 100 * passed / records, rounded to 2 decimals.
    pub pass_rate: f64,
}
