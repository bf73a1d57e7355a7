//! Grade records and the pass/fail derivation rules.
//!
//! A grade record holds three component scores for one student in one
//! course during one semester. The average and the PASS/FAIL status are
//! derived from the scores at read time and never persisted, so stored and
//! displayed state cannot diverge.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Minimum average required to pass a course.
pub const PASS_THRESHOLD: f64 = 7.0;

/// Arithmetic mean of the three component scores.
pub fn average(s1: f64, s2: f64, s3: f64) -> f64 {
    (s1 + s2 + s3) / 3.0
}

/// Pass/fail classification of a grade record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    /// Classify an already-computed average. Exactly the threshold passes.
    pub fn from_average(avg: f64) -> Self {
        if avg >= PASS_THRESHOLD {
            Status::Pass
        } else {
            Status::Fail
        }
    }

    /// Classify three component scores.
    pub fn from_scores(s1: f64, s2: f64, s3: f64) -> Self {
        Self::from_average(average(s1, s2, s3))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Status::Pass)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Status::Pass),
            "FAIL" => Ok(Status::Fail),
            other => Err(Error::InvalidInput(format!("unknown status '{other}'"))),
        }
    }
}

/// A stored grade record, as read back from the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeRecord {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub score1: f64,
    pub score2: f64,
    pub score3: f64,
    pub semester: String,
}

impl GradeRecord {
    pub fn average(&self) -> f64 {
        average(self.score1, self.score2, self.score3)
    }

    pub fn status(&self) -> Status {
        Status::from_average(self.average())
    }
}
