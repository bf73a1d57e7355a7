//! Course entity - a unit of study identified by a unique course code.

/// A registered course. Immutable after registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i64,
    pub code: String,
    pub name: String,
    /// Weekly workload in hours; non-negative.
    pub credit_hours: u32,
}

impl Course {
    pub fn new(id: i64, code: impl Into<String>, name: impl Into<String>, credit_hours: u32) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            credit_hours,
        }
    }
}
