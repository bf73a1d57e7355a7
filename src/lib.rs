//! # Gradebook - Student grade management over SQLite
//!
//! Single-user, menu-driven grade recording and reporting.
//!
//! Gradebook provides:
//! - Student and course registries keyed by external codes
//! - A grade ledger with one record per (student, course, semester)
//! - Derived pass/fail reports: per-course situations, per-semester
//!   summaries, passed/failed groups, semester-wide statistics
//! - SQLite-backed storage with declared constraints

pub mod student;
pub mod course;
pub mod grade;
pub mod storage;
pub mod report;
pub mod ui;
pub mod menu;
pub mod sample;
pub mod config;

// Re-exports for convenient access
pub use student::Student;
pub use course::Course;
pub use grade::{GradeRecord, PASS_THRESHOLD, Status, average};
pub use storage::SqliteStore;

/// Result type alias for gradebook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for gradebook operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Score out of range: {0}")]
    RangeViolation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
