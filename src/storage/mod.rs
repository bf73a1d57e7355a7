//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - students(id, code, name, created_at)
//! - courses(id, code, name, credit_hours)
//! - grades(id, student_id, course_id, score1, score2, score3, semester)
//!
//! Uniqueness is declared on student code, course code, and the
//! (student_id, course_id, semester) triple; grade rows cascade on
//! student/course deletion.

pub mod schema;
pub mod sqlite;

pub use sqlite::{SqliteStore, StoreCounts};
