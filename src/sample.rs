//! Built-in sample data for trying the system out.
//!
//! Loading is idempotent: rows that already exist are skipped, so the
//! loader can run against a populated database without damage.

use crate::storage::SqliteStore;
use crate::{Error, Result};

const STUDENTS: &[(&str, &str)] = &[
    ("2024001", "John Miller"),
    ("2024002", "Mary Santos"),
    ("2024003", "Peter Oliveira"),
    ("2024004", "Anna Costa"),
    ("2024005", "Carl Sousa"),
];

const COURSES: &[(&str, &str, u32)] = &[
    ("MAT101", "Mathematics I", 60),
    ("FIS101", "Physics I", 60),
    ("POR101", "Portuguese", 40),
    ("HIS101", "History", 40),
    ("QUI101", "Chemistry I", 60),
];

const GRADES: &[(&str, &str, f64, f64, f64, &str)] = &[
    ("2024001", "MAT101", 8.5, 7.0, 9.0, "2024.1"),
    ("2024001", "FIS101", 7.5, 8.0, 7.0, "2024.1"),
    ("2024001", "POR101", 9.0, 8.5, 9.5, "2024.1"),
    ("2024001", "HIS101", 7.0, 7.5, 8.0, "2024.1"),
    ("2024001", "QUI101", 6.0, 7.5, 8.0, "2024.1"),
    ("2024002", "MAT101", 9.0, 9.5, 10.0, "2024.1"),
    ("2024002", "FIS101", 8.5, 9.0, 8.0, "2024.1"),
    ("2024002", "POR101", 10.0, 9.5, 9.0, "2024.1"),
    ("2024002", "HIS101", 8.0, 8.5, 9.0, "2024.1"),
    ("2024002", "QUI101", 9.0, 8.5, 9.5, "2024.1"),
    ("2024003", "MAT101", 5.0, 6.0, 6.5, "2024.1"),
    ("2024003", "FIS101", 7.0, 7.5, 8.0, "2024.1"),
    ("2024003", "POR101", 6.0, 5.5, 6.0, "2024.1"),
    ("2024003", "HIS101", 8.0, 7.5, 7.0, "2024.1"),
    ("2024003", "QUI101", 9.0, 8.0, 8.5, "2024.1"),
];

/// Rows actually inserted by a [`load`] call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SampleStats {
    pub students: usize,
    pub courses: usize,
    pub grades: usize,
}

/// Insert the sample data set, skipping rows that already exist.
pub fn load(store: &SqliteStore) -> Result<SampleStats> {
    let mut stats = SampleStats::default();

    for (code, name) in STUDENTS {
        match store.register_student(code, name) {
            Ok(()) => stats.students += 1,
            Err(Error::DuplicateKey(_)) => {
                tracing::debug!("sample student {code} already present");
            }
            Err(e) => return Err(e),
        }
    }

    for (code, name, hours) in COURSES {
        match store.register_course(code, name, *hours) {
            Ok(()) => stats.courses += 1,
            Err(Error::DuplicateKey(_)) => {
                tracing::debug!("sample course {code} already present");
            }
            Err(e) => return Err(e),
        }
    }

    for (student, course, s1, s2, s3, semester) in GRADES {
        match store.record_grades(student, course, *s1, *s2, *s3, semester) {
            Ok(()) => stats.grades += 1,
            Err(Error::DuplicateKey(_)) => {
                tracing::debug!("sample grades for {student}/{course}/{semester} already present");
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        "sample data loaded: {} students, {} courses, {} grade records",
        stats.students,
        stats.courses,
        stats.grades
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_inserts_full_fixture() {
        let store = SqliteStore::open_in_memory().unwrap();

        let stats = load(&store).unwrap();
        assert_eq!(stats.students, 5);
        assert_eq!(stats.courses, 5);
        assert_eq!(stats.grades, 15);
    }

    #[test]
    fn test_reload_is_harmless() {
        let store = SqliteStore::open_in_memory().unwrap();
        load(&store).unwrap();

        let stats = load(&store).unwrap();
        assert_eq!(stats, SampleStats::default());

        let counts = store.counts().unwrap();
        assert_eq!(counts.students, 5);
        assert_eq!(counts.courses, 5);
        assert_eq!(counts.grades, 15);
    }

    #[test]
    fn test_fixture_covers_both_outcomes() {
        let store = SqliteStore::open_in_memory().unwrap();
        load(&store).unwrap();

        let passed = store.passed_groups().unwrap();
        let failed = store.failed_groups().unwrap();
        assert!(!passed.is_empty());
        assert!(!failed.is_empty());
        assert_eq!(passed.len() + failed.len(), store.summaries(None).unwrap().len());
    }
}
