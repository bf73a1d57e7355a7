//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, ffi, params};

use super::schema;
use crate::course::Course;
use crate::grade::GradeRecord;
use crate::report::{FailedGroup, GroupSummary, PassedGroup, SemesterStats, SituationRow};
use crate::student::Student;
use crate::{Error, Result};

/// SQLite-backed store for students, courses, and grades.
///
/// Owns the single process-wide connection. Constraint enforcement
/// (unique codes, unique triple, score range) lives in the schema; the
/// store maps the resulting SQLite errors onto domain errors at each
/// call site.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Apply pragmas and create the schema
    fn initialize(&self) -> Result<()> {
        // SQLite only honors ON DELETE CASCADE with this pragma set
        self.conn.pragma_update(None, "foreign_keys", true)?;
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Release the connection. Every exit path goes through here rather
    /// than relying on drop order.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| Error::Storage(err))
    }

    // ========== Student Operations ==========

    /// Register a new student under a unique enrollment code
    pub fn register_student(&self, code: &str, name: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO students (code, name) VALUES (?1, ?2)",
                params![code, name],
            )
            .map_err(|e| match violation(&e) {
                Some(Violation::Unique) => {
                    Error::DuplicateKey(format!("student code '{code}' is already registered"))
                }
                _ => e.into(),
            })?;
        Ok(())
    }

    /// List all students, sorted by name
    pub fn list_students(&self) -> Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, code, name, created_at FROM students ORDER BY name",
        )?;

        let students = stmt
            .query_map([], row_to_student)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(students)
    }

    /// Look up a student by enrollment code
    pub fn find_student(&self, code: &str) -> Result<Option<Student>> {
        self.conn
            .query_row(
                "SELECT id, code, name, created_at FROM students WHERE code = ?1",
                [code],
                row_to_student,
            )
            .optional()
            .map_err(Into::into)
    }

    // ========== Course Operations ==========

    /// Register a new course under a unique course code
    pub fn register_course(&self, code: &str, name: &str, credit_hours: u32) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO courses (code, name, credit_hours) VALUES (?1, ?2, ?3)",
                params![code, name, credit_hours],
            )
            .map_err(|e| match violation(&e) {
                Some(Violation::Unique) => {
                    Error::DuplicateKey(format!("course code '{code}' is already registered"))
                }
                _ => e.into(),
            })?;
        Ok(())
    }

    /// List all courses, sorted by name
    pub fn list_courses(&self) -> Result<Vec<Course>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, code, name, credit_hours FROM courses ORDER BY name",
        )?;

        let courses = stmt
            .query_map([], row_to_course)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(courses)
    }

    /// Look up a course by course code
    pub fn find_course(&self, code: &str) -> Result<Option<Course>> {
        self.conn
            .query_row(
                "SELECT id, code, name, credit_hours FROM courses WHERE code = ?1",
                [code],
                row_to_course,
            )
            .optional()
            .map_err(Into::into)
    }

    // ========== Grade Operations ==========

    /// Record the three component scores for a student in a course.
    ///
    /// Both codes are resolved first; at most one record may exist per
    /// (student, course, semester).
    pub fn record_grades(
        &self,
        student_code: &str,
        course_code: &str,
        s1: f64,
        s2: f64,
        s3: f64,
        semester: &str,
    ) -> Result<()> {
        let student = self
            .find_student(student_code)?
            .ok_or_else(|| Error::NotFound(format!("no student with code '{student_code}'")))?;
        let course = self
            .find_course(course_code)?
            .ok_or_else(|| Error::NotFound(format!("no course with code '{course_code}'")))?;

        self.conn
            .execute(
                r#"
                INSERT INTO grades (student_id, course_id, score1, score2, score3, semester)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                params![student.id, course.id, s1, s2, s3, semester],
            )
            .map_err(|e| match violation(&e) {
                Some(Violation::Unique) => Error::DuplicateKey(format!(
                    "grades already recorded for '{student_code}' in '{course_code}' ({semester})"
                )),
                Some(Violation::Check) => Error::RangeViolation(format!(
                    "scores must lie within [0, 10], got ({s1}, {s2}, {s3})"
                )),
                None => e.into(),
            })?;
        Ok(())
    }

    /// Overwrite the three scores of an existing (student, course,
    /// semester) record. Identifiers are never touched.
    pub fn update_grades(
        &self,
        student_code: &str,
        course_code: &str,
        semester: &str,
        s1: f64,
        s2: f64,
        s3: f64,
    ) -> Result<()> {
        let affected = self
            .conn
            .execute(
                r#"
                UPDATE grades
                SET score1 = ?1, score2 = ?2, score3 = ?3
                WHERE student_id = (SELECT id FROM students WHERE code = ?4)
                  AND course_id = (SELECT id FROM courses WHERE code = ?5)
                  AND semester = ?6
                "#,
                params![s1, s2, s3, student_code, course_code, semester],
            )
            .map_err(|e| match violation(&e) {
                Some(Violation::Check) => Error::RangeViolation(format!(
                    "scores must lie within [0, 10], got ({s1}, {s2}, {s3})"
                )),
                _ => e.into(),
            })?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "no grade record for '{student_code}' in '{course_code}' ({semester})"
            )));
        }
        Ok(())
    }

    /// Fetch the raw ledger row for a (student, course, semester) triple
    pub fn find_grade(
        &self,
        student_code: &str,
        course_code: &str,
        semester: &str,
    ) -> Result<Option<GradeRecord>> {
        self.conn
            .query_row(
                r#"
                SELECT g.id, g.student_id, g.course_id, g.score1, g.score2, g.score3, g.semester
                FROM grades g
                INNER JOIN students s ON g.student_id = s.id
                INNER JOIN courses c ON g.course_id = c.id
                WHERE s.code = ?1 AND c.code = ?2 AND g.semester = ?3
                "#,
                params![student_code, course_code, semester],
                row_to_grade,
            )
            .optional()
            .map_err(Into::into)
    }

    // ========== Report Queries ==========

    /// Per-course situation of one student, ordered by course name
    pub fn student_situation(&self, student_code: &str) -> Result<Vec<SituationRow>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SITUATION_SELECT} WHERE s.code = ?1 ORDER BY c.name"
        ))?;

        let rows = stmt
            .query_map([student_code], row_to_situation)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(rows)
    }

    /// Situation of every grade record, ordered by student then course name
    pub fn all_situations(&self) -> Result<Vec<SituationRow>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SITUATION_SELECT} ORDER BY s.name, c.name"))?;

        let rows = stmt
            .query_map([], row_to_situation)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(rows)
    }

    /// Per (student, semester) summary; all students when no code given
    pub fn summaries(&self, student_code: Option<&str>) -> Result<Vec<GroupSummary>> {
        let filter = if student_code.is_some() {
            "WHERE s.code = ?1"
        } else {
            ""
        };
        let sql = format!(
            r#"
            SELECT
                s.code,
                s.name,
                g.semester,
                COUNT(*) AS courses,
                SUM(CASE WHEN (g.score1 + g.score2 + g.score3) / 3 >= 7.0 THEN 1 ELSE 0 END) AS passed,
                SUM(CASE WHEN (g.score1 + g.score2 + g.score3) / 3 < 7.0 THEN 1 ELSE 0 END) AS failed,
                ROUND(AVG((g.score1 + g.score2 + g.score3) / 3), 2) AS avg_score
            FROM students s
            INNER JOIN grades g ON s.id = g.student_id
            {filter}
            GROUP BY s.code, s.name, g.semester
            ORDER BY s.name
            "#
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let map_row = |row: &rusqlite::Row| -> rusqlite::Result<GroupSummary> {
            Ok(GroupSummary {
                student_code: row.get(0)?,
                student_name: row.get(1)?,
                semester: row.get(2)?,
                courses: row.get(3)?,
                passed: row.get(4)?,
                failed: row.get(5)?,
                average: row.get(6)?,
            })
        };

        let summaries = match student_code {
            Some(code) => stmt
                .query_map([code], map_row)?
                .filter_map(|r| r.ok())
                .collect(),
            None => stmt
                .query_map([], map_row)?
                .filter_map(|r| r.ok())
                .collect(),
        };

        Ok(summaries)
    }

    /// Groups with zero failed courses, best average first
    pub fn passed_groups(&self) -> Result<Vec<PassedGroup>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT
                s.code,
                s.name,
                g.semester,
                COUNT(*) AS courses,
                ROUND(AVG((g.score1 + g.score2 + g.score3) / 3), 2) AS avg_score
            FROM students s
            INNER JOIN grades g ON s.id = g.student_id
            GROUP BY s.code, s.name, g.semester
            HAVING SUM(CASE WHEN (g.score1 + g.score2 + g.score3) / 3 < 7.0 THEN 1 ELSE 0 END) = 0
            ORDER BY avg_score DESC
            "#,
        )?;

        let groups = stmt
            .query_map([], |row| {
                Ok(PassedGroup {
                    student_code: row.get(0)?,
                    student_name: row.get(1)?,
                    semester: row.get(2)?,
                    courses: row.get(3)?,
                    average: row.get(4)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(groups)
    }

    /// Groups with at least one failed course, worst offenders first
    pub fn failed_groups(&self) -> Result<Vec<FailedGroup>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT
                s.code,
                s.name,
                g.semester,
                SUM(CASE WHEN (g.score1 + g.score2 + g.score3) / 3 < 7.0 THEN 1 ELSE 0 END) AS failed,
                ROUND(AVG((g.score1 + g.score2 + g.score3) / 3), 2) AS avg_score
            FROM students s
            INNER JOIN grades g ON s.id = g.student_id
            GROUP BY s.code, s.name, g.semester
            HAVING failed > 0
            ORDER BY failed DESC, avg_score ASC
            "#,
        )?;

        let groups = stmt
            .query_map([], |row| {
                Ok(FailedGroup {
                    student_code: row.get(0)?,
                    student_name: row.get(1)?,
                    semester: row.get(2)?,
                    failed: row.get(3)?,
                    average: row.get(4)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(groups)
    }

    /// Semester-wide aggregate; `None` when the semester has no records
    pub fn semester_stats(&self, semester: &str) -> Result<Option<SemesterStats>> {
        let (students, records, passed, failed, average, pass_rate) = self.conn.query_row(
            r#"
            SELECT
                COUNT(DISTINCT student_id),
                COUNT(*),
                SUM(CASE WHEN (score1 + score2 + score3) / 3 >= 7.0 THEN 1 ELSE 0 END),
                SUM(CASE WHEN (score1 + score2 + score3) / 3 < 7.0 THEN 1 ELSE 0 END),
                ROUND(AVG((score1 + score2 + score3) / 3), 2),
                ROUND(100.0 * SUM(CASE WHEN (score1 + score2 + score3) / 3 >= 7.0 THEN 1 ELSE 0 END) / COUNT(*), 2)
            FROM grades
            WHERE semester = ?1
            "#,
            [semester],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, Option<i64>>(2)?,
                    row.get::<_, Option<i64>>(3)?,
                    row.get::<_, Option<f64>>(4)?,
                    row.get::<_, Option<f64>>(5)?,
                ))
            },
        )?;

        if records == 0 {
            return Ok(None);
        }

        Ok(Some(SemesterStats {
            semester: semester.to_string(),
            students,
            records,
            passed: passed.unwrap_or(0),
            failed: failed.unwrap_or(0),
            average: average.unwrap_or(0.0),
            pass_rate: pass_rate.unwrap_or(0.0),
        }))
    }

    // ========== Statistics ==========

    /// Count all students
    pub fn count_students(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Count all courses
    pub fn count_courses(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM courses", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Count all grade records
    pub fn count_grades(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM grades", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get row counts per table
    pub fn counts(&self) -> Result<StoreCounts> {
        Ok(StoreCounts {
            students: self.count_students()?,
            courses: self.count_courses()?,
            grades: self.count_grades()?,
        })
    }
}

/// Shared SELECT for the situation reports; callers append filter/order
const SITUATION_SELECT: &str = r#"
SELECT s.code, s.name, c.code, c.name, g.score1, g.score2, g.score3, g.semester
FROM grades g
INNER JOIN students s ON g.student_id = s.id
INNER JOIN courses c ON g.course_id = c.id
"#;

fn row_to_student(row: &rusqlite::Row) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        code: row.get(1)?,
        name: row.get(2)?,
        created_at: row.get(3)?,
    })
}

fn row_to_course(row: &rusqlite::Row) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        code: row.get(1)?,
        name: row.get(2)?,
        credit_hours: row.get(3)?,
    })
}

fn row_to_grade(row: &rusqlite::Row) -> rusqlite::Result<GradeRecord> {
    Ok(GradeRecord {
        id: row.get(0)?,
        student_id: row.get(1)?,
        course_id: row.get(2)?,
        score1: row.get(3)?,
        score2: row.get(4)?,
        score3: row.get(5)?,
        semester: row.get(6)?,
    })
}

fn row_to_situation(row: &rusqlite::Row) -> rusqlite::Result<SituationRow> {
    Ok(SituationRow {
        student_code: row.get(0)?,
        student_name: row.get(1)?,
        course_code: row.get(2)?,
        course_name: row.get(3)?,
        score1: row.get(4)?,
        score2: row.get(5)?,
        score3: row.get(6)?,
        semester: row.get(7)?,
    })
}

/// Constraint classes the store translates into domain errors
enum Violation {
    Unique,
    Check,
}

fn violation(err: &rusqlite::Error) -> Option<Violation> {
    if let rusqlite::Error::SqliteFailure(e, _) = err {
        match e.extended_code {
            ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                Some(Violation::Unique)
            }
            ffi::SQLITE_CONSTRAINT_CHECK => Some(Violation::Check),
            _ => None,
        }
    } else {
        None
    }
}

/// Row counts per table
#[derive(Debug, Clone)]
pub struct StoreCounts {
    pub students: usize,
    pub courses: usize,
    pub grades: usize,
}

impl std::fmt::Display for StoreCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} student(s), {} course(s), {} grade record(s)",
            self.students, self.courses, self.grades
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::Status;

    fn seeded_store() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store.register_student("2024001", "Alice Martin").unwrap();
        store.register_student("2024002", "Bruno Keller").unwrap();
        store.register_course("MAT101", "Mathematics I", 60).unwrap();
        store.register_course("FIS101", "Physics I", 60).unwrap();
        store
    }

    #[test]
    fn test_register_and_find_student() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.register_student("2024001", "Alice Martin").unwrap();

        let student = store.find_student("2024001").unwrap().unwrap();
        assert_eq!(student.code, "2024001");
        assert_eq!(student.name, "Alice Martin");
        assert!(!student.created_at.is_empty());

        assert!(store.find_student("9999999").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_student_code_rejected() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.register_student("2024001", "Alice Martin").unwrap();

        let err = store.register_student("2024001", "Impostor").unwrap_err();
        assert!(matches!(err, Error::DuplicateKey(_)));

        // existing row untouched
        let student = store.find_student("2024001").unwrap().unwrap();
        assert_eq!(student.name, "Alice Martin");
        assert_eq!(store.count_students().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_course_code_rejected() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.register_course("MAT101", "Mathematics I", 60).unwrap();

        let err = store.register_course("MAT101", "Mathematics II", 80).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey(_)));

        let course = store.find_course("MAT101").unwrap().unwrap();
        assert_eq!(course.name, "Mathematics I");
        assert_eq!(course.credit_hours, 60);
    }

    #[test]
    fn test_lists_sorted_by_name() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.register_student("2024002", "Zelda Quinn").unwrap();
        store.register_student("2024001", "Alice Martin").unwrap();
        store.register_course("QUI101", "Chemistry I", 60).unwrap();
        store.register_course("MAT101", "Algebra", 60).unwrap();

        let students = store.list_students().unwrap();
        let names: Vec<_> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alice Martin", "Zelda Quinn"]);

        let courses = store.list_courses().unwrap();
        let names: Vec<_> = courses.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Algebra", "Chemistry I"]);
    }

    #[test]
    fn test_record_requires_registered_codes() {
        let store = seeded_store();

        let err = store
            .record_grades("0000000", "MAT101", 8.0, 8.0, 8.0, "2024.1")
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let err = store
            .record_grades("2024001", "XXX999", 8.0, 8.0, 8.0, "2024.1")
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        assert_eq!(store.count_grades().unwrap(), 0);
    }

    #[test]
    fn test_duplicate_triple_rejected() {
        let store = seeded_store();
        store
            .record_grades("2024001", "MAT101", 8.0, 7.5, 9.0, "2024.1")
            .unwrap();

        let err = store
            .record_grades("2024001", "MAT101", 5.0, 5.0, 5.0, "2024.1")
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateKey(_)));

        // same pair in another semester is a fresh record
        store
            .record_grades("2024001", "MAT101", 6.0, 6.0, 6.0, "2024.2")
            .unwrap();
        assert_eq!(store.count_grades().unwrap(), 2);
    }

    #[test]
    fn test_update_overwrites_scores_only() {
        let store = seeded_store();
        store
            .record_grades("2024001", "MAT101", 8.5, 7.0, 9.0, "2024.1")
            .unwrap();
        let before = store
            .find_grade("2024001", "MAT101", "2024.1")
            .unwrap()
            .unwrap();

        store
            .update_grades("2024001", "MAT101", "2024.1", 4.0, 5.0, 5.0)
            .unwrap();

        let after = store
            .find_grade("2024001", "MAT101", "2024.1")
            .unwrap()
            .unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.student_id, before.student_id);
        assert_eq!(after.course_id, before.course_id);
        assert_eq!((after.score1, after.score2, after.score3), (4.0, 5.0, 5.0));

        let rows = store.student_situation("2024001").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].semester, "2024.1");
        assert_eq!(rows[0].status(), Status::Fail);
        assert_eq!(format!("{:.2}", rows[0].average()), "4.67");
    }

    #[test]
    fn test_update_missing_triple_not_found() {
        let store = seeded_store();

        let err = store
            .update_grades("2024001", "MAT101", "2024.1", 8.0, 8.0, 8.0)
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_score_range_enforced() {
        let store = seeded_store();

        let err = store
            .record_grades("2024001", "MAT101", 10.5, 8.0, 8.0, "2024.1")
            .unwrap_err();
        assert!(matches!(err, Error::RangeViolation(_)));
        assert_eq!(store.count_grades().unwrap(), 0);

        store
            .record_grades("2024001", "MAT101", 8.0, 8.0, 8.0, "2024.1")
            .unwrap();
        let err = store
            .update_grades("2024001", "MAT101", "2024.1", -1.0, 8.0, 8.0)
            .unwrap_err();
        assert!(matches!(err, Error::RangeViolation(_)));

        // rejected update left the old scores in place
        let rows = store.student_situation("2024001").unwrap();
        assert_eq!(rows[0].score1, 8.0);
    }

    #[test]
    fn test_situation_derives_average_and_status() {
        let store = seeded_store();
        store
            .record_grades("2024001", "MAT101", 8.5, 7.0, 9.0, "2024.1")
            .unwrap();

        let rows = store.student_situation("2024001").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(format!("{:.2}", rows[0].average()), "8.17");
        assert_eq!(rows[0].status(), Status::Pass);
        assert_eq!(rows[0].course_code, "MAT101");
        assert_eq!(rows[0].course_name, "Mathematics I");
    }

    #[test]
    fn test_situation_ordering() {
        let store = seeded_store();
        store.register_course("ALG100", "Abstract Algebra", 60).unwrap();
        store
            .record_grades("2024001", "MAT101", 8.0, 8.0, 8.0, "2024.1")
            .unwrap();
        store
            .record_grades("2024001", "ALG100", 7.0, 7.0, 7.0, "2024.1")
            .unwrap();
        store
            .record_grades("2024002", "FIS101", 6.0, 6.0, 6.0, "2024.1")
            .unwrap();

        // one student: course name ascending
        let rows = store.student_situation("2024001").unwrap();
        let courses: Vec<_> = rows.iter().map(|r| r.course_name.as_str()).collect();
        assert_eq!(courses, vec!["Abstract Algebra", "Mathematics I"]);

        // all students: student name, then course name
        let rows = store.all_situations().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].student_name, "Alice Martin");
        assert_eq!(rows[2].student_name, "Bruno Keller");
    }

    #[test]
    fn test_summaries_group_by_student_and_semester() {
        let store = seeded_store();
        store
            .record_grades("2024001", "MAT101", 8.0, 8.0, 8.0, "2024.1")
            .unwrap();
        store
            .record_grades("2024001", "FIS101", 5.0, 5.0, 5.0, "2024.1")
            .unwrap();
        store
            .record_grades("2024001", "MAT101", 9.0, 9.0, 9.0, "2024.2")
            .unwrap();

        let summaries = store.summaries(Some("2024001")).unwrap();
        assert_eq!(summaries.len(), 2);

        let first = summaries.iter().find(|s| s.semester == "2024.1").unwrap();
        assert_eq!(first.courses, 2);
        assert_eq!(first.passed, 1);
        assert_eq!(first.failed, 1);
        assert_eq!(first.average, 6.5);

        let second = summaries.iter().find(|s| s.semester == "2024.2").unwrap();
        assert_eq!(second.courses, 1);
        assert_eq!(second.failed, 0);
        assert_eq!(second.average, 9.0);

        // without a code, the other student's groups appear too
        store
            .record_grades("2024002", "MAT101", 7.0, 7.0, 7.0, "2024.1")
            .unwrap();
        assert_eq!(store.summaries(None).unwrap().len(), 3);
    }

    #[test]
    fn test_passed_failed_groups_partition() {
        let store = seeded_store();
        store
            .record_grades("2024001", "MAT101", 9.0, 9.0, 9.0, "2024.1")
            .unwrap();
        store
            .record_grades("2024001", "FIS101", 8.0, 8.0, 8.0, "2024.1")
            .unwrap();
        store
            .record_grades("2024002", "MAT101", 4.0, 5.0, 6.0, "2024.1")
            .unwrap();
        store
            .record_grades("2024002", "FIS101", 9.0, 9.0, 9.0, "2024.1")
            .unwrap();

        let passed = store.passed_groups().unwrap();
        assert_eq!(passed.len(), 1);
        assert_eq!(passed[0].student_code, "2024001");
        assert_eq!(passed[0].courses, 2);
        assert_eq!(passed[0].average, 8.5);

        let failed = store.failed_groups().unwrap();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].student_code, "2024002");
        assert_eq!(failed[0].failed, 1);

        // every group with records lands in exactly one list
        let total_groups = store.summaries(None).unwrap().len();
        assert_eq!(passed.len() + failed.len(), total_groups);
    }

    #[test]
    fn test_failed_groups_ordering() {
        let store = seeded_store();
        store.register_student("2024003", "Cora Diaz").unwrap();
        // Bruno: one failed course, low average
        store
            .record_grades("2024002", "MAT101", 2.0, 2.0, 2.0, "2024.1")
            .unwrap();
        // Cora: two failed courses
        store
            .record_grades("2024003", "MAT101", 5.0, 5.0, 5.0, "2024.1")
            .unwrap();
        store
            .record_grades("2024003", "FIS101", 6.0, 6.0, 6.0, "2024.1")
            .unwrap();

        let failed = store.failed_groups().unwrap();
        assert_eq!(failed.len(), 2);
        // most failed courses first
        assert_eq!(failed[0].student_code, "2024003");
        assert_eq!(failed[1].student_code, "2024002");
    }

    #[test]
    fn test_semester_stats() {
        let store = seeded_store();
        assert!(store.semester_stats("2024.1").unwrap().is_none());

        store
            .record_grades("2024001", "MAT101", 9.0, 9.0, 9.0, "2024.1")
            .unwrap();
        store
            .record_grades("2024001", "FIS101", 5.0, 5.0, 5.0, "2024.1")
            .unwrap();
        store
            .record_grades("2024002", "MAT101", 8.0, 8.0, 8.0, "2024.1")
            .unwrap();
        // a different semester must not leak in
        store
            .record_grades("2024002", "FIS101", 1.0, 1.0, 1.0, "2024.2")
            .unwrap();

        let stats = store.semester_stats("2024.1").unwrap().unwrap();
        assert_eq!(stats.students, 2);
        assert_eq!(stats.records, 3);
        assert_eq!(stats.passed, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.average, 7.33);
        assert_eq!(stats.pass_rate, 66.67);

        assert!(store.semester_stats("1999.1").unwrap().is_none());
    }

    #[test]
    fn test_reopen_persists_data() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("gradebook.db");

        let store = SqliteStore::open(&db_path).unwrap();
        store.register_student("2024001", "Alice Martin").unwrap();
        store.register_course("MAT101", "Mathematics I", 60).unwrap();
        store
            .record_grades("2024001", "MAT101", 8.0, 8.0, 8.0, "2024.1")
            .unwrap();
        store.close().unwrap();

        let store = SqliteStore::open(&db_path).unwrap();
        let counts = store.counts().unwrap();
        assert_eq!(counts.students, 1);
        assert_eq!(counts.courses, 1);
        assert_eq!(counts.grades, 1);
        store.close().unwrap();
    }
}
