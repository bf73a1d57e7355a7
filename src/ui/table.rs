//! Table rendering for lists and reports.
//!
//! One renderer per report shape; all use the same rounded style so the
//! whole surface reads uniformly. Numeric columns are formatted to two
//! decimals here, at the display boundary.

use tabled::{Table, Tabled, settings::Style};

use crate::course::Course;
use crate::report::{FailedGroup, GroupSummary, PassedGroup, SemesterStats, SituationRow};
use crate::student::Student;

#[derive(Tabled)]
struct StudentRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Registered")]
    registered: String,
}

pub fn students_table(students: &[Student]) -> String {
    let rows: Vec<StudentRow> = students
        .iter()
        .map(|s| StudentRow {
            code: s.code.clone(),
            name: s.name.clone(),
            registered: s.created_at.clone(),
        })
        .collect();

    render(&rows)
}

#[derive(Tabled)]
struct CourseRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Hours")]
    hours: u32,
}

pub fn courses_table(courses: &[Course]) -> String {
    let rows: Vec<CourseRow> = courses
        .iter()
        .map(|c| CourseRow {
            code: c.code.clone(),
            name: c.name.clone(),
            hours: c.credit_hours,
        })
        .collect();

    render(&rows)
}

#[derive(Tabled)]
struct SituationDisplayRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Student")]
    student: String,
    #[tabled(rename = "Course")]
    course: String,
    #[tabled(rename = "S1")]
    s1: String,
    #[tabled(rename = "S2")]
    s2: String,
    #[tabled(rename = "S3")]
    s3: String,
    #[tabled(rename = "Average")]
    average: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Semester")]
    semester: String,
}

pub fn situation_table(rows: &[SituationRow]) -> String {
    let rows: Vec<SituationDisplayRow> = rows
        .iter()
        .map(|r| SituationDisplayRow {
            code: r.student_code.clone(),
            student: r.student_name.clone(),
            course: r.course_name.clone(),
            s1: format!("{:.2}", r.score1),
            s2: format!("{:.2}", r.score2),
            s3: format!("{:.2}", r.score3),
            average: format!("{:.2}", r.average()),
            status: r.status().to_string(),
            semester: r.semester.clone(),
        })
        .collect();

    render(&rows)
}

#[derive(Tabled)]
struct SummaryDisplayRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Student")]
    student: String,
    #[tabled(rename = "Semester")]
    semester: String,
    #[tabled(rename = "Courses")]
    courses: i64,
    #[tabled(rename = "Passed")]
    passed: i64,
    #[tabled(rename = "Failed")]
    failed: i64,
    #[tabled(rename = "Average")]
    average: String,
}

pub fn summary_table(rows: &[GroupSummary]) -> String {
    let rows: Vec<SummaryDisplayRow> = rows
        .iter()
        .map(|r| SummaryDisplayRow {
            code: r.student_code.clone(),
            student: r.student_name.clone(),
            semester: r.semester.clone(),
            courses: r.courses,
            passed: r.passed,
            failed: r.failed,
            average: format!("{:.2}", r.average),
        })
        .collect();

    render(&rows)
}

#[derive(Tabled)]
struct PassedDisplayRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Student")]
    student: String,
    #[tabled(rename = "Semester")]
    semester: String,
    #[tabled(rename = "Courses")]
    courses: i64,
    #[tabled(rename = "Average")]
    average: String,
}

pub fn passed_table(rows: &[PassedGroup]) -> String {
    let rows: Vec<PassedDisplayRow> = rows
        .iter()
        .map(|r| PassedDisplayRow {
            code: r.student_code.clone(),
            student: r.student_name.clone(),
            semester: r.semester.clone(),
            courses: r.courses,
            average: format!("{:.2}", r.average),
        })
        .collect();

    render(&rows)
}

#[derive(Tabled)]
struct FailedDisplayRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Student")]
    student: String,
    #[tabled(rename = "Semester")]
    semester: String,
    #[tabled(rename = "Failed")]
    failed: i64,
    #[tabled(rename = "Average")]
    average: String,
}

pub fn failed_table(rows: &[FailedGroup]) -> String {
    let rows: Vec<FailedDisplayRow> = rows
        .iter()
        .map(|r| FailedDisplayRow {
            code: r.student_code.clone(),
            student: r.student_name.clone(),
            semester: r.semester.clone(),
            failed: r.failed,
            average: format!("{:.2}", r.average),
        })
        .collect();

    render(&rows)
}

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn semester_stats_table(stats: &SemesterStats) -> String {
    let rows = vec![
        MetricRow {
            metric: "Semester".to_string(),
            value: stats.semester.clone(),
        },
        MetricRow {
            metric: "Students".to_string(),
            value: stats.students.to_string(),
        },
        MetricRow {
            metric: "Grade records".to_string(),
            value: stats.records.to_string(),
        },
        MetricRow {
            metric: "Passed".to_string(),
            value: stats.passed.to_string(),
        },
        MetricRow {
            metric: "Failed".to_string(),
            value: stats.failed.to_string(),
        },
        MetricRow {
            metric: "Overall average".to_string(),
            value: format!("{:.2}", stats.average),
        },
        MetricRow {
            metric: "Pass rate".to_string(),
            value: format!("{:.2}%", stats.pass_rate),
        },
    ];

    render(&rows)
}

fn render<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    Table::new(rows).with(Style::rounded()).to_string()
}
