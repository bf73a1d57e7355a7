//! Interactive menu - a synchronous command dispatcher over the store.
//!
//! One iteration per request: read a numeric choice, collect the fields
//! the operation needs through sequential prompts, invoke it, print the
//! result. Operation errors are caught at the dispatch boundary and
//! reported; only EOF or the exit option ends the loop.

use std::io::{self, BufRead, Write};

use crate::grade::{Status, average};
use crate::storage::SqliteStore;
use crate::{Error, Result, sample, ui};

/// Run the menu loop until the user exits or stdin closes.
pub fn run(store: &SqliteStore) -> Result<()> {
    loop {
        print_menu();
        let Some(choice) = prompt("Choose an option")? else {
            break;
        };

        let outcome = match choice.as_str() {
            "1" => add_student(store),
            "2" => list_students(store),
            "3" => add_course(store),
            "4" => list_courses(store),
            "5" => add_grades(store),
            "6" => update_grades(store),
            "7" => situation_of_one(store),
            "8" => situation_of_all(store),
            "9" => summary_of_one(store),
            "10" => summary_of_all(store),
            "11" => list_passed(store),
            "12" => list_failed(store),
            "13" => semester_stats(store),
            "14" => load_sample_data(store),
            "0" => break,
            _ => {
                ui::error("Invalid option, try again");
                Ok(())
            }
        };

        if let Err(err) = outcome {
            ui::error(&err.to_string());
        }

        if !pause()? {
            break;
        }
    }

    println!("\nShutting down...");
    Ok(())
}

fn print_menu() {
    println!();
    println!("{}", "=".repeat(50));
    ui::header("STUDENT GRADE MANAGEMENT");
    println!("{}", "=".repeat(50));
    println!(" 1.  Add student");
    println!(" 2.  List students");
    println!(" 3.  Add course");
    println!(" 4.  List courses");
    println!(" 5.  Add grades");
    println!(" 6.  Update grades");
    println!(" 7.  Situation of one student");
    println!(" 8.  Situation of all students");
    println!(" 9.  Summary of one student");
    println!(" 10. Summary of all students");
    println!(" 11. List passed");
    println!(" 12. List failed");
    println!(" 13. Semester statistics");
    println!(" 14. Load sample data");
    println!(" 0.  Exit");
    println!("{}", "=".repeat(50));
}

// ========== Students ==========

fn add_student(store: &SqliteStore) -> Result<()> {
    ui::section("Add student");
    let Some(code) = prompt("Enrollment code")? else {
        return Ok(());
    };
    let Some(name) = prompt("Full name")? else {
        return Ok(());
    };

    store.register_student(&code, &name)?;
    ui::success(&format!("Student {name} ({code}) registered"));
    Ok(())
}

fn list_students(store: &SqliteStore) -> Result<()> {
    ui::section("Students");
    let students = store.list_students()?;
    if students.is_empty() {
        println!("{}", ui::dim("No students registered."));
        return Ok(());
    }

    println!("{}", ui::students_table(&students));
    println!("{}", ui::dim(&format!("Total: {} student(s)", students.len())));
    Ok(())
}

// ========== Courses ==========

fn add_course(store: &SqliteStore) -> Result<()> {
    ui::section("Add course");
    let Some(code) = prompt("Course code")? else {
        return Ok(());
    };
    let Some(name) = prompt("Name")? else {
        return Ok(());
    };
    let Some(hours) = prompt_u32("Credit hours")? else {
        return Ok(());
    };

    store.register_course(&code, &name, hours)?;
    ui::success(&format!("Course {name} ({code}) registered"));
    Ok(())
}

fn list_courses(store: &SqliteStore) -> Result<()> {
    ui::section("Courses");
    let courses = store.list_courses()?;
    if courses.is_empty() {
        println!("{}", ui::dim("No courses registered."));
        return Ok(());
    }

    println!("{}", ui::courses_table(&courses));
    println!("{}", ui::dim(&format!("Total: {} course(s)", courses.len())));
    Ok(())
}

// ========== Grades ==========

fn add_grades(store: &SqliteStore) -> Result<()> {
    ui::section("Add grades");
    let Some(student_code) = prompt("Student enrollment code")? else {
        return Ok(());
    };
    let Some(course_code) = prompt("Course code")? else {
        return Ok(());
    };
    let Some(s1) = prompt_f64("Score 1 (0-10)")? else {
        return Ok(());
    };
    let Some(s2) = prompt_f64("Score 2 (0-10)")? else {
        return Ok(());
    };
    let Some(s3) = prompt_f64("Score 3 (0-10)")? else {
        return Ok(());
    };
    let Some(semester) = prompt("Semester (e.g. 2024.1)")? else {
        return Ok(());
    };

    store.record_grades(&student_code, &course_code, s1, s2, s3, &semester)?;

    let avg = average(s1, s2, s3);
    let status = Status::from_average(avg);
    ui::success(&format!("Grades recorded. Average: {avg:.2} - Status: {status}"));
    Ok(())
}

fn update_grades(store: &SqliteStore) -> Result<()> {
    ui::section("Update grades");
    let Some(student_code) = prompt("Student enrollment code")? else {
        return Ok(());
    };
    let Some(course_code) = prompt("Course code")? else {
        return Ok(());
    };
    let Some(semester) = prompt("Semester (e.g. 2024.1)")? else {
        return Ok(());
    };
    let Some(s1) = prompt_f64("New score 1 (0-10)")? else {
        return Ok(());
    };
    let Some(s2) = prompt_f64("New score 2 (0-10)")? else {
        return Ok(());
    };
    let Some(s3) = prompt_f64("New score 3 (0-10)")? else {
        return Ok(());
    };

    store.update_grades(&student_code, &course_code, &semester, s1, s2, s3)?;

    let avg = average(s1, s2, s3);
    let status = Status::from_average(avg);
    ui::success(&format!("Grades updated. New average: {avg:.2} - Status: {status}"));
    Ok(())
}

// ========== Reports ==========

fn situation_of_one(store: &SqliteStore) -> Result<()> {
    ui::section("Student situation");
    let Some(code) = prompt("Enrollment code")? else {
        return Ok(());
    };

    let student = store
        .find_student(&code)?
        .ok_or_else(|| Error::NotFound(format!("no student with code '{code}'")))?;

    let rows = store.student_situation(&code)?;
    if rows.is_empty() {
        println!("{}", ui::dim(&format!("No grade records for {}.", student.name)));
        return Ok(());
    }

    println!("{}", ui::situation_table(&rows));
    Ok(())
}

fn situation_of_all(store: &SqliteStore) -> Result<()> {
    ui::section("Situation of all students");
    let rows = store.all_situations()?;
    if rows.is_empty() {
        println!("{}", ui::dim("No grade records found."));
        return Ok(());
    }

    println!("{}", ui::situation_table(&rows));
    Ok(())
}

fn summary_of_one(store: &SqliteStore) -> Result<()> {
    ui::section("Student summary");
    let Some(code) = prompt("Enrollment code")? else {
        return Ok(());
    };

    let student = store
        .find_student(&code)?
        .ok_or_else(|| Error::NotFound(format!("no student with code '{code}'")))?;

    let rows = store.summaries(Some(&code))?;
    if rows.is_empty() {
        println!("{}", ui::dim(&format!("No grade records for {}.", student.name)));
        return Ok(());
    }

    println!("{}", ui::summary_table(&rows));
    Ok(())
}

fn summary_of_all(store: &SqliteStore) -> Result<()> {
    ui::section("Summary of all students");
    let rows = store.summaries(None)?;
    if rows.is_empty() {
        println!("{}", ui::dim("No grade records found."));
        return Ok(());
    }

    println!("{}", ui::summary_table(&rows));
    Ok(())
}

fn list_passed(store: &SqliteStore) -> Result<()> {
    ui::section("Passed students");
    let groups = store.passed_groups()?;
    if groups.is_empty() {
        println!("{}", ui::dim("No fully passed (student, semester) groups."));
        return Ok(());
    }

    println!("{}", ui::passed_table(&groups));
    Ok(())
}

fn list_failed(store: &SqliteStore) -> Result<()> {
    ui::section("Failed students");
    let groups = store.failed_groups()?;
    if groups.is_empty() {
        println!("{}", ui::dim("No (student, semester) groups with failed courses."));
        return Ok(());
    }

    println!("{}", ui::failed_table(&groups));
    Ok(())
}

fn semester_stats(store: &SqliteStore) -> Result<()> {
    ui::section("Semester statistics");
    let Some(semester) = prompt("Semester (e.g. 2024.1)")? else {
        return Ok(());
    };

    match store.semester_stats(&semester)? {
        Some(stats) => println!("{}", ui::semester_stats_table(&stats)),
        None => ui::warn(&format!("No grade records found for semester '{semester}'")),
    }
    Ok(())
}

// ========== Sample Data ==========

fn load_sample_data(store: &SqliteStore) -> Result<()> {
    ui::section("Load sample data");
    let Some(answer) = prompt("Insert sample data? (y/n)")? else {
        return Ok(());
    };
    if !answer.eq_ignore_ascii_case("y") {
        println!("{}", ui::dim("Skipped."));
        return Ok(());
    }

    let stats = sample::load(store)?;
    ui::success("Sample data loaded");
    ui::summary_row("Students inserted:", &stats.students.to_string());
    ui::summary_row("Courses inserted:", &stats.courses.to_string());
    ui::summary_row("Grade records inserted:", &stats.grades.to_string());
    Ok(())
}

// ========== Prompt Helpers ==========

/// Print a prompt and read one trimmed line. `None` means EOF.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_f64(label: &str) -> Result<Option<f64>> {
    let Some(raw) = prompt(label)? else {
        return Ok(None);
    };
    let value = raw
        .parse::<f64>()
        .map_err(|_| Error::InvalidInput(format!("'{raw}' is not a number")))?;
    Ok(Some(value))
}

fn prompt_u32(label: &str) -> Result<Option<u32>> {
    let Some(raw) = prompt(label)? else {
        return Ok(None);
    };
    let value = raw
        .parse::<u32>()
        .map_err(|_| Error::InvalidInput(format!("'{raw}' is not a non-negative integer")))?;
    Ok(Some(value))
}

/// Wait for ENTER between iterations; `false` means stdin closed.
fn pause() -> Result<bool> {
    print!("\nPress ENTER to continue...");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    Ok(read > 0)
}
