//! Query and mutation operations over an in-memory collection
//!
//! Every function here takes the collection by reference and returns a new
//! derived collection; the caller decides whether to persist the result.

use std::cmp::Ordering;

use crate::core::validation::{check_mark, check_pattern, duplicated};
use crate::error::{Result, StudentError};
use crate::record::Student;

/// Outcome of a delete: the records that survived and how many were removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Deletion {
    pub remaining: Vec<Student>,
    pub removed: usize,
}

/// Returns the students ordered by descending mark.
///
/// The sort is stable, so students with equal marks keep their relative
/// order from the input.
pub fn sort_by_mark(students: &[Student]) -> Vec<Student> {
    let mut ordered = students.to_vec();
    ordered.sort_by(|a, b| b.mark.partial_cmp(&a.mark).unwrap_or(Ordering::Equal));
    ordered
}

/// Arithmetic mean of all marks, or `0.0` for an empty collection.
pub fn average(students: &[Student]) -> f64 {
    if students.is_empty() {
        tracing::warn!("Not enough marks provided to compute an average");
        return 0.0;
    }

    let total: f64 = students.iter().map(|student| student.mark).sum();
    total / students.len() as f64
}

/// Students whose mark is at least `threshold`, in their original order.
pub fn above_threshold(students: &[Student], threshold: f64) -> Vec<Student> {
    students
        .iter()
        .filter(|student| student.mark >= threshold)
        .cloned()
        .collect()
}

/// Finds every student whose name contains `pattern`, ignoring case.
pub fn find(pattern: &str, students: &[Student]) -> Result<Vec<Student>> {
    check_pattern(pattern)?;

    let matches: Vec<Student> = students
        .iter()
        .filter(|student| student.name_contains(pattern))
        .cloned()
        .collect();

    if matches.is_empty() {
        return Err(StudentError::student_not_found(pattern));
    }
    Ok(matches)
}

/// Students at or above the class average, best mark first.
pub fn above_average(students: &[Student]) -> Vec<Student> {
    let mean = average(students);
    sort_by_mark(students)
        .into_iter()
        .filter(|student| student.mark >= mean)
        .collect()
}

/// Removes every student whose name contains `pattern`, ignoring case.
pub fn delete(students: &[Student], pattern: &str) -> Result<Deletion> {
    check_pattern(pattern)?;

    let remaining: Vec<Student> = students
        .iter()
        .filter(|student| !student.name_contains(pattern))
        .cloned()
        .collect();

    let removed = students.len() - remaining.len();
    if removed == 0 {
        return Err(StudentError::student_not_found(pattern));
    }

    tracing::info!(pattern = pattern, count = removed, "Students deleted");
    Ok(Deletion { remaining, removed })
}

/// Appends a new student after validating its mark and name.
pub fn add_student(students: &mut Vec<Student>, student: Student) -> Result<()> {
    check_mark(student.mark)?;
    duplicated(&student.name, students)?;

    tracing::debug!(name = %student.name, "Student added");
    students.push(student);
    Ok(())
}
