//! Pure validation logic for marks, names and search patterns
//!
//! These checks run before any record is inserted or any collection is
//! scanned, and never touch the filesystem.

use crate::error::{Result, StudentError};
use crate::record::Student;

pub const MIN_MARK: f64 = 0.0;
pub const MAX_MARK: f64 = 10.0;

/// Shortest pattern accepted by search and delete.
pub const MIN_PATTERN_LEN: usize = 3;

/// Validates that a mark lies within `[0, 10]`.
pub fn check_mark(mark: f64) -> Result<()> {
    if mark.is_nan() || mark < MIN_MARK || mark > MAX_MARK {
        return Err(StudentError::invalid_mark(mark));
    }
    Ok(())
}

/// Fails if a student with the same name (ignoring case) is already present.
pub fn duplicated(name: &str, students: &[Student]) -> Result<()> {
    if students.iter().any(|student| student.is_named(name)) {
        return Err(StudentError::duplicate_student(name));
    }
    Ok(())
}

/// Validates a search/delete pattern length.
pub fn check_pattern(pattern: &str) -> Result<()> {
    if pattern.chars().count() < MIN_PATTERN_LEN {
        return Err(StudentError::invalid_argument(format!(
            "Pattern '{pattern}' is too short: provide at least {MIN_PATTERN_LEN} characters"
        )));
    }
    Ok(())
}
