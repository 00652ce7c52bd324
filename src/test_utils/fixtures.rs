//! Test fixtures and data builders for consistent test data

use crate::record::Student;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds a student with a derived email and phone.
pub fn student(name: &str, mark: f64) -> Student {
    Student::new(
        name,
        mark,
        format!("{}@school.test", name.to_lowercase()),
        format!("555-{:04}", name.len()),
    )
}

/// A small class with mixed marks, a tie and an extras column.
pub fn sample_students() -> Vec<Student> {
    vec![
        student("Anna", 8.5),
        student("Bob", 5.0),
        student("Cleo", 9.25),
        student("Dan", 5.0).with_extra(vec!["late enrolment".to_string()]),
        student("Eve", 3.75),
    ]
}

/// Writes an import file with the given lines into `dir`.
pub fn write_import_file(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, lines.join("\n")).expect("Failed to write import fixture");
    path
}
