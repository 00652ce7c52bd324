//! Custom assertion helpers for common test patterns

use crate::record::Student;
use std::path::Path;

/// Asserts that a path exists and is a file
pub fn assert_file_exists<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    assert!(
        path.is_file(),
        "Expected file to exist at path: {}",
        path.display()
    );
}

/// Asserts that marks never increase along the collection
pub fn assert_sorted_by_mark(students: &[Student]) {
    for pair in students.windows(2) {
        assert!(
            pair[0].mark >= pair[1].mark,
            "Expected {} ({}) to come after {} ({})",
            pair[0].name,
            pair[0].mark,
            pair[1].name,
            pair[1].mark
        );
    }
}

/// Asserts that a Result is Ok and returns the value
pub fn assert_ok<T, E>(result: Result<T, E>) -> T
where
    E: std::fmt::Debug,
{
    match result {
        Ok(value) => value,
        Err(e) => panic!("Expected Ok result, but got Err: {e:?}"),
    }
}
