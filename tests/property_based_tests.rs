//! Property-based tests for queries, import and persistence
//!
//! Collections are generated with unique names and marks in `[0, 10]`, the
//! same shape the validation layer guarantees for stored data.

use proptest::prelude::*;
use quickcheck::QuickCheck;
use student_records::core::{above_average, above_threshold, average, delete, find, sort_by_mark};
use student_records::import::{import_from_str, SkipReason};
use student_records::store::RecordStore;
use student_records::{Student, StudentError};
use tempfile::TempDir;

prop_compose! {
    fn arb_mark()(tenths in 0u32..=100) -> f64 {
        f64::from(tenths) / 10.0
    }
}

prop_compose! {
    fn arb_extra()(extra in prop::collection::vec("[a-z ]{0,8}", 0..3)) -> Vec<String> {
        extra
    }
}

prop_compose! {
    fn arb_students()(
        rows in prop::collection::vec((arb_mark(), "[a-z]{1,6}@x\\.com", "[0-9]{3,8}", arb_extra()), 0..20)
    ) -> Vec<Student> {
        rows.into_iter()
            .enumerate()
            .map(|(i, (mark, email, phone, extra))| {
                Student::new(format!("Student{i:02}"), mark, email, phone).with_extra(extra)
            })
            .collect()
    }
}

fn sorted_names(students: &[Student]) -> Vec<String> {
    let mut names: Vec<String> = students.iter().map(|s| s.name.clone()).collect();
    names.sort();
    names
}

proptest! {
    #[test]
    fn prop_sort_is_ordered_permutation(students in arb_students()) {
        let sorted = sort_by_mark(&students);
        prop_assert_eq!(sorted_names(&sorted), sorted_names(&students));
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].mark >= pair[1].mark);
        }
    }

    #[test]
    fn prop_sort_is_stable(students in arb_students()) {
        let sorted = sort_by_mark(&students);
        let position = |name: &str| students.iter().position(|s| s.name == name).unwrap();
        for pair in sorted.windows(2) {
            if pair[0].mark == pair[1].mark {
                prop_assert!(position(&pair[0].name) < position(&pair[1].name));
            }
        }
    }

    #[test]
    fn prop_threshold_is_ordered_subset(students in arb_students(), threshold in arb_mark()) {
        let expected: Vec<Student> = students
            .iter()
            .filter(|s| s.mark >= threshold)
            .cloned()
            .collect();
        prop_assert_eq!(above_threshold(&students, threshold), expected);
    }

    #[test]
    fn prop_above_average_subset_of_sorted(students in arb_students()) {
        let mean = average(&students);
        let result = above_average(&students);
        prop_assert!(result.iter().all(|s| s.mark >= mean));
        let expected: Vec<Student> = sort_by_mark(&students)
            .into_iter()
            .filter(|s| s.mark >= mean)
            .collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_find_and_delete_partition(students in arb_students(), index in 0usize..20) {
        let pattern = format!("student{:02}", index);
        match find(&pattern, &students) {
            Ok(found) => {
                let deletion = delete(&students, &pattern).unwrap();
                prop_assert_eq!(deletion.removed, found.len());
                prop_assert_eq!(deletion.remaining.len() + found.len(), students.len());
            }
            Err(StudentError::StudentNotFound { .. }) => {
                let is_not_found = matches!(
                    delete(&students, &pattern),
                    Err(StudentError::StudentNotFound { .. })
                );
                prop_assert!(is_not_found);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn prop_save_load_roundtrip(students in arb_students()) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("students.dat"));

        store.save(&students).unwrap();
        let loaded = store.load();
        prop_assert_eq!(&loaded, &students);

        store.save(&loaded).unwrap();
        prop_assert_eq!(store.load(), students);
    }

    #[test]
    fn prop_reimport_is_noop(students in arb_students()) {
        let lines: Vec<String> = students
            .iter()
            .map(|s| format!("{},{},{},{}", s.name, s.mark, s.email, s.phone))
            .collect();
        let contents = lines.join("\n");

        let mut imported = Vec::new();
        let first = import_from_str(&contents, &mut imported, ',');
        prop_assert_eq!(first.added, students.len());

        let snapshot = imported.clone();
        let second = import_from_str(&contents, &mut imported, ',');
        prop_assert_eq!(second.added + second.updated, 0);
        prop_assert!(second.skipped.iter().all(|s| s.reason == SkipReason::Duplicate));
        prop_assert_eq!(imported, snapshot);
    }
}

/// Property: the average of valid marks stays within the mark range
#[test]
fn prop_average_within_bounds() {
    fn check(raw: Vec<u8>) -> bool {
        let students: Vec<Student> = raw
            .iter()
            .enumerate()
            .map(|(i, m)| Student::new(format!("S{i}"), f64::from(m % 101) / 10.0, "e", "p"))
            .collect();
        let mean = average(&students);
        if students.is_empty() {
            mean == 0.0
        } else {
            (0.0..=10.0).contains(&mean)
        }
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(check as fn(Vec<u8>) -> bool);
}
