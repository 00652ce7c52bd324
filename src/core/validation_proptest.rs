//! Property-based tests for validation logic
//!
//! These properties check the validation functions against every input in
//! the generated ranges rather than a handful of hand-picked values.

#[cfg(test)]
mod tests {
    use crate::core::validation::*;
    use crate::error::StudentError;
    use crate::record::Student;
    use proptest::prelude::*;

    prop_compose! {
        fn student_name()(name in "[A-Za-z][A-Za-z ]{0,15}") -> String {
            name
        }
    }

    proptest! {
        #[test]
        fn prop_check_mark_matches_range(mark in -20.0f64..20.0) {
            let result = check_mark(mark);
            let in_range = (0.0..=10.0).contains(&mark);
            prop_assert_eq!(result.is_ok(), in_range);
            if !in_range {
                let is_invalid_mark = matches!(result, Err(StudentError::InvalidMark { .. }));
                prop_assert!(is_invalid_mark);
            }
        }

        #[test]
        fn prop_valid_marks_accepted(mark in 0.0f64..=10.0) {
            prop_assert!(check_mark(mark).is_ok());
        }

        #[test]
        fn prop_duplicated_case_insensitive(name in student_name()) {
            let students = vec![Student::new(name.clone(), 5.0, "e@x.com", "1")];
            prop_assert!(duplicated(&name.to_uppercase(), &students).is_err());
            prop_assert!(duplicated(&name.to_lowercase(), &students).is_err());
        }

        #[test]
        fn prop_pattern_length_threshold(pattern in "\\PC{0,8}") {
            let long_enough = pattern.chars().count() >= MIN_PATTERN_LEN;
            prop_assert_eq!(check_pattern(&pattern).is_ok(), long_enough);
        }
    }
}
