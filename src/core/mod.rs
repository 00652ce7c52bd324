//! Core business logic module
//!
//! Pure functions over student collections: validation rules plus the
//! query and mutation operations. Nothing here performs I/O.

pub mod queries;
pub mod validation;

pub use queries::{
    above_average, above_threshold, add_student, average, delete, find, sort_by_mark, Deletion,
};
pub use validation::{check_mark, check_pattern, duplicated};

#[cfg(test)]
mod validation_proptest;
