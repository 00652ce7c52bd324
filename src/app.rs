//! Command execution for the `students` binary.
//!
//! Each [`Action`] loads the collection, runs one operation, renders the
//! result and, for mutating actions, saves the collection back.

use std::path::PathBuf;

use crate::core::{
    above_average, above_threshold, add_student, average, delete, find, sort_by_mark,
};
use crate::display::{self, OutputFormat};
use crate::error::{Result, StudentError};
use crate::import::{self, DEFAULT_DELIMITER};
use crate::record::Student;
use crate::store::RecordStore;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Sort,
    Average,
    Threshold(f64),
    Search(String),
    AboveAverage,
    Delete(String),
    Import(PathBuf),
    Add(Student),
}

impl Action {
    /// Build an [`Action::Add`] from `NAME MARK EMAIL PHONE [EXTRA]...`.
    pub fn add_from_fields(fields: &[String]) -> Result<Self> {
        let [name, mark, email, phone, extra @ ..] = fields else {
            return Err(StudentError::invalid_argument(
                "Adding a student needs NAME MARK EMAIL PHONE",
            ));
        };

        let mark: f64 = mark.trim().parse().map_err(|_| {
            StudentError::invalid_argument(format!("Mark '{mark}' is not a number"))
        })?;

        let student = Student::new(
            name.trim(),
            mark,
            email.trim().to_lowercase(),
            phone.trim(),
        )
        .with_extra(extra.to_vec());
        Ok(Self::Add(student))
    }

    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::Delete(_) | Self::Import(_) | Self::Add(_))
    }
}

/// Runs actions against one data file.
pub struct StudentsApp {
    store: RecordStore,
    format: OutputFormat,
    delimiter: char,
}

impl StudentsApp {
    pub fn new(store: RecordStore, format: OutputFormat) -> Self {
        Self {
            store,
            format,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Execute `action` and return the text to print.
    pub fn execute(&self, action: Action) -> Result<String> {
        let students = self.store.load();
        tracing::debug!(
            action = ?action,
            mutating = action.is_mutating(),
            count = students.len(),
            "Executing action"
        );

        match action {
            Action::Sort => self.list("Students by mark", &sort_by_mark(&students)),
            Action::Average => {
                let mean = average(&students);
                match self.format {
                    OutputFormat::Text => Ok(display::render_average(mean, students.len())),
                    OutputFormat::Json => display::render_json(&serde_json::json!({
                        "average": mean,
                        "count": students.len(),
                    })),
                }
            }
            Action::Threshold(threshold) => self.list(
                &format!("Students with mark >= {threshold}"),
                &above_threshold(&students, threshold),
            ),
            Action::Search(pattern) => {
                let found = find(&pattern, &students)?;
                self.list(&format!("Students matching '{pattern}'"), &found)
            }
            Action::AboveAverage => self.list(
                "Students at or above the average",
                &above_average(&students),
            ),
            Action::Delete(pattern) => {
                let deletion = delete(&students, &pattern)?;
                self.persist(&deletion.remaining)?;
                match self.format {
                    OutputFormat::Text => Ok(display::render_deleted(deletion.removed)),
                    OutputFormat::Json => {
                        display::render_json(&serde_json::json!({ "deleted": deletion.removed }))
                    }
                }
            }
            Action::Import(path) => {
                let mut students = students;
                let report = import::import_from_file(&path, &mut students, self.delimiter);
                if report.changed() {
                    self.persist(&students)?;
                }
                match self.format {
                    OutputFormat::Text => Ok(display::render_import_report(&report)),
                    OutputFormat::Json => display::render_json(&report),
                }
            }
            Action::Add(student) => {
                let mut students = students;
                let name = student.name.clone();
                add_student(&mut students, student)?;
                self.persist(&students)?;
                match self.format {
                    OutputFormat::Text => Ok(format!("Student {name} added\n")),
                    OutputFormat::Json => display::render_json(&serde_json::json!({ "added": name })),
                }
            }
        }
    }

    fn list(&self, title: &str, students: &[Student]) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(display::render_students(title, students)),
            OutputFormat::Json => display::render_json(students),
        }
    }

    fn persist(&self, students: &[Student]) -> Result<()> {
        self.store.save(students).inspect_err(|e| {
            tracing::warn!(
                path = %self.store.path().display(),
                error = %e,
                "Student records were not saved"
            );
        })
    }
}
