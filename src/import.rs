//! Bulk import of students from a delimited text file.
//!
//! Each non-blank line is `name, mark, email, phone, extra...`. Problems with
//! individual lines are collected in an [`ImportReport`] instead of aborting
//! the run, and an unreadable file is reported the same way.

use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::validation::check_mark;
use crate::logging;
use crate::record::Student;

pub const DEFAULT_DELIMITER: char = ',';

const REQUIRED_FIELDS: usize = 4;

/// Why a line of the import file was not applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    MissingFields { found: usize },
    InvalidMark { value: String },
    /// Same name, email and phone as an existing record.
    Duplicate,
    /// Same name as an existing record but neither email nor phone match.
    NameConflict,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { found } => write!(
                f,
                "needs at least {REQUIRED_FIELDS} fields, found {found}"
            ),
            Self::InvalidMark { value } => {
                write!(f, "mark '{value}' is not a number between 0 and 10")
            }
            Self::Duplicate => write!(f, "already exists with the same data"),
            Self::NameConflict => write!(
                f,
                "name already used by a student with different email and phone"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the import file.
    pub line: usize,
    pub name: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    pub added: usize,
    pub updated: usize,
    pub skipped: Vec<SkippedLine>,
    /// Set when the file could not be read at all.
    pub read_error: Option<String>,
}

impl ImportReport {
    /// Whether the collection was modified.
    pub fn changed(&self) -> bool {
        self.added + self.updated > 0
    }
}

/// One parsed line of an import file.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRow {
    pub name: String,
    pub mark: f64,
    pub email: String,
    pub phone: String,
    pub extra: Vec<String>,
}

impl From<ImportRow> for Student {
    fn from(row: ImportRow) -> Self {
        Student::new(row.name, row.mark, row.email, row.phone).with_extra(row.extra)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Applied {
    Added,
    Updated,
}

/// Parse a single non-blank line.
///
/// Name and phone are trimmed, the email is trimmed and lower-cased, and
/// fields after the fourth are kept verbatim.
pub fn parse_line(line: &str, delimiter: char) -> Result<ImportRow, SkipReason> {
    let fields: Vec<&str> = line.trim().split(delimiter).collect();
    if fields.len() < REQUIRED_FIELDS {
        return Err(SkipReason::MissingFields {
            found: fields.len(),
        });
    }

    let raw_mark = fields[1].trim();
    let mark: f64 = raw_mark.parse().map_err(|_| SkipReason::InvalidMark {
        value: raw_mark.to_string(),
    })?;
    check_mark(mark).map_err(|_| SkipReason::InvalidMark {
        value: raw_mark.to_string(),
    })?;

    Ok(ImportRow {
        name: fields[0].trim().to_string(),
        mark,
        email: fields[2].trim().to_lowercase(),
        phone: fields[3].trim().to_string(),
        extra: fields[4..].iter().map(|field| field.to_string()).collect(),
    })
}

/// Merge a parsed row into the collection.
fn apply_row(row: ImportRow, students: &mut Vec<Student>) -> Result<Applied, SkipReason> {
    let mut name_taken = false;

    for existing in students.iter_mut().filter(|s| s.is_named(&row.name)) {
        name_taken = true;
        let same_email = existing.email == row.email;
        let same_phone = existing.phone == row.phone;

        if same_email && same_phone {
            return Err(SkipReason::Duplicate);
        }
        if same_email || same_phone {
            existing.mark = row.mark;
            existing.email = row.email;
            existing.phone = row.phone;
            existing.extra = row.extra;
            return Ok(Applied::Updated);
        }
    }

    if name_taken {
        return Err(SkipReason::NameConflict);
    }

    students.push(row.into());
    Ok(Applied::Added)
}

/// Import every line of `contents` into `students`.
pub fn import_from_str(
    contents: &str,
    students: &mut Vec<Student>,
    delimiter: char,
) -> ImportReport {
    let mut report = ImportReport::default();

    for (index, line) in contents.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = parse_line(line, delimiter).and_then(|row| apply_row(row, students));
        match outcome {
            Ok(Applied::Added) => report.added += 1,
            Ok(Applied::Updated) => report.updated += 1,
            Err(reason) => {
                let name = line
                    .trim()
                    .split(delimiter)
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();
                tracing::warn!(
                    line = line_no,
                    name = %name,
                    reason = %reason,
                    "Skipping import line"
                );
                report.skipped.push(SkippedLine {
                    line: line_no,
                    name,
                    reason,
                });
            }
        }
    }

    report
}

/// Import a delimited file into `students`.
///
/// Never fails: a missing or unreadable file is recorded in
/// [`ImportReport::read_error`] and leaves the collection untouched.
pub fn import_from_file(
    path: &Path,
    students: &mut Vec<Student>,
    delimiter: char,
) -> ImportReport {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Could not read import file");
            return ImportReport {
                read_error: Some(format!("The file {} could not be read: {e}", path.display())),
                ..ImportReport::default()
            };
        }
    };

    let report = import_from_str(&contents, students, delimiter);
    logging::log_import_summary(path, report.added, report.updated, report.skipped.len());
    report
}
