//! Persistence of a student collection in a binary data file.
//!
//! The data file is the bincode encoding of the whole collection. It is
//! rewritten in full on every save; there is no index and no partial update.

use anyhow::Context;
use bincode::Options;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::ConfigResolver;
use crate::error::Result;
use crate::logging;
use crate::record::Student;
use crate::utils::atomic_file;

/// Upper bound on the bytes a decode may consume. Guards against corrupt
/// length prefixes asking for huge allocations.
const MAX_DATA_FILE_BYTES: u64 = 64 * 1024 * 1024;

fn codec() -> impl Options {
    bincode::DefaultOptions::new().with_limit(MAX_DATA_FILE_BYTES)
}

/// Reads and writes the student collection at a fixed path.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for the data file named by a config file.
    pub fn from_config(resolver: &ConfigResolver) -> Self {
        Self::new(resolver.resolve())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored collection.
    ///
    /// A missing file yields an empty collection. So does a corrupt or
    /// truncated one, after logging a warning.
    pub fn load(&self) -> Vec<Student> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No data file yet, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Could not read data file, starting with an empty list"
                );
                return Vec::new();
            }
        };

        match codec().deserialize::<Vec<Student>>(&bytes) {
            Ok(students) => {
                logging::log_records_loaded(&self.path, students.len());
                students
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Data file is corrupt, starting with an empty list"
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the data file with `students`.
    pub fn save(&self, students: &[Student]) -> Result<()> {
        let bytes = codec()
            .serialize(students)
            .context("Failed to encode student records")?;

        atomic_file::write_atomic(&self.path, &bytes).with_context(|| {
            format!("Failed to save student records to {}", self.path.display())
        })?;

        logging::log_records_saved(&self.path, students.len());
        Ok(())
    }
}
