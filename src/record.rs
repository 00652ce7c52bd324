//! The student record stored in a data file.

use serde::{Deserialize, Serialize};

/// One student's marks and contact details.
///
/// Names are unique within a collection when compared case-insensitively.
/// `extra` holds any trailing free-form fields carried over from an import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub mark: f64,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub extra: Vec<String>,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        mark: f64,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mark,
            email: email.into(),
            phone: phone.into(),
            extra: Vec::new(),
        }
    }

    pub fn with_extra(mut self, extra: Vec<String>) -> Self {
        self.extra = extra;
        self
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, pattern: &str) -> bool {
        self.name.to_lowercase().contains(&pattern.to_lowercase())
    }
}
