use colored::Colorize;
use std::fmt;

#[derive(Debug)]
pub enum StudentError {
    InvalidMark {
        mark: f64,
    },
    DuplicateStudent {
        name: String,
    },
    StudentNotFound {
        pattern: String,
    },
    InvalidArgument {
        message: String,
    },
    IoError {
        operation: String,
        path: Option<String>,
        source: std::io::Error,
    },
    Other(anyhow::Error),
}

impl StudentError {
    pub fn invalid_mark(mark: f64) -> Self {
        Self::InvalidMark { mark }
    }

    pub fn duplicate_student(name: impl Into<String>) -> Self {
        Self::DuplicateStudent { name: name.into() }
    }

    pub fn student_not_found(pattern: impl Into<String>) -> Self {
        Self::StudentNotFound {
            pattern: pattern.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn io_error(
        operation: impl Into<String>,
        path: Option<String>,
        source: std::io::Error,
    ) -> Self {
        Self::IoError {
            operation: operation.into(),
            path,
            source,
        }
    }
}

impl fmt::Display for StudentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMark { mark } => {
                writeln!(
                    f,
                    "{} Invalid mark: {}",
                    "✗".red().bold(),
                    mark.to_string().yellow()
                )?;
                writeln!(f, "  {} Marks must be between 0 and 10", "→".blue())?;
                Ok(())
            }
            Self::DuplicateStudent { name } => {
                writeln!(
                    f,
                    "{} Student already exists: {}",
                    "✗".red().bold(),
                    name.yellow()
                )?;
                Ok(())
            }
            Self::StudentNotFound { pattern } => {
                writeln!(
                    f,
                    "{} No student matches: {}",
                    "✗".red().bold(),
                    pattern.yellow()
                )?;
                Ok(())
            }
            Self::InvalidArgument { message } => {
                writeln!(f, "{} Invalid argument", "✗".red().bold())?;
                writeln!(f, "  {} {}", "→".blue(), message)?;
                Ok(())
            }
            Self::IoError {
                operation,
                path,
                source,
            } => {
                writeln!(
                    f,
                    "{} I/O error during: {}",
                    "✗".red().bold(),
                    operation.yellow()
                )?;
                if let Some(path) = path {
                    writeln!(f, "  {} Path: {}", "→".blue(), path)?;
                }
                writeln!(f, "  {} Error: {}", "→".blue(), source)?;
                Ok(())
            }
            Self::Other(err) => write!(f, "{} {:#}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for StudentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => Some(source),
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StudentError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            operation: "unknown".to_string(),
            path: None,
            source: err,
        }
    }
}

impl From<anyhow::Error> for StudentError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

pub type Result<T> = std::result::Result<T, StudentError>;
