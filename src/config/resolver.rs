use std::fs;
use std::path::{Path, PathBuf};

use crate::logging;

pub const DEFAULT_CONFIG_FILE: &str = "students.cfg";
pub const DEFAULT_DATA_FILE: &str = "students.dat";

const FILE_KEY: &str = "file";

/// Resolves the data file named by a `students.cfg` style config file.
///
/// The config file holds a single `file=<data-filename>` line. Every
/// malformed state falls back to [`DEFAULT_DATA_FILE`]; resolution never
/// fails.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    config_path: PathBuf,
}

impl ConfigResolver {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Path of the data file, relative names anchored at the config file's directory.
    pub fn resolve(&self) -> PathBuf {
        let filename = resolve_data_filename(&self.config_path);
        let data_path = PathBuf::from(&filename);
        if data_path.is_absolute() {
            return data_path;
        }

        match self.config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(data_path),
            _ => data_path,
        }
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}

/// Reads the data filename from `config_path`, creating the file with the
/// default entry when it does not exist yet.
pub fn resolve_data_filename(config_path: &Path) -> String {
    if !config_path.exists() {
        let contents = format!("{FILE_KEY}={DEFAULT_DATA_FILE}");
        match fs::write(config_path, contents) {
            Ok(()) => logging::log_config_created(config_path, DEFAULT_DATA_FILE),
            Err(e) => tracing::warn!(
                path = %config_path.display(),
                error = %e,
                "Could not create config file, using default data file"
            ),
        }
        return DEFAULT_DATA_FILE.to_string();
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(
                path = %config_path.display(),
                error = %e,
                "Could not read config file, using default data file"
            );
            return DEFAULT_DATA_FILE.to_string();
        }
    };

    match parse_data_filename(&contents) {
        Some(filename) => {
            tracing::debug!(file = %filename, "Data file resolved from config");
            filename
        }
        None => {
            tracing::warn!(
                path = %config_path.display(),
                "Config file has no usable 'file=' entry, using default data file"
            );
            DEFAULT_DATA_FILE.to_string()
        }
    }
}

/// Extracts the filename from the first `key=value` line of a config file.
///
/// Returns `None` when the first pair is missing, malformed, keyed by
/// anything other than `file`, or has an empty value.
pub fn parse_data_filename(contents: &str) -> Option<String> {
    let line = contents.lines().map(str::trim).find(|l| !l.is_empty())?;
    let (key, value) = line.split_once('=')?;

    if key.trim() != FILE_KEY {
        return None;
    }

    value.split_whitespace().next().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_simple() {
        assert_eq!(
            parse_data_filename("file=records.dat"),
            Some("records.dat".to_string())
        );
    }

    #[test]
    fn test_parse_takes_first_token() {
        assert_eq!(
            parse_data_filename("file =  a.dat trailing words\n"),
            Some("a.dat".to_string())
        );
    }

    #[test]
    fn test_parse_skips_leading_blank_lines() {
        assert_eq!(
            parse_data_filename("\n\n  file=b.dat\n"),
            Some("b.dat".to_string())
        );
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(parse_data_filename(""), None);
        assert_eq!(parse_data_filename("   \n"), None);
        assert_eq!(parse_data_filename("file"), None);
        assert_eq!(parse_data_filename("file=   "), None);
        assert_eq!(parse_data_filename("data=x.dat"), None);
        assert_eq!(parse_data_filename("other=x\nfile=y.dat"), None);
    }

    #[test]
    fn test_missing_config_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("students.cfg");

        let filename = resolve_data_filename(&config_path);
        assert_eq!(filename, DEFAULT_DATA_FILE);

        let written = fs::read_to_string(&config_path).unwrap();
        assert_eq!(written, "file=students.dat");
    }

    #[test]
    fn test_existing_config_is_read() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("students.cfg");
        fs::write(&config_path, "file=class_b.dat\n").unwrap();

        assert_eq!(resolve_data_filename(&config_path), "class_b.dat");
    }

    #[test]
    fn test_empty_config_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("students.cfg");
        fs::write(&config_path, "").unwrap();

        assert_eq!(resolve_data_filename(&config_path), DEFAULT_DATA_FILE);
        // an existing file is never rewritten
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "");
    }

    #[test]
    fn test_resolver_anchors_relative_paths() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("students.cfg");
        fs::write(&config_path, "file=class_c.dat").unwrap();

        let resolver = ConfigResolver::new(&config_path);
        assert_eq!(resolver.resolve(), temp_dir.path().join("class_c.dat"));
    }

    #[test]
    fn test_resolver_keeps_absolute_paths() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("students.cfg");
        let absolute = temp_dir.path().join("elsewhere").join("data.dat");
        fs::write(&config_path, format!("file={}", absolute.display())).unwrap();

        let resolver = ConfigResolver::new(&config_path);
        assert_eq!(resolver.resolve(), absolute);
    }

    #[test]
    fn test_default_resolver_path() {
        let resolver = ConfigResolver::default();
        assert_eq!(resolver.config_path(), Path::new(DEFAULT_CONFIG_FILE));
    }
}
