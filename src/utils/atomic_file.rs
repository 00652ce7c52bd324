//! Whole-file replacement that never leaves a partially written target.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace the contents of `path` with `contents`.
///
/// The bytes are written to a temporary file next to the target, flushed to
/// disk, and then renamed over it. On Unix the file is readable by its owner
/// only, since records carry contact details.
///
/// # Example
/// ```rust,no_run
/// use std::path::Path;
/// use student_records::utils::atomic_file;
///
/// atomic_file::write_atomic(Path::new("students.dat"), b"\x00")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut temp_file = NamedTempFile::new_in(parent).with_context(|| {
        format!("Failed to create temporary file in {}", parent.display())
    })?;

    temp_file
        .write_all(contents)
        .context("Failed to write to temporary file")?;
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to flush temporary file")?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(temp_file.path(), fs::Permissions::from_mode(0o600))
            .context("Failed to set file permissions")?;
    }

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file to {}", path.display()))?;

    Ok(())
}
