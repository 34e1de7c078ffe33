//! File read/write operations with an optional atomic strategy

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How transformed text is written back to disk.
///
/// A crash mid-write can truncate a file under `InPlace`; `Atomic` writes to
/// a temp file in the same directory and renames it over the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Truncate and rewrite the target directly
    #[default]
    InPlace,
    /// Write-to-temp-then-rename with an advisory lock
    Atomic,
}

/// Read a file's full text content.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content using the selected strategy.
pub fn write_text(path: &Path, content: &str, mode: WriteMode) -> Result<()> {
    match mode {
        WriteMode::InPlace => fs::write(path, content).map_err(|e| Error::io(path, e)),
        WriteMode::Atomic => write_atomic(path, content.as_bytes()),
    }
}

/// Write content atomically with locking.
///
/// The temp file lives in the target's directory so the final rename stays
/// on one filesystem.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    tracing::debug!(path = %path.display(), "atomic write complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(WriteMode::InPlace)]
    #[case(WriteMode::Atomic)]
    fn test_write_then_read_roundtrip(#[case] mode: WriteMode) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.tsx");

        write_text(&path, "content\n", mode).unwrap();
        assert_eq!(read_text(&path).unwrap(), "content\n");
    }

    #[rstest]
    #[case(WriteMode::InPlace)]
    #[case(WriteMode::Atomic)]
    fn test_write_overwrites_existing_content(#[case] mode: WriteMode) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.tsx");

        write_text(&path, "old old old", mode).unwrap();
        write_text(&path, "new", mode).unwrap();
        assert_eq!(read_text(&path).unwrap(), "new");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.tsx");

        write_text(&path, "content", WriteMode::Atomic).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("file.tsx")]);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("absent.tsx")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
