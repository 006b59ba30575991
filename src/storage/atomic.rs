//! Locked, atomic file replacement shared by slot files and the config file

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::StorageError;

/// `path` with `suffix` appended to its file name (`slot.json` -> `slot.json.lock`)
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// Replace `path` with `bytes` under an exclusive lock.
///
/// 1. Parent directory is created if needed
/// 2. Lock file next to the target (separate file, so rename does not drop the lock)
/// 3. Write + fsync a temp file
/// 4. Rename over the target
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }

    let lock_path = sibling(path, ".lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .map_err(|e| StorageError::io(&lock_path, e))?;

    lock_file
        .lock_exclusive()
        .map_err(|source| StorageError::Lock {
            path: lock_path.display().to_string(),
            source,
        })?;

    let temp_path = sibling(path, ".tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| StorageError::io(&temp_path, e))?;

    temp_file
        .write_all(bytes)
        .and_then(|_| temp_file.sync_all())
        .map_err(|e| StorageError::io(&temp_path, e))?;

    std::fs::rename(&temp_path, path).map_err(|e| StorageError::io(path, e))?;

    // Lock is released when lock_file is dropped
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sibling_appends_suffix() {
        assert_eq!(
            sibling(Path::new("/data/slot.json"), ".tmp"),
            PathBuf::from("/data/slot.json.tmp")
        );
        assert_eq!(
            sibling(Path::new("config.toml"), ".lock"),
            PathBuf::from("config.toml.lock")
        );
    }

    #[test]
    fn test_write_atomic_creates_parents_and_replaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a/b/target.json");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        assert!(!sibling(&path, ".tmp").exists());
    }

    #[test]
    fn test_write_atomic_reports_path_on_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a dir").unwrap();

        let err = write_atomic(&blocker.join("target.json"), b"x").unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
        assert!(err.to_string().contains("file"));
    }
}
