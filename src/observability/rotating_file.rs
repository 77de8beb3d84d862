//! Size-bounded append-only file with numbered backups.
//!
//! When the live file reaches its size limit it becomes `<name>.1`, the
//! previous `.1` becomes `.2`, and so on; whatever was in the last slot is
//! overwritten. Disk usage therefore stays under `limit * (backups + 1)`.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the live file reaches 10 MiB.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Keep `.1` through `.3`.
pub const DEFAULT_BACKUPS: usize = 3;

/// Thread-safe line writer that rotates by size.
///
/// The file is opened lazily on the first write, so construction never fails.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// A writer with the default 10 MiB limit and three backups.
    ///
    /// # Parameters
    ///
    /// - `path`: Live file; backups are written next to it
    ///
    /// # Example
    ///
    /// ```rust
    /// use askbar::observability::RotatingFile;
    /// use std::path::PathBuf;
    ///
    /// let file = RotatingFile::new(PathBuf::from("/tmp/askbar-otlp.json"));
    /// assert_eq!(file.path(), PathBuf::from("/tmp/askbar-otlp.json"));
    /// ```
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    /// A writer with explicit limits.
    ///
    /// # Parameters
    ///
    /// - `path`: Live file
    /// - `max_bytes`: Size at which the next append rotates first
    /// - `backups`: Numbered backups to keep; `0` truncates in place
    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    /// Path of the live file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing, and an error
    /// if the internal lock was poisoned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use askbar::observability::RotatingFile;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let file = RotatingFile::with_limits(dir.path().join("trace.json"), 4, 1);
    /// file.append_line("first").unwrap();
    /// file.append_line("second").unwrap();
    ///
    /// assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "second\n");
    /// assert_eq!(std::fs::read_to_string(file.backup_path(1)).unwrap(), "first\n");
    /// ```
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if self.is_full() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }

        if let Some(file) = handle.as_mut() {
            writeln!(file, "{line}")?;
            file.flush()?;
        }
        Ok(())
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() >= self.max_bytes)
    }

    /// Path of backup number `index` (1 is the newest).
    ///
    /// # Returns
    ///
    /// The live path with `.{index}` appended, whether or not it exists.
    #[must_use]
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return fs::remove_file(&self.path);
        }

        for index in (1..self.backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }

        fs::rename(&self.path, self.backup_path(1))
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn lines_accumulate_below_the_limit() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::new(dir.path().join("trace.json"));

        file.append_line("{\"a\":1}").unwrap();
        file.append_line("{\"b\":2}").unwrap();

        assert_eq!(read(file.path()), "{\"a\":1}\n{\"b\":2}\n");
        assert!(!file.backup_path(1).exists());
    }

    #[test]
    fn full_file_shifts_into_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::with_limits(dir.path().join("trace.json"), 8, 2);

        for line in ["first-line", "second-line", "third-line", "fourth-line"] {
            file.append_line(line).unwrap();
        }

        assert_eq!(read(file.path()), "fourth-line\n");
        assert_eq!(read(&file.backup_path(1)), "third-line\n");
        assert_eq!(read(&file.backup_path(2)), "second-line\n");
        assert!(!file.backup_path(3).exists());
    }

    #[test]
    fn zero_backups_truncates_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::with_limits(dir.path().join("trace.json"), 4, 0);

        file.append_line("old-data").unwrap();
        file.append_line("new-data").unwrap();

        assert_eq!(read(file.path()), "new-data\n");
        assert!(!file.backup_path(1).exists());
    }

    #[test]
    fn backup_names_append_an_index() {
        let file = RotatingFile::new(PathBuf::from("/data/askbar-otlp.json"));
        assert_eq!(file.backup_path(2), PathBuf::from("/data/askbar-otlp.json.2"));
    }
}
