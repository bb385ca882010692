//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Appends rendered lines to a log file.
///
/// Missing parent directories are created on construction and the file is
/// opened append-or-create, so re-opening an existing destination extends
/// it rather than truncating. Writes are unbuffered; every line reaches
/// the file before the consumer moves on.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| LoggerError::destination(path.display().to_string(), e))?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::destination(path.display().to_string(), e))?;

        Ok(Self { file, path })
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.file.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_makes_missing_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("app.log");

        let mut sink = FileSink::create(&path).unwrap();
        sink.write_line("one line\n").unwrap();
        sink.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one line\n");
    }

    #[test]
    fn test_reopen_appends_instead_of_truncating() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");

        {
            let mut sink = FileSink::create(&path).unwrap();
            sink.write_line("first\n").unwrap();
        }
        {
            let mut sink = FileSink::create(&path).unwrap();
            sink.write_line("second\n").unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_unwritable_destination_fails_construction() {
        let temp_dir = TempDir::new().unwrap();
        // A directory path cannot be opened as a log file
        let err = FileSink::create(temp_dir.path()).unwrap_err();
        assert!(matches!(err, LoggerError::Destination { .. }));
    }
}
