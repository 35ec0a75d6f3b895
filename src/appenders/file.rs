//! File appender implementation

use crate::core::{Appender, Formatter, Level, LogEvent, LoggerError, Result};
use parking_lot::{Mutex, RwLock};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Appends formatted lines to a file opened in append mode.
///
/// The writer sits behind a mutex: concurrent `append` calls serialize, and
/// [`FileAppender::reopen`] holds the same lock so a half-closed handle can
/// never interleave with an in-flight commit. `reopen` is the recovery hook
/// for externally rotated or deleted targets; rotation policy itself lives
/// with the host.
pub struct FileAppender {
    path: PathBuf,
    threshold: RwLock<Level>,
    formatter: RwLock<Option<Arc<Formatter>>>,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let writer = Self::open(&path)?;
        Ok(Self {
            path,
            threshold: RwLock::new(Level::Debug),
            formatter: RwLock::new(None),
            writer: Mutex::new(Some(writer)),
        })
    }

    fn open(path: &Path) -> Result<BufWriter<File>> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(BufWriter::new(file))
    }

    /// Set the minimum severity this appender commits
    #[must_use]
    pub fn with_threshold(self, level: Level) -> Self {
        *self.threshold.write() = level;
        self
    }

    /// Give this appender its own formatter instead of the logger's default
    #[must_use]
    pub fn with_formatter(self, formatter: Formatter) -> Self {
        *self.formatter.write() = Some(Arc::new(formatter));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn threshold(&self) -> Level {
        *self.threshold.read()
    }

    pub fn set_threshold(&self, level: Level) {
        *self.threshold.write() = level;
    }

    pub fn set_formatter(&self, formatter: Option<Arc<Formatter>>) {
        *self.formatter.write() = formatter;
    }

    /// Close and re-open the backing file, creating it if the target moved
    /// or was deleted underneath us. Mutually exclusive with `append`.
    pub fn reopen(&self) -> Result<()> {
        let mut writer = self.writer.lock();
        if let Some(mut old) = writer.take() {
            // The old handle may point at a deleted inode; its buffered
            // bytes are best-effort.
            let _ = old.flush();
        }
        *writer = Some(Self::open(&self.path)?);
        Ok(())
    }
}

impl Appender for FileAppender {
    fn append(&self, level: Level, event: &LogEvent, fallback: &Formatter) -> Result<()> {
        if level < *self.threshold.read() {
            return Ok(());
        }

        let line = match &*self.formatter.read() {
            Some(formatter) => formatter.format(level, event),
            None => fallback.format(level, event),
        };

        let mut writer = self.writer.lock();
        let writer = writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;
        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        if let Some(ref mut writer) = *self.writer.lock() {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn event(message: &str) -> LogEvent {
        LogEvent::capture("root", file!(), line!(), message)
    }

    #[test]
    fn test_append_writes_formatted_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let appender = FileAppender::new(&path).unwrap();
        let fallback = Formatter::new("%p %m%n");

        appender.append(Level::Info, &event("boot ok"), &fallback).unwrap();
        appender.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "INFO boot ok\n");
    }

    #[test]
    fn test_own_formatter_overrides_fallback() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let appender = FileAppender::new(&path)
            .unwrap()
            .with_formatter(Formatter::new("<%m>"));
        let fallback = Formatter::new("%p %m%n");

        appender.append(Level::Info, &event("x"), &fallback).unwrap();
        appender.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<x>");
    }

    #[test]
    fn test_threshold_suppresses_below() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let appender = FileAppender::new(&path).unwrap().with_threshold(Level::Error);
        let fallback = Formatter::new("%m%n");

        appender.append(Level::Warn, &event("quiet"), &fallback).unwrap();
        appender.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_reopen_recreates_deleted_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let appender = FileAppender::new(&path).unwrap();
        let fallback = Formatter::new("%m%n");

        appender.append(Level::Info, &event("before"), &fallback).unwrap();
        appender.flush().unwrap();

        std::fs::remove_file(&path).unwrap();
        assert!(!path.exists());

        appender.reopen().unwrap();
        assert!(path.exists());

        appender.append(Level::Info, &event("after"), &fallback).unwrap();
        appender.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "after\n");
    }
}
