//! Console appender implementation

use crate::core::{Appender, Formatter, Level, LogEvent, Result};
use colored::Colorize;
use parking_lot::RwLock;
use std::io::Write;
use std::sync::Arc;

/// Writes formatted lines to the process's standard streams: `Error` and
/// `Fatal` land on stderr, everything else on stdout. The trailing newline
/// comes from the pattern (`%n`), not from this appender.
pub struct ConsoleAppender {
    use_colors: bool,
    threshold: RwLock<Level>,
    formatter: RwLock<Option<Arc<Formatter>>>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            threshold: RwLock::new(Level::Debug),
            formatter: RwLock::new(None),
        }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
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

    pub fn threshold(&self) -> Level {
        *self.threshold.read()
    }

    pub fn set_threshold(&self, level: Level) {
        *self.threshold.write() = level;
    }

    pub fn set_formatter(&self, formatter: Option<Arc<Formatter>>) {
        *self.formatter.write() = formatter;
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, level: Level, event: &LogEvent, fallback: &Formatter) -> Result<()> {
        if level < *self.threshold.read() {
            return Ok(());
        }

        let line = match &*self.formatter.read() {
            Some(formatter) => formatter.format(level, event),
            None => fallback.format(level, event),
        };
        let line = if self.use_colors {
            line.color(level.color_code()).to_string()
        } else {
            line
        };

        // Error and Fatal go to stderr, everything else to stdout
        match level {
            Level::Error | Level::Fatal => std::io::stderr().write_all(line.as_bytes())?,
            _ => std::io::stdout().write_all(line.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        // Flush both streams since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
