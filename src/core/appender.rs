//! Appender trait for log output destinations

use super::error::Result;
use super::event::LogEvent;
use super::formatter::Formatter;
use super::level::Level;

/// A delivery target for formatted log output.
///
/// Appenders are shared across loggers as `Arc<dyn Appender>`, so every
/// method takes `&self`; implementations use interior locking to serialize
/// access to their medium. `append` re-checks the appender's own severity
/// threshold (dispatch is double-gated: once at the logger, once here) and
/// renders through the appender's own formatter, falling back to the
/// caller-supplied one when it has none. Medium failure comes back as `Err`
/// and must never panic; the logger isolates it from sibling appenders.
pub trait Appender: Send + Sync {
    fn append(&self, level: Level, event: &LogEvent, fallback: &Formatter) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
