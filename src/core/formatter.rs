//! Compiled pattern formatter

use super::event::LogEvent;
use super::level::Level;
use super::pattern::{parse, FormatItem};

/// Pattern used by [`Formatter::default`]:
/// timestamp, thread id, fiber id, level, logger name, source location,
/// message, newline, tab-separated.
pub const DEFAULT_PATTERN: &str = "%d{%Y-%m-%d %H:%M:%S}%T%t%T%F%T[%p]%T[%c]%T%f:%l%T%m%n";

/// A format pattern compiled once and replayed for every event.
///
/// The pattern string is the source of truth; the item sequence is derived
/// from it at construction and immutable afterwards, so one `Formatter` can
/// be shared (`Arc<Formatter>`) and driven from any number of threads
/// concurrently.
#[derive(Debug, Clone)]
pub struct Formatter {
    pattern: String,
    items: Vec<FormatItem>,
}

impl Formatter {
    /// Compile `pattern`. Never fails: malformed directives degrade to
    /// literal text inside the compiled sequence.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let items = parse(&pattern);
        Self { pattern, items }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn items(&self) -> &[FormatItem] {
        &self.items
    }

    /// Render one event into a fresh string by replaying the compiled
    /// sequence in order.
    pub fn format(&self, level: Level, event: &LogEvent) -> String {
        let mut out = String::with_capacity(self.pattern.len() + event.message().len());
        self.format_into(&mut out, level, event);
        out
    }

    /// Render one event, appending to an existing buffer.
    pub fn format_into(&self, out: &mut String, level: Level, event: &LogEvent) {
        for item in &self.items {
            item.render(out, level, event);
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}
