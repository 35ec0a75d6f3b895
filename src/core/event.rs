//! Log event value object

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

// Small sequential ids, assigned once per thread and cached for its lifetime.
thread_local! {
    static THREAD_ID: u64 = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
}

/// Numeric id of the calling thread, stable for the thread's lifetime.
pub fn current_thread_id() -> u64 {
    THREAD_ID.with(|id| *id)
}

static PROCESS_START: OnceLock<Instant> = OnceLock::new();

/// Milliseconds since process start. The anchor is taken on first use, so
/// hosts that care about the epoch should touch this early (the logging
/// macros do it implicitly on the first event).
pub fn elapsed_ms() -> u64 {
    PROCESS_START.get_or_init(Instant::now).elapsed().as_millis() as u64
}

/// One log occurrence, immutable after construction.
///
/// Every field is supplied atomically by a constructor, so a formatter can
/// never observe a half-built event. The source file is a borrowed
/// compile-time literal (as produced by `file!()`) and must outlive the
/// event; everything else is owned by value.
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    logger_name: String,
    file: &'static str,
    line: u32,
    elapsed_ms: u64,
    thread_id: u64,
    fiber_id: u64,
    timestamp: DateTime<Utc>,
    message: String,
}

impl LogEvent {
    /// Construct an event with every field supplied explicitly.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        logger_name: impl Into<String>,
        file: &'static str,
        line: u32,
        elapsed_ms: u64,
        thread_id: u64,
        fiber_id: u64,
        timestamp: DateTime<Utc>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            logger_name: logger_name.into(),
            file,
            line,
            elapsed_ms,
            thread_id,
            fiber_id,
            timestamp,
            message: message.into(),
        }
    }

    /// Construct an event at the call site, filling the ambient fields
    /// (elapsed time, thread id, wall clock) from the current context.
    /// The fiber id is `0`; hosts with a fiber runtime use [`LogEvent::new`].
    pub fn capture(
        logger_name: impl Into<String>,
        file: &'static str,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            logger_name,
            file,
            line,
            elapsed_ms(),
            current_thread_id(),
            0,
            Utc::now(),
            message,
        )
    }

    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn thread_id(&self) -> u64 {
        self.thread_id
    }

    pub fn fiber_id(&self) -> u64 {
        self.fiber_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_accessors_return_constructed_values() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).single().unwrap();
        let event = LogEvent::new("root", "src/main.rs", 42, 1500, 7, 3, ts, "boot ok");

        assert_eq!(event.logger_name(), "root");
        assert_eq!(event.file(), "src/main.rs");
        assert_eq!(event.line(), 42);
        assert_eq!(event.elapsed_ms(), 1500);
        assert_eq!(event.thread_id(), 7);
        assert_eq!(event.fiber_id(), 3);
        assert_eq!(event.timestamp(), ts);
        assert_eq!(event.message(), "boot ok");
    }

    #[test]
    fn test_capture_fills_ambient_fields() {
        let event = LogEvent::capture("root", file!(), line!(), "hello");
        assert_eq!(event.fiber_id(), 0);
        assert!(event.thread_id() > 0);
        assert!(event.file().ends_with("event.rs"));
    }

    #[test]
    fn test_thread_id_stable_within_thread() {
        assert_eq!(current_thread_id(), current_thread_id());
    }

    #[test]
    fn test_thread_ids_differ_across_threads() {
        let here = current_thread_id();
        let there = std::thread::spawn(current_thread_id).join().unwrap();
        assert_ne!(here, there);
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let a = elapsed_ms();
        let b = elapsed_ms();
        assert!(b >= a);
    }
}
