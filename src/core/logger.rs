//! Main logger implementation

use super::{
    appender::Appender,
    error::Result,
    event::LogEvent,
    formatter::Formatter,
    level::Level,
    metrics::LoggerMetrics,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// A named, severity-filtered dispatcher over an ordered set of appenders.
///
/// Loggers are created explicitly by the host (there is no implicit global
/// registry) and execute synchronously on the caller's thread. Appenders are
/// shared handles (`Arc<dyn Appender>`); several loggers may feed the same
/// appender, which lives as long as its longest holder.
pub struct Logger {
    name: String,
    min_level: RwLock<Level>,
    appenders: RwLock<Vec<Arc<dyn Appender>>>,
    /// Fallback for appenders that carry no formatter of their own.
    formatter: RwLock<Arc<Formatter>>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: RwLock::new(Level::Debug),
            appenders: RwLock::new(Vec::new()),
            formatter: RwLock::new(Arc::new(Formatter::default())),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        *self.min_level.read()
    }

    pub fn set_level(&self, level: Level) {
        *self.min_level.write() = level;
    }

    pub fn formatter(&self) -> Arc<Formatter> {
        Arc::clone(&self.formatter.read())
    }

    /// Replace the fallback formatter used by appenders without their own.
    pub fn set_formatter(&self, formatter: Arc<Formatter>) {
        *self.formatter.write() = formatter;
    }

    /// Append an appender to the dispatch order. The same appender may be
    /// attached more than once; it then receives each event once per
    /// attachment.
    pub fn add_appender(&self, appender: Arc<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    /// Detach every attachment of `appender`, matched by identity
    /// (the same shared handle), not by value.
    pub fn remove_appender(&self, appender: &Arc<dyn Appender>) {
        self.appenders
            .write()
            .retain(|existing| !Arc::ptr_eq(existing, appender));
    }

    pub fn clear_appenders(&self) {
        self.appenders.write().clear();
    }

    pub fn appender_count(&self) -> usize {
        self.appenders.read().len()
    }

    /// Dispatch one event: no-op below this logger's threshold, otherwise
    /// every attached appender gets a chance, in attachment order.
    ///
    /// The appender list is snapshotted under the read lock so the lock is
    /// never held across appender I/O. Per-appender failures and panics are
    /// isolated: a broken appender costs a stderr notice and a metrics tick,
    /// never the delivery to its siblings, and nothing escapes `log`.
    pub fn log(&self, level: Level, event: &LogEvent) {
        if level < *self.min_level.read() {
            return;
        }

        let appenders: Vec<Arc<dyn Appender>> = self.appenders.read().clone();
        let formatter = self.formatter();

        let mut has_error = false;
        for (idx, appender) in appenders.iter().enumerate() {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(level, event, &formatter)
            }));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Appender #{} failed: {}", idx, e);
                    self.metrics.record_appender_failure();
                    has_error = true;
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} panicked: {}. \
                         Other appenders continue to function.",
                        idx, panic_msg
                    );
                    self.metrics.record_appender_failure();
                    has_error = true;
                }
            }
        }

        if has_error {
            self.metrics.record_dropped();
        } else {
            self.metrics.record_logged();
        }
    }

    #[inline]
    pub fn debug(&self, event: &LogEvent) {
        self.log(Level::Debug, event);
    }

    #[inline]
    pub fn info(&self, event: &LogEvent) {
        self.log(Level::Info, event);
    }

    #[inline]
    pub fn warn(&self, event: &LogEvent) {
        self.log(Level::Warn, event);
    }

    #[inline]
    pub fn error(&self, event: &LogEvent) {
        self.log(Level::Error, event);
    }

    #[inline]
    pub fn fatal(&self, event: &LogEvent) {
        self.log(Level::Fatal, event);
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        let appenders: Vec<Arc<dyn Appender>> = self.appenders.read().clone();
        for appender in appenders {
            appender.flush()?;
        }
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("root")
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use pattern_logger::prelude::*;
///
/// let logger = Logger::builder("net")
///     .level(Level::Warn)
///     .formatter(Formatter::new("%p %m%n"))
///     .build();
/// ```
pub struct LoggerBuilder {
    name: String,
    level: Level,
    appenders: Vec<Arc<dyn Appender>>,
    formatter: Option<Formatter>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: Level::Debug,
            appenders: Vec::new(),
            formatter: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Attach an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender(mut self, appender: Arc<dyn Appender>) -> Self {
        self.appenders.push(appender);
        self
    }

    /// Set the fallback formatter
    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger::new(self.name);
        logger.set_level(self.level);
        if let Some(formatter) = self.formatter {
            logger.set_formatter(Arc::new(formatter));
        }
        for appender in self.appenders {
            logger.add_appender(appender);
        }
        logger
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;
    use parking_lot::Mutex;

    /// Test appender that records every line it commits.
    struct CaptureAppender {
        threshold: Level,
        lines: Mutex<Vec<String>>,
    }

    impl CaptureAppender {
        fn new(threshold: Level) -> Arc<Self> {
            Arc::new(Self {
                threshold,
                lines: Mutex::new(Vec::new()),
            })
        }

        fn lines(&self) -> Vec<String> {
            self.lines.lock().clone()
        }
    }

    impl Appender for CaptureAppender {
        fn append(&self, level: Level, event: &LogEvent, fallback: &Formatter) -> crate::core::Result<()> {
            if level < self.threshold {
                return Ok(());
            }
            self.lines.lock().push(fallback.format(level, event));
            Ok(())
        }

        fn flush(&self) -> crate::core::Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "capture"
        }
    }

    /// Test appender that always fails.
    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&self, _: Level, _: &LogEvent, _: &Formatter) -> crate::core::Result<()> {
            Err(LoggerError::writer("medium closed"))
        }

        fn flush(&self) -> crate::core::Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn event(message: &str) -> LogEvent {
        LogEvent::capture("root", file!(), line!(), message)
    }

    #[test]
    fn test_logger_threshold_gates_dispatch() {
        let logger = Logger::new("root");
        logger.set_level(Level::Warn);
        let capture = CaptureAppender::new(Level::Debug);
        logger.add_appender(capture.clone());
        logger.set_formatter(Arc::new(Formatter::new("%p %m")));

        logger.info(&event("suppressed"));
        logger.warn(&event("delivered"));

        assert_eq!(capture.lines(), vec!["WARN delivered"]);
    }

    #[test]
    fn test_appender_threshold_double_gates() {
        let logger = Logger::new("root");
        logger.set_level(Level::Debug);
        logger.set_formatter(Arc::new(Formatter::new("%m")));
        let strict = CaptureAppender::new(Level::Error);
        let lax = CaptureAppender::new(Level::Debug);
        logger.add_appender(strict.clone());
        logger.add_appender(lax.clone());

        logger.warn(&event("warn"));
        logger.error(&event("error"));

        assert_eq!(strict.lines(), vec!["error"]);
        assert_eq!(lax.lines(), vec!["warn", "error"]);
    }

    #[test]
    fn test_failing_appender_does_not_stop_fanout() {
        let logger = Logger::new("root");
        logger.set_formatter(Arc::new(Formatter::new("%m")));
        let capture = CaptureAppender::new(Level::Debug);
        logger.add_appender(Arc::new(FailingAppender));
        logger.add_appender(capture.clone());

        logger.info(&event("still delivered"));

        assert_eq!(capture.lines(), vec!["still delivered"]);
        assert_eq!(logger.metrics().dropped_count(), 1);
        assert_eq!(logger.metrics().appender_failures(), 1);
    }

    #[test]
    fn test_remove_appender_by_identity() {
        let logger = Logger::new("root");
        let first = CaptureAppender::new(Level::Debug);
        let second = CaptureAppender::new(Level::Debug);
        let first_dyn: Arc<dyn Appender> = first.clone();
        logger.add_appender(first.clone());
        logger.add_appender(second.clone());
        assert_eq!(logger.appender_count(), 2);

        logger.remove_appender(&first_dyn);
        assert_eq!(logger.appender_count(), 1);

        logger.set_formatter(Arc::new(Formatter::new("%m")));
        logger.info(&event("only second"));
        assert!(first.lines().is_empty());
        assert_eq!(second.lines(), vec!["only second"]);
    }

    #[test]
    fn test_duplicate_attachment_delivers_twice() {
        let logger = Logger::new("root");
        logger.set_formatter(Arc::new(Formatter::new("%m")));
        let capture = CaptureAppender::new(Level::Debug);
        logger.add_appender(capture.clone());
        logger.add_appender(capture.clone());

        logger.info(&event("twice"));
        assert_eq!(capture.lines(), vec!["twice", "twice"]);
    }

    #[test]
    fn test_unknown_severity_filters_by_raw_order() {
        let logger = Logger::new("root");
        logger.set_formatter(Arc::new(Formatter::new("%p %m")));
        let capture = CaptureAppender::new(Level::Unknown);
        logger.add_appender(capture.clone());

        // Unknown sorts below Debug, so the default threshold suppresses it.
        logger.log(Level::from_i32(-3), &event("odd"));
        assert!(capture.lines().is_empty());

        logger.set_level(Level::Unknown);
        logger.log(Level::from_i32(-3), &event("odd"));
        assert_eq!(capture.lines(), vec!["UNKNOWN odd"]);
    }

    #[test]
    fn test_metrics_count_deliveries() {
        let logger = Logger::new("root");
        let capture = CaptureAppender::new(Level::Debug);
        logger.add_appender(capture);

        logger.info(&event("one"));
        logger.info(&event("two"));

        assert_eq!(logger.metrics().total_logged(), 2);
        assert_eq!(logger.metrics().dropped_count(), 0);
    }

    #[test]
    fn test_builder() {
        let capture = CaptureAppender::new(Level::Debug);
        let logger = Logger::builder("net")
            .level(Level::Info)
            .formatter(Formatter::new("%c/%p %m"))
            .appender(capture.clone())
            .build();

        logger.debug(&event("hidden"));
        logger.info(&LogEvent::capture("net", file!(), line!(), "shown"));

        assert_eq!(logger.name(), "net");
        assert_eq!(capture.lines(), vec!["net/INFO shown"]);
    }
}
