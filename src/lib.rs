//! # Pattern Logger
//!
//! A pattern-driven logging core for embedding inside a server process:
//! a log event (message, severity, source location, timing, thread/fiber
//! identity) is rendered through a compiled format pattern and fanned out
//! to one or more appenders.
//!
//! ## Features
//!
//! - **Compiled Patterns**: printf-like patterns (`%d{%Y-%m-%d} [%p] %m%n`)
//!   compile once into a render sequence reused for every event
//! - **Double-Gated Filtering**: severity thresholds at the logger and at
//!   each appender, so one logger feeds sinks of different verbosity
//! - **Failure Isolation**: a broken appender never stops delivery to its
//!   siblings, and a bad pattern never takes the host process down
//! - **Thread Safe**: compiled formatters and appenders are shared handles,
//!   safe to drive from concurrent threads

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    #[cfg(feature = "file")]
    pub use crate::appenders::FileAppender;
    pub use crate::core::{
        Appender, FormatItem, Formatter, Level, LogEvent, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, Result, DEFAULT_PATTERN, DEFAULT_TIMESTAMP_FORMAT,
    };
}

#[cfg(feature = "console")]
pub use crate::appenders::ConsoleAppender;
#[cfg(feature = "file")]
pub use crate::appenders::FileAppender;
pub use crate::core::{
    Appender, FormatItem, Formatter, Level, LogEvent, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, Result, DEFAULT_PATTERN, DEFAULT_TIMESTAMP_FORMAT,
};
