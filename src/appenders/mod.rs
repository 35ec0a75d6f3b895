//! Appender implementations

#[cfg(feature = "console")]
pub mod console;

#[cfg(feature = "file")]
pub mod file;

#[cfg(feature = "console")]
pub use console::ConsoleAppender;

#[cfg(feature = "file")]
pub use file::FileAppender;

// Re-export the trait so appender implementors need a single import
pub use crate::core::Appender;
