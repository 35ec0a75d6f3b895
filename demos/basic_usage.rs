//! Basic logger usage example
//!
//! Demonstrates pattern formatting, console output and severity filtering.
//!
//! Run with: cargo run --example basic_usage

use pattern_logger::prelude::*;
use pattern_logger::{debug, error, info, warn};
use std::sync::Arc;

fn main() {
    println!("=== Pattern Logger - Basic Usage Example ===\n");

    // Create a logger with a console appender
    let logger = Logger::new("root");
    logger.add_appender(Arc::new(ConsoleAppender::new().with_colors(true)));

    println!("1. Logging with the default pattern:");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warn!(logger, "This is a warning message");
    error!(logger, "This is an error message");

    println!("\n2. A custom pattern:");
    logger.set_formatter(Arc::new(Formatter::new("%d{%H:%M:%S} [%p] %c: %m%n")));
    info!(logger, "Compact layout, same events");

    println!("\n3. Raised minimum level - debug won't show:");
    logger.set_level(Level::Info);
    debug!(logger, "Debug message (hidden)");
    info!(logger, "Info message (visible)");

    println!("\n=== Example completed successfully! ===");
}
