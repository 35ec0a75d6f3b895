//! File logging example
//!
//! Demonstrates one logger feeding a console and a file appender with
//! different severity thresholds, and recovering the file after rotation.
//!
//! Run with: cargo run --example file_logging

use pattern_logger::prelude::*;
use pattern_logger::{debug, error, info};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Pattern Logger - File Logging Example ===\n");

    let logger = Logger::new("app");

    // Console shows everything; the file keeps only warnings and up.
    let console = Arc::new(ConsoleAppender::new());
    let file = Arc::new(
        FileAppender::new("app.log")?
            .with_threshold(Level::Warn)
            .with_formatter(Formatter::new("%d{%Y-%m-%d %H:%M:%S} [%p] %m%n")),
    );
    logger.add_appender(console);
    logger.add_appender(file.clone());

    debug!(logger, "connection pool sized to {}", 16);
    info!(logger, "service listening on :8080");
    error!(logger, "backend unreachable, retrying");
    logger.flush()?;

    println!("\napp.log now contains the ERROR line only.");

    // After an external rotation (mv app.log app.log.1), reopen() points
    // the appender at a fresh file.
    file.reopen()?;
    error!(logger, "written to the fresh file");
    logger.flush()?;

    println!("=== Example completed successfully! ===");
    Ok(())
}
