use std::path::Path;

use chrono::Local;
use eyre::Result;
use fern::Dispatch;

/// Sets up the application logger with file and console output.
///
/// The log file receives everything from DEBUG up and is truncated on every
/// start; the console shows INFO and above unless `RUST_LOG` raises or
/// lowers it.
///
/// # Returns
/// * `Result<()>` - Success or failure of logger setup
///
/// # Errors
/// * If log file creation fails
/// * If logger configuration fails
pub fn setup_logger(log_file: &Path) -> Result<()> {
    Dispatch::new()
        // Format log messages with time and log level
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                message
            ));
        })
        // Verbose logging to the log file
        .chain(
            Dispatch::new()
                .level(log::LevelFilter::Debug)
                .chain(std::fs::File::create(log_file)?),
        )
        // Console logging level from RUST_LOG env var or default to Info
        .chain(
            Dispatch::new()
                .level(
                    std::env::var("RUST_LOG")
                        .map(|level| level.parse().unwrap_or(log::LevelFilter::Info))
                        .unwrap_or(log::LevelFilter::Info),
                )
                .chain(std::io::stdout()),
        )
        .apply()?;
    Ok(())
}
