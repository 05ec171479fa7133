use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Initializes logging: human-readable console output on stderr plus, when a
/// log directory is configured, daily-rotated JSON files. `RUST_LOG`
/// overrides the configured level; `verbose` forces debug.
///
/// Keep the returned guard alive for the life of the process so buffered
/// file output is flushed on exit.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> Option<WorkerGuard> {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("job_scraper={}", level)));

    let console_layer = fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.directory {
        Some(directory) => match fs::create_dir_all(directory) {
            Ok(()) => {
                let file_appender = tracing_appender::rolling::daily(directory, "job_scraper.log");
                let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
                let layer = fmt::layer().json().with_writer(non_blocking_writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!(
                    "⚠️  Could not create log directory {}: {}. Logging to console only.",
                    directory.display(),
                    e
                );
                (None, None)
            }
        },
        None => (None, None),
    };

    // leave an already-installed subscriber in place
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    guard
}
