use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes logging for the command line tool.
///
/// Console output goes to stderr so command output on stdout stays clean. A JSON copy
/// is written to `<data dir>/logs/` with daily rotation.
///
/// Default level is "info" with the page services and feed at debug, override with RUST_LOG:
/// - RUST_LOG=debug divebomb home
/// - RUST_LOG=service=trace divebomb author dan-jones
///
/// Returns a guard that must be kept alive for the duration of the program.
pub fn init_logging(data_dir: &Path) -> tracing_appender::non_blocking::WorkerGuard {
    let log_dir = file_system::get_log_dir(data_dir);

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!(
            "Warning: Failed to create log directory at {}: {}",
            log_dir.display(),
            e
        );
        eprintln!("Logs will only be written to console.");
    }

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "divebomb.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_file(true)
        .with_line_number(true);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,service=debug,feed=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
