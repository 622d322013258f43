use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogSettings;
use crate::constants::DEFAULT_LOG_FILTER;

/// Initializes the logging system: stdout plus an optional rolling JSON file.
///
/// Returns the file writer guard when a log directory is configured. The
/// caller must keep it alive for buffered lines to be flushed on exit.
pub fn init_logging(settings: &LogSettings) -> Option<WorkerGuard> {
    // Respect RUST_LOG if set; otherwise info for our crate
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let json_console = settings.json.then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stdout)
    });
    let text_console = (!settings.json).then(|| {
        fmt::layer()
            .with_target(true)
            .with_writer(std::io::stdout)
    });

    let (file_layer, guard) = match settings.log_dir.as_deref() {
        Some(dir) => {
            let _ = fs::create_dir_all(dir);
            let file_appender = tracing_appender::rolling::daily(dir, "cep-mirror.log");
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().json().with_writer(non_blocking_writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_console)
        .with(text_console)
        .with(file_layer)
        .try_init();

    guard
}
