use anyhow::{Context, Result};
use tracing::*;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use std::panic;
use std::path::Path;

/// Initialize tracing. Logs go to stderr, or to `log_file` when
/// one is given. The returned guard must be held until exit so
/// buffered file output is flushed.
pub fn setup_tracing(
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let directory = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            let file_name = path
                .file_name()
                .context("log file path has no file name")?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name.to_string_lossy())
                .build(directory)
                .with_context(|| {
                    format!(
                        "Failed to open log file {}",
                        path.display()
                    )
                })?;
            let (writer, guard) =
                tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .with(filter)
                .init();

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();

            Ok(None)
        }
    }
}

/// Make sure tracing is able to log panics
pub fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let backtrace =
            std::backtrace::Backtrace::force_capture();
        error!("Application panicked!");
        error!("Panic info: {:?}", panic_info);
        error!("Backtrace: {:?}", backtrace);
    }));
}
