//! Run-scoped logging setup.
//!
//! A run constructs its logging context once, up front, and holds the
//! returned [`LoggingGuard`] until it finishes; dropping the guard
//! flushes any buffered file output.

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::infrastructure::config::LoggingSettings;

/// Keeps the logging pipeline alive for the duration of a run.
///
/// Holds the non-blocking file writer's worker guard, when file output
/// is configured; buffered log lines are flushed when this drops.
pub struct LoggingGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Initialize tracing for this run.
///
/// `RUST_LOG` overrides the configured level when set. Events go to
/// stderr (pretty or JSON per the settings) and, when a log file is
/// configured, to that file as well.
pub fn init(settings: &LoggingSettings) -> Result<LoggingGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.clone()));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    if settings.format == "json" {
        layers.push(stderr_layer.json().boxed());
    } else {
        layers.push(stderr_layer.boxed());
    }

    let mut file_guard = None;
    if let Some(path) = &settings.file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {path}"))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        file_guard = Some(guard);
        layers.push(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}
