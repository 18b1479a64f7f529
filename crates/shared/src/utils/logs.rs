use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const OTEL_FILTER: &str = "info,hyper=off,opentelemetry=off,tonic=off,h2=off,reqwest=off";

/// Installs the global subscriber: a console layer filtered by `RUST_LOG`, an
/// optional daily-rolling JSON file and an optional OpenTelemetry log bridge.
///
/// The returned guard flushes the file writer when dropped; keep it alive for
/// the life of the process.
pub fn init_logger(
    logger_provider: Option<&SdkLoggerProvider>,
    component: &str,
    is_dev: bool,
    is_enable_file: bool,
) -> Option<WorkerGuard> {
    let mut guard = None;

    let file_layer = if is_enable_file {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };

        match RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(format!("rust_app_{component}"))
            .filename_suffix("log")
            .build(log_dir)
        {
            Ok(file_appender) => {
                let (file_writer, file_guard) = non_blocking(file_appender);
                guard = Some(file_guard);

                Some(
                    fmt::layer()
                        .with_writer(file_writer)
                        .with_ansi(false)
                        .json()
                        .with_filter(EnvFilter::new("info")),
                )
            }
            Err(e) => {
                eprintln!("File logging disabled, cannot open {log_dir}: {e}");
                None
            }
        }
    } else {
        None
    };

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .pretty()
        .with_thread_names(true)
        .with_ansi(is_dev)
        .with_filter(console_filter);

    let otel_layer = logger_provider.map(|provider| {
        OpenTelemetryTracingBridge::new(provider).with_filter(EnvFilter::new(OTEL_FILTER))
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(otel_layer)
        .init();

    guard
}
