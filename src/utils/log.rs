use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes logging: env-filtered output into a daily rolling file under
/// `<root>/logs`. The returned guard must be held for the lifetime of the
/// application so buffered lines are flushed on shutdown. Safe to call more
/// than once; later calls leave the existing subscriber in place.
pub fn init(root: &Utf8Path) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(root.join("logs"), "mod_vault.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(file_writer)
        .with_ansi(false)
        .try_init();

    guard
}
