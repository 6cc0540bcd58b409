use tracing_subscriber::EnvFilter;

/// Installs the process-wide fmt subscriber: level-colored output, filter
/// taken from `RUST_LOG` with an `info` default. Also drains `log` records
/// emitted by the client crates. Safe to call more than once; only the first
/// call installs.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(true)
        .try_init();
}
