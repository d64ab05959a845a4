/// Setup logging with structured tracing.
///
/// Filter defaults to `info`; override with `RUST_LOG`. Call once per
/// process, before any ledger operation.
pub fn init_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stdout).json())
        .init();

    tracing::info!("ledgerdb logging initialized");
}
