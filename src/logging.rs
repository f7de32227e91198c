use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a stderr subscriber. `RUST_LOG` wins over `level` when set.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{}={}", env!("CARGO_CRATE_NAME"), level).into());

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .try_init();
}
