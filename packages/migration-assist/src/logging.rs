use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
