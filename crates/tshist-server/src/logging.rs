// File: crates/tshist-server/src/logging.rs
// Summary: tracing-subscriber setup honoring RUST_LOG with a configured fallback level.

use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("tshist_server={level},tshist_core={level},tower=warn,hyper=warn").into()
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true).with_level(true))
        .with(filter)
        .init();

    info!("logging initialized at level: {}", level);
}
