//! AlgoBench - Searching Suite Driver
//!
//! Times linear, binary, ternary and jump search against every configured
//! sample size. The sample is sorted once per size and the key is drawn from
//! it, so every run searches for a value that exists.

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use algobench::algorithms::Algorithm;
use algobench::benchmark::run_suite;
use algobench::config::Config;
use algobench::constants::SHUTDOWN_GRACE_SECONDS;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting searching benchmark...");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(run_suite(
        &config,
        Algorithm::SEARCH_SUITE.to_vec(),
        "searching",
    ));

    // A timed-out worker may still be searching; bound the wait instead of
    // letting runtime teardown block process exit on it.
    runtime.shutdown_timeout(Duration::from_secs(SHUTDOWN_GRACE_SECONDS));

    outcome?;
    Ok(())
}
