//! Memo Gateway demo
//!
//! Runs the demo operation set through the cache gateway: the in-memory sum
//! and the file-backed factorial are each called twice.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memo_gateway::service::{CachedDataService, DataService, DataServiceImpl};
use memo_gateway::Config;

/// Main entry point for the demo.
///
/// # Sequence
/// 1. Load configuration from environment variables
/// 2. Initialize tracing subscriber for logging
/// 3. Wrap the plain service in the caching decorator
/// 4. Issue `calculate_sum(3, 4)` and `factorial(4)` twice each
/// 5. Print gateway statistics as JSON
fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // RUST_LOG overrides the configured fallback filter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Cache directory: {}", config.cache_dir.display());

    let mut service = CachedDataService::from_config(DataServiceImpl, &config)
        .context("Failed to declare the cached operation set")?;

    for _ in 0..2 {
        let sum = service
            .calculate_sum(3, 4)
            .context("calculate_sum(3, 4) failed")?;
        println!("{sum}");
    }

    for _ in 0..2 {
        let factorial = service.factorial(4).context("factorial(4) failed")?;
        println!("{factorial}");
    }

    let stats = service.gateway().stats();
    info!(
        "Gateway stats: {}",
        serde_json::to_string(&stats).context("Failed to encode gateway stats")?
    );

    Ok(())
}
