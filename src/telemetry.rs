//! Tracing setup for binaries and tests embedding the mapper.

use tracing_subscriber::util::TryInitError;

/// Configure tracing once at startup for the whole process.
///
/// Verbosity comes from `RUST_LOG` and defaults to `info`:
/// ```bash
/// RUST_LOG=product_mapper=debug   # one span per mapper call
/// RUST_LOG=product_mapper=trace   # plus every field overwritten by merge
/// ```
///
/// Returns an error when a global subscriber is already installed.
pub fn setup_tracing() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(tracing_subscriber::fmt::time::uptime())
                .compact(),
        )
        .try_init()
}
