//! Opt-in tracing setup for hosts embedding `chart-bridge`.
//!
//! Tree writes log at `trace`, dispatch outcomes at `debug` and handler
//! failures at `warn`. Hosts with their own subscriber can ignore this module.

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "chart_bridge=info";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is on.
///
/// Returns `false` when the feature is disabled or the host already set a
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER)),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
