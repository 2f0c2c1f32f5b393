//! Opt-in `tracing` subscriber setup.
//!
//! The library only emits events. Hosts either install their own subscriber
//! or call one of the helpers here when built with the `telemetry` feature.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "doping_scatter=info";

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter,
/// e.g. `"doping_scatter=trace"` to see every hover event.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
