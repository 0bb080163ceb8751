//! Opt-in `tracing` subscriber setup.
//!
//! Components log per-frame detail at `trace`, state transitions at `debug`
//! and ignored input at `warn`. Hosts with their own subscriber never need
//! this module.

/// Directives used when `RUST_LOG` is unset: this crate at `info`, others at `warn`.
pub const DEFAULT_FILTER: &str = "warn,folio_motion=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with caller-chosen fallback directives,
/// e.g. `"folio_motion=trace"` to follow every animation frame.
#[must_use]
pub fn init_tracing_with_filter(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_directives))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}
