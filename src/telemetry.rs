//! Opt-in log output for hosts running the option builder outside a browser,
//! e.g. a server that renders chart options or a test harness.
//!
//! Builds log the dataset shape and per-series decisions at `debug`/`trace`
//! and unmatched indicators at `warn`. Nothing is printed until a subscriber is
//! installed, either here or by the host.

/// Directive used when `RUST_LOG` is unset or unreadable.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Installs a compact subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_DIRECTIVE`].
///
/// `false` means nothing was installed: the `telemetry` feature is off, or the
/// host already owns the global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_DIRECTIVE)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"trendview=debug"` to see every build decision.
#[must_use]
pub fn init_tracing(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_directive));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn installs_nothing_without_the_feature() {
        assert!(!init_default_tracing());
        assert!(!init_tracing("trendview=debug"));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_install_reports_existing_subscriber() {
        let _ = init_default_tracing();
        assert!(!init_tracing("trendview=debug"));
    }
}
