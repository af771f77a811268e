//! Opt-in `tracing` setup for hosts embedding the engine.
//!
//! The engine only emits `tracing` events; nothing is printed unless the host
//! installs a subscriber, either its own or the one from `init_default_tracing`.

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, or by
/// `gantt_rs=info` when the variable is unset. Event targets are kept so layout,
/// scroll and drag events can be told apart.
///
/// Returns `false` without the `telemetry` feature or when a global subscriber
/// is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gantt_rs=info")),
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
