//! Structured logging setup for AuthRelay binaries.
//!
//! Output format is selected with `LOG_FORMAT` (`json` for log aggregation,
//! anything else for human-readable text) and filtering with the standard
//! `RUST_LOG` variable, e.g. `RUST_LOG=ar_core=debug,tower_http=info`.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize the global tracing subscriber.
///
/// `service_name` is recorded on every event so aggregated logs from several
/// AuthRelay binaries stay distinguishable. Falls back to an `info` filter
/// when `RUST_LOG` is unset or unparsable.
pub fn init_logging(service_name: &'static str) {
    let env_filter = env_filter();

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_target(true)
                    .flatten_event(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true).with_ansi(true))
            .init();
    }

    tracing::info!(service = service_name, "logging initialized");
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
