use chrono::{SecondsFormat, Utc};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    // RUST_LOG overrides; defaults to info for this crate and tower_http.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Current UTC time as RFC 3339 with milliseconds, e.g. `2024-06-01T10:00:00.123Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
