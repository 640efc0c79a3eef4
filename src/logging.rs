use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

const DEFAULT_FILTER: &str = "portfolio=debug,axum=info,tower_http=info";

/// Install the global subscriber. Output goes to stderr so `portfolio-fn`
/// can keep stdout for its response.
pub fn init(format: LogFormat) {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.with_target(false).json().init(),
        LogFormat::Text => builder.init(),
    }
}
