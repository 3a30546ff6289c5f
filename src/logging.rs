//! Tracing setup. Diagnostics go to stderr so stdout stays reserved for the answer.

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn,oq=info";

fn env_filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter_from_env())
        .with_writer(std::io::stderr)
        .try_init();
}
