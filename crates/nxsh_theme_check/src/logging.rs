//! Diagnostic logging for the theme checker binary.
//!
//! The report itself goes to stdout; tracing output goes to stderr so the two
//! never interleave in captured output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter (`EnvFilter` syntax)
pub const LOG_ENV: &str = "NXSH_LOG";

/// Filter used when `NXSH_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_falls_back_to_default() {
        std::env::set_var(LOG_ENV, "not a [valid filter");
        let filter = env_filter();
        std::env::remove_var(LOG_ENV);
        assert_eq!(filter.to_string(), DEFAULT_FILTER);
    }
}
