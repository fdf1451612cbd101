//! Logging initialization
//!
//! Diagnostics go to stderr through `tracing`; stdout is kept for the
//! user-facing report. `KODKAFA_LOG` overrides the `-v` verbosity.

use std::io;

use tracing_subscriber::EnvFilter;

use crate::colors::{colors_enabled, ColorChoice};

pub const LOG_ENV: &str = "KODKAFA_LOG";

/// Default filter for `-v` repeated `verbosity` times: warn, info, debug, then trace.
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. A subscriber that is already set is kept.
pub fn init_logging(verbosity: u8, color: ColorChoice) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(colors_enabled(color, &io::stderr()))
        .with_target(verbosity >= 2)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(verbosity_to_directive(0), "warn");
        assert_eq!(verbosity_to_directive(1), "info");
        assert_eq!(verbosity_to_directive(2), "debug");
        assert_eq!(verbosity_to_directive(3), "trace");
        assert_eq!(verbosity_to_directive(u8::MAX), "trace");
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(0, ColorChoice::Never);
        init_logging(3, ColorChoice::Auto);
    }
}
