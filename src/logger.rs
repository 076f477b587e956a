//! Logging setup for the binary.
//!
//! Logs go to stderr so that text, JSON and CSV reports on stdout stay
//! clean. `RUST_LOG` overrides the built-in directives.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// How log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    /// One short line per event, no target.
    Compact,
    /// One JSON object per event with fields flattened to the top level.
    Json,
}

/// Filter directive used when `RUST_LOG` is unset.
///
/// Verbose runs show the per-order debug lines of a pass.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "mhs_calc=debug,warn"
    } else {
        "mhs_calc=info,warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Installs the global subscriber. Call once, before the first event.
pub fn init_logger(style: LogStyle, verbose: bool) {
    let registry = tracing_subscriber::registry().with(env_filter(verbose));

    match style {
        LogStyle::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time()
                    .compact(),
            )
            .init(),
        // Machine readers key on `target` and flat fields, not span context.
        LogStyle::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_target(true),
            )
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "mhs_calc=info,warn");
        assert_eq!(default_directive(true), "mhs_calc=debug,warn");
    }

    #[test]
    fn test_directives_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directive(verbose)).is_ok());
        }
    }
}
