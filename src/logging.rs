//! Diagnostic logging
//!
//! Status lines meant for the operator go to stdout through [`crate::ui`];
//! everything emitted through `tracing` goes to stderr so it never mixes
//! with them.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("watermark_sync={}", level)
}

/// Initialize the global subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_levels() {
        assert_eq!(default_directive(false), "watermark_sync=warn");
        assert_eq!(default_directive(true), "watermark_sync=debug");
    }

    #[test]
    fn test_second_init_is_rejected() {
        let first = init_logging(false);
        let second = init_logging(false);
        // Another test may have installed the subscriber first.
        assert!(first.is_err() || second.is_err());
    }
}
