//! Logging initialization.
//!
//! Diagnostics go to stderr so they never mix with the statistics on stdout.
//! The level can be controlled via the `RUST_LOG` environment variable,
//! which takes precedence over `--verbose`:
//! - default: warnings only (invalid rules, rule file fallbacks)
//! - `--verbose`: one debug line per history entry decision
//! - `RUST_LOG=histclean=info`: backup and write steps

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "histclean=debug"
    } else {
        "histclean=warn"
    }
}

/// Initialize the global subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(crate::theme::color_enabled_for_stderr())
        .with_timer(ChronoLocal::new("%H:%M:%S".to_string()))
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
