//! Diagnostic logging setup
//!
//! Logs go to stderr so they never mix with listing output on stdout.
//! `TASKCORE_LOG` takes an `EnvFilter` directive (e.g. `taskcore=trace`);
//! without it the level is `warn`, or `debug` when `--debug` is passed.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "TASKCORE_LOG";

/// Installs the global subscriber; later calls are ignored
pub fn init(debug: bool) {
    let default_directive = if debug { "taskcore=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_directive.into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
