//! Logging for the `hangover` binary.
//!
//! Library crates only emit `tracing` events; this is the one place a
//! subscriber is installed.

use std::sync::Once;

/// Environment variable holding the `EnvFilter` directives.
pub const LOG_ENV: &str = "HANG_LOG";

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical stderr subscriber if `HANG_LOG` is set.
///
/// Only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var_os(LOG_ENV).is_none() {
            return;
        }
        let filter = match EnvFilter::try_from_env(LOG_ENV) {
            Ok(filter) => filter,
            Err(e) => {
                eprintln!("warning: ignoring invalid {LOG_ENV}: {e}");
                return;
            }
        };
        let tree = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true);
        let _ = tracing_subscriber::registry()
            .with(tree)
            .with(filter)
            .try_init();
    });
}
