//! Logging setup for the command-line front end
//!
//! Log lines go to stderr so they never mix with the lookup output on
//! stdout. The level comes from `RUST_LOG` and defaults to `info`.

use env_logger::{Builder, Env};

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "info";

/// Initialize the global logger
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let result = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_millis()
        .target(env_logger::Target::Stderr)
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}
