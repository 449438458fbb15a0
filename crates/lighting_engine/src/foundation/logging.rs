//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// `default_level` is used as the filter when `RUST_LOG` is not set. Calling
/// this more than once keeps the first logger and only reports the failure.
pub fn init(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);
    if let Err(e) = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()
    {
        log::debug!("Logger already initialized: {}", e);
    }
}
