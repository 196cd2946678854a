//! Logger setup.

/// Initialize logging, if enabled.
///
/// With the `env_logger` feature this installs `env_logger`, so `RUST_LOG`
/// selects what is printed to stderr. Otherwise no logger is installed and
/// records are dropped.
pub fn init() {
    // Initialize the chosen logger.
    #[cfg(feature = "env_logger")]
    env_logger::init();

    log::trace!(target: "sailor::program", "Logger initialized");
}
