// src/logging.rs
use tracing_subscriber::filter::LevelFilter;

/// Install the stderr subscriber.
///
/// Library crates log through the `log` facade; the subscriber's log bridge
/// picks those records up. Calling this twice keeps the first subscriber.
pub fn init(level: LevelFilter) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();

    if installed.is_err() {
        log::debug!("logging already initialized");
    }
}
