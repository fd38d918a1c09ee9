//! Logger setup
//!
//! Logs go to stderr so stdout stays a single plugin line.

use log::LevelFilter;

/// Level applied when verbose output is requested
pub const VERBOSE_LEVEL: LevelFilter = LevelFilter::Debug;

/// Default filter when neither `-v` nor `RUST_LOG` says otherwise
pub const DEFAULT_FILTER: &str = "warn";

/// Build the stderr logger
///
/// Verbose mode logs everything at debug and above. Otherwise `RUST_LOG`
/// applies, falling back to warnings only.
pub fn logger(verbose: bool) -> env_logger::Builder {
    let mut builder = if verbose {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(VERBOSE_LEVEL);
        builder
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
    };
    builder.format_timestamp(None);
    builder
}

/// Install the stderr logger
pub fn init_logging(verbose: bool) {
    if let Err(e) = logger(verbose).try_init() {
        eprintln!("Failed to initialise logging: {}", e);
    }
}
