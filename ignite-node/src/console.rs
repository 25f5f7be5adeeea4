//! Console logging
//!
//! Stands in for the serial console on a host. The store logs through the
//! `log` facade; the fmt subscriber picks those records up and writes them
//! to stderr so command output on stdout stays clean.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

pub const LOG_ENV: &str = "IGNITE_LOG";

/// Level from the `-v` count
pub fn default_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Filter from `IGNITE_LOG` directives, falling back to the `-v` level
pub fn filter(verbose: u8) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

pub fn init(verbose: u8) {
    // A subscriber may already be installed when embedded in a larger program.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .try_init();
}
