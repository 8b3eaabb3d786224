//! Tracing subscriber setup.

use crate::config::Mode;
use tracing_subscriber::EnvFilter;

fn default_level(mode: Mode) -> &'static str {
    match mode {
        Mode::Local | Mode::Dev => "debug",
        Mode::Prod => "info",
    }
}

/// Install the global subscriber for `mode`. `RUST_LOG` overrides the level.
///
/// Local runs get human-readable output, dev and prod get JSON lines.
pub fn init_tracing(mode: Mode) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(mode)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match mode {
        Mode::Local => builder.try_init(),
        Mode::Dev | Mode::Prod => builder.json().try_init(),
    };

    if let Err(e) = result {
        eprintln!("Tracing already initialized: {}", e);
    }
}
