//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber; `RUST_LOG` overrides the `-v` level.
pub(super) fn init(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
