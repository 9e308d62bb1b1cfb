//! stderr logging for the binary.
//!
//! `RUST_LOG` wins when it is set; otherwise the level follows the
//! `--quiet`/`--verbose` flags.
use std::io::IsTerminal as _;

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is absent or invalid.
pub fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global `tracing` subscriber, writing to stderr.
pub fn init(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(e) = installed {
        eprintln!("warning: logging unavailable: {e}");
    }
}
