// crates/qualifier-cli/src/logging.rs - tracing subscriber setup
//
// Logs go to stderr so stdout only ever carries command output.

use std::io::{self, IsTerminal};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber
///
/// RUST_LOG wins when set. Otherwise `--verbose` enables debug output for both
/// crates, and the configured level applies to everything else.
pub fn init(level: &str, verbose: bool) {
    INIT_ONCE.call_once(|| {
        let fallback = if verbose {
            "qualifier_cli=debug,qualifier_core=debug".to_string()
        } else {
            level.to_string()
        };

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
            )
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
            .with_target(false)
            .init();
    });
}
