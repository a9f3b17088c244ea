// crates/qualifier-cli/src/stdin.rs - Centralized STDIN handling utility
//
// Follows Unix conventions: read from stdin when no positional args provided.

use anyhow::Result;
use std::io::{self, IsTerminal, Read};

/// Read input from stdin or use provided argument
///
/// UNIX PATTERN:
/// ```bash
/// qualifier run 'quote uwu "Hello"'          # Use argument
/// echo 'quote list' | qualifier run          # Use stdin
/// ```
pub fn read_input_or_stdin(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(value) => Ok(value.to_string()),
        None => {
            // Check if we're in a terminal without piped input
            if io::stdin().is_terminal() {
                return Err(anyhow::anyhow!(
                    "No input provided. Either provide an argument or pipe input.\n\nExamples:\n  qualifier run 'quote uwu \"Hello\"'\n  echo 'quote list' | qualifier run"
                ));
            }

            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;

            let input = buffer.trim().to_string();
            if input.is_empty() {
                return Err(anyhow::anyhow!("Empty input provided"));
            }

            Ok(input)
        }
    }
}
