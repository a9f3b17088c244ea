use anyhow::{Context as AnyhowContext, Result};
use console::style;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

use crate::commands::run::report;
use crate::context::Context;

/// Read commands line by line and dispatch each against the session store
///
/// A failing command is reported and the session carries on. Blank lines are
/// skipped. A prompt is shown only when stdin is a terminal.
pub fn handle(ctx: &Context) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut failures = 0usize;

    if interactive {
        prompt()?;
    }

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read command from stdin")?;
        let command = line.trim();

        if !command.is_empty() {
            match ctx.dispatcher.run(command) {
                Ok(outcome) => report(ctx, &outcome)?,
                Err(e) => {
                    failures += 1;
                    eprintln!("{} {}", style("Error:").red().bold(), e);
                }
            }
        }

        if interactive {
            prompt()?;
        }
    }

    debug!(
        failures,
        stored = ctx.dispatcher.store().len(),
        "repl session finished"
    );
    Ok(())
}

fn prompt() -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}
