use anyhow::Result;
use console::style;
use qualifier_core::Outcome;
use tracing::debug;

use crate::context::Context;
use crate::stdin::read_input_or_stdin;

/// Dispatch a single command line
pub fn handle(ctx: &Context, command: Option<String>) -> Result<()> {
    let input = read_input_or_stdin(command.as_deref())?;
    let outcome = ctx.dispatcher.run(&input)?;
    report(ctx, &outcome)
}

/// Print what a successful command did
///
/// Listings go to stdout, one `<bullet> <quote>` line each (or a JSON array).
/// A duplicate notice goes to stderr and is not treated as a failure.
pub fn report(ctx: &Context, outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Listed(quotes) => print_listing(ctx, quotes)?,
        Outcome::Added(quote) => debug!(quote = %quote, "quote added"),
        Outcome::Duplicate(_) => {
            if let Some(notice) = outcome.notice() {
                eprintln!("{}", style(notice).yellow());
            }
        }
    }
    Ok(())
}

fn print_listing(ctx: &Context, quotes: &[String]) -> Result<()> {
    if ctx.json() {
        println!("{}", serde_json::to_string_pretty(quotes)?);
    } else {
        let bullet = &ctx.config().output.bullet;
        for quote in quotes {
            println!("{} {}", bullet, quote);
        }
    }
    Ok(())
}
