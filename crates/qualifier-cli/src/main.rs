// crates/qualifier-cli/src/main.rs - CLI Application Entry Point
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │ (clap commands) │    │ (main function)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │  qualifier-core     │
//                        │(config + store)  │    │ (dispatch, engine)  │
//                        └──────────────────┘    └─────────────────────┘
//
// EXAMPLE USAGE:
// ```bash
// qualifier run 'quote uwu "Hello Royal"'         # Hewwo Woyaw is stored
// qualifier render --mode piglatin "apple pie"    # Appleway iepay
// printf 'quote "a"\nquote list\n' | qualifier repl
// ```

use anyhow::Result;
use clap::Parser;

mod cli; // Command-line interface definitions
mod commands; // Command implementations
mod context; // Configuration and session store
mod logging; // tracing subscriber setup
mod stdin; // Stdin functions for command inputs

use cli::{Cli, Commands};
use context::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let ctx = Context::new(cli.config.as_deref(), cli.json)?;
    logging::init(&ctx.config().logging.level, cli.verbose);

    match cli.command {
        Commands::Run { command } => commands::run::handle(&ctx, command),
        Commands::Repl => commands::repl::handle(&ctx),
        Commands::Render { mode, text } => commands::render::handle(&ctx, mode, text),
        Commands::Config { default } => commands::config::handle(&ctx, default),
    }
}
