use clap::{Parser, Subcommand};
use qualifier_core::VariantMode;
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "qualifier")]
#[command(about = "Store quotes as written, uwu-ified, or in pig latin")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "QUALIFIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print listings as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run a single quote command, e.g. `quote uwu "Hello"`
    Run {
        /// Command line to dispatch (read from stdin when omitted)
        command: Option<String>,
    },

    /// Read quote commands from stdin, one per line, against one session store
    Repl,

    /// Render text in a variant without storing it
    Render {
        /// Variant mode: normal, uwu or piglatin
        #[arg(short, long, default_value = "normal")]
        mode: VariantMode,

        /// Text to render (read from stdin when omitted)
        text: Option<String>,
    },

    /// Show configuration
    Config {
        /// Print the commented default configuration file instead
        #[arg(long)]
        default: bool,
    },
}
