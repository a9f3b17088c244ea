use anyhow::{Context as AnyhowContext, Result};
use qualifier_core::{ConfigManager, Dispatcher, MemoryStore, QualifierConfig};
use std::path::Path;

/// Application context that gets passed to command handlers
///
/// Owns the loaded configuration and the session's dispatcher. The store lives
/// as long as the context, so a REPL session sees its own earlier quotes.
pub struct Context {
    pub dispatcher: Dispatcher<MemoryStore>,
    config: QualifierConfig,
    json: bool,
}

impl Context {
    /// Create a context from an optional config file and the `--json` flag
    pub fn new(config_path: Option<&Path>, json: bool) -> Result<Self> {
        let config =
            ConfigManager::load_config(config_path).context("Failed to load configuration")?;

        let json = json || config.output.format == "json";
        let dispatcher = Dispatcher::from_config(MemoryStore::new(), &config);

        Ok(Self {
            dispatcher,
            config,
            json,
        })
    }

    /// Get the effective configuration
    pub fn config(&self) -> &QualifierConfig {
        &self.config
    }

    /// Whether output should be JSON
    pub fn json(&self) -> bool {
        self.json
    }
}
