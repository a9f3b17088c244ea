use anyhow::Result;
use qualifier_core::ConfigManager;

use crate::context::Context;

/// Print the effective configuration, or the commented default file
pub fn handle(ctx: &Context, default: bool) -> Result<()> {
    if default {
        print!("{}", ConfigManager::generate_default_config());
    } else {
        print!("{}", ConfigManager::to_toml_string(ctx.config())?);
    }
    Ok(())
}
