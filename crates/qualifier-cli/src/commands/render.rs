use anyhow::Result;
use qualifier_core::{VariantMode, render_with_limit};

use crate::context::Context;
use crate::stdin::read_input_or_stdin;

/// Render text in a variant without touching the store
///
/// Uses the configured limit for the uwu stutter guard. When the guard fires the
/// engine logs a warning and the partially transformed text is still printed.
pub fn handle(ctx: &Context, mode: VariantMode, text: Option<String>) -> Result<()> {
    let text = read_input_or_stdin(text.as_deref())?;
    let rendered = render_with_limit(&text, mode, ctx.config().limits.max_quote_length);

    if ctx.json() {
        let output = serde_json::json!({
            "text": text,
            "mode": mode,
            "rendered": rendered.text,
            "partial": rendered.partial,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", rendered.text);
    }

    Ok(())
}
