// crates/qualifier-core/src/quote.rs - Quote value with a lazily rendered form

use std::cell::OnceCell;
use std::fmt;

use crate::variant::{MAX_QUOTE_LENGTH, Rendered, VariantMode, render_with_limit};

/// A raw quote paired with the variant it should be displayed in
///
/// The rendered form is a pure function of `text` and `mode`; it is computed on
/// first access and cached. Callers are expected to have checked the raw text
/// length before constructing a `Quote`.
#[derive(Debug, Clone)]
pub struct Quote {
    text: String,
    mode: VariantMode,
    limit: usize,
    rendered: OnceCell<Rendered>,
}

impl Quote {
    /// Create a quote using the default length limit
    pub fn new<S: Into<String>>(text: S, mode: VariantMode) -> Self {
        Self::with_limit(text, mode, MAX_QUOTE_LENGTH)
    }

    /// Create a quote whose uwu stutter stage is capped at `limit` characters
    pub fn with_limit<S: Into<String>>(text: S, mode: VariantMode, limit: usize) -> Self {
        Self {
            text: text.into(),
            mode,
            limit,
            rendered: OnceCell::new(),
        }
    }

    /// Get the original text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the variant mode
    pub fn mode(&self) -> VariantMode {
        self.mode
    }

    /// Get the rendered form, computing it if needed
    pub fn rendered(&self) -> &str {
        &self.rendition().text
    }

    /// Whether the uwu length guard kicked in while rendering
    pub fn is_partial(&self) -> bool {
        self.rendition().partial
    }

    /// Whether rendering left the text exactly as written
    pub fn is_unchanged(&self) -> bool {
        self.rendered() == self.text
    }

    /// Consume the quote, keeping only the rendered form
    pub fn into_rendered(self) -> String {
        let limit = self.limit;
        let mode = self.mode;
        match self.rendered.into_inner() {
            Some(rendered) => rendered.text,
            None => render_with_limit(&self.text, mode, limit).text,
        }
    }

    fn rendition(&self) -> &Rendered {
        self.rendered
            .get_or_init(|| render_with_limit(&self.text, self.mode, self.limit))
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rendered())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_matches_engine() {
        let quote = Quote::new("Hello Royal", VariantMode::Uwu);
        assert_eq!(quote.text(), "Hello Royal");
        assert_eq!(quote.mode(), VariantMode::Uwu);
        assert_eq!(quote.rendered(), "Hewwo Woyaw");
        assert_eq!(quote.to_string(), "Hewwo Woyaw");
    }

    #[test]
    fn test_unchanged_detection() {
        assert!(Quote::new("kitten", VariantMode::Uwu).is_unchanged());
        assert!(Quote::new("kitten", VariantMode::Normal).is_unchanged());
        assert!(!Quote::new("kitten", VariantMode::PigLatin).is_unchanged());
    }

    #[test]
    fn test_partial_flag_uses_limit() {
        let quote = Quote::with_limit("us", VariantMode::Uwu, 3);
        assert!(quote.is_partial());
        assert_eq!(quote.rendered(), "us");

        let quote = Quote::new("us", VariantMode::Uwu);
        assert!(!quote.is_partial());
        assert_eq!(quote.rendered(), "u-us");
    }

    #[test]
    fn test_into_rendered_with_and_without_cache() {
        let quote = Quote::new("yellow", VariantMode::PigLatin);
        assert_eq!(quote.into_rendered(), "Ellowyay");

        let quote = Quote::new("yellow", VariantMode::PigLatin);
        let _ = quote.rendered();
        assert_eq!(quote.into_rendered(), "Ellowyay");
    }
}
