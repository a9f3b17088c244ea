// crates/qualifier-core/src/variant.rs - Quote variant engine
//
// Pure text transforms applied to a raw quote. Every function here is total and
// deterministic: the same input and mode always produce the same rendered form,
// and the input is never touched.
//
// MODES:
// - normal:   identity
// - uwu:      l/r -> w substitution, then "u-u" stutters at word starts
// - piglatin: word-by-word consonant cluster rotation with "ay"/"way" suffixes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Longest quote, in characters, accepted by default
pub const MAX_QUOTE_LENGTH: usize = 50;

const VOWELS: &str = "aeiouAEIOU";

/// Errors that can occur while selecting a variant
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VariantError {
    #[error("Unknown variant mode: {0} (expected normal, uwu or piglatin)")]
    UnknownMode(String),
}

/// The transformation style requested for a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantMode {
    /// Stored exactly as written
    #[default]
    Normal,
    /// "uwu-ified"
    Uwu,
    /// "pig-latinized"
    PigLatin,
}

impl VariantMode {
    /// All modes, in declaration order
    pub const ALL: [VariantMode; 3] = [Self::Normal, Self::Uwu, Self::PigLatin];

    /// Get the mode's canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Uwu => "uwu",
            Self::PigLatin => "piglatin",
        }
    }
}

impl fmt::Display for VariantMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantMode {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "uwu" => Ok(Self::Uwu),
            "piglatin" => Ok(Self::PigLatin),
            other => Err(VariantError::UnknownMode(other.to_string())),
        }
    }
}

/// Result of rendering a quote
///
/// `partial` is set when the uwu length guard dropped the stutter stage. It is a
/// warning, not a failure: `text` is always usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub partial: bool,
}

impl Rendered {
    fn complete(text: String) -> Self {
        Self {
            text,
            partial: false,
        }
    }
}

/// Render `text` in `mode` using the default length limit
pub fn render(text: &str, mode: VariantMode) -> String {
    render_with_limit(text, mode, MAX_QUOTE_LENGTH).text
}

/// Render `text` in `mode`, using `limit` as the uwu stutter ceiling
pub fn render_with_limit(text: &str, mode: VariantMode, limit: usize) -> Rendered {
    match mode {
        VariantMode::Normal => Rendered::complete(text.to_string()),
        VariantMode::Uwu => uwuify(text, limit),
        VariantMode::PigLatin => Rendered::complete(pig_latinize(text)),
    }
}

/// Two-stage uwu rewrite with a length guard on the second stage
///
/// Stage 1 swaps l/r for w (case preserved). Stage 2 turns " U" into " U-U",
/// " u" into " u-u", and doubles a leading U/u. If stage 2 grows past `limit`
/// characters the stage 1 result is returned instead.
fn uwuify(text: &str, limit: usize) -> Rendered {
    let stage_one = substitute_consonants(text);
    let stage_two = insert_stutters(&stage_one);

    let length = stage_two.chars().count();
    if length > limit {
        warn!(length, limit, "Quote too long, only partially transformed");
        return Rendered {
            text: stage_one,
            partial: true,
        };
    }

    Rendered::complete(stage_two)
}

fn substitute_consonants(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'l' | 'r' => 'w',
            'L' | 'R' => 'W',
            other => other,
        })
        .collect()
}

fn insert_stutters(text: &str) -> String {
    let stuttered = text.replace(" U", " U-U").replace(" u", " u-u");

    match stuttered.chars().next() {
        Some(first @ ('U' | 'u')) => format!("{first}-{stuttered}"),
        _ => stuttered,
    }
}

/// Pig-latinize every whitespace-separated word, then capitalize the sentence
///
/// Words starting with a vowel (or containing none) get "way" appended. Other
/// words move their leading consonant cluster to the end followed by "ay".
/// The joined result is lowercased with an uppercase first character.
pub fn pig_latinize(text: &str) -> String {
    let words: Vec<String> = text.split_whitespace().map(pig_latin_word).collect();
    capitalize(&words.join(" "))
}

fn pig_latin_word(word: &str) -> String {
    // Vowels are ASCII, so the byte offset is always a char boundary
    match word.find(|c: char| VOWELS.contains(c)) {
        Some(0) | None => format!("{word}way"),
        Some(first_vowel) => format!("{}{}ay", &word[first_vowel..], &word[..first_vowel]),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
