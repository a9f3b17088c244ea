// crates/qualifier-core/src/command.rs - Command grammar
//
// Four literal forms, matched case-sensitively at the start of the input:
//
//   quote uwu "<text>"
//   quote piglatin "<text>"
//   quote list
//   quote "<text>"
//
// Text may open with " or “ and close with " or ”. Anything after the match is
// ignored. The text group is optional in the grammar so that `quote list` can
// match; creation commands without text are rejected afterwards.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

use crate::variant::VariantMode;

static COMMAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?P<command>quote uwu|quote piglatin|quote list|quote)( ["“](?P<quote>.+)["”])?"#)
        .unwrap()
});

/// Errors that can occur while parsing a command line
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid command")]
    InvalidCommand,

    #[error("Invalid command: `{command}` needs quoted text")]
    MissingQuote { command: CommandKind },
}

/// Result type for command parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// The command keyword that matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Quote,
    QuoteUwu,
    QuotePigLatin,
    QuoteList,
}

impl CommandKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "quote" => Some(Self::Quote),
            "quote uwu" => Some(Self::QuoteUwu),
            "quote piglatin" => Some(Self::QuotePigLatin),
            "quote list" => Some(Self::QuoteList),
            _ => None,
        }
    }

    /// Get the literal keyword as typed by the user
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::QuoteUwu => "quote uwu",
            Self::QuotePigLatin => "quote piglatin",
            Self::QuoteList => "quote list",
        }
    }

    /// Variant mode implied by a creation keyword
    pub fn mode(&self) -> Option<VariantMode> {
        match self {
            Self::Quote => Some(VariantMode::Normal),
            Self::QuoteUwu => Some(VariantMode::Uwu),
            Self::QuotePigLatin => Some(VariantMode::PigLatin),
            Self::QuoteList => None,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show every stored quote
    List,
    /// Create a new quote in the given mode
    Create { mode: VariantMode, text: String },
}

impl Command {
    /// Parse a raw command line
    pub fn parse<S: AsRef<str>>(input: S) -> ParseResult<Self> {
        parse_command(input.as_ref())
    }
}

/// Parse a raw command line against the quote grammar
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let captures = COMMAND_RE
        .captures(input)
        .ok_or(ParseError::InvalidCommand)?;

    let kind = captures
        .name("command")
        .and_then(|m| CommandKind::from_keyword(m.as_str()))
        .ok_or(ParseError::InvalidCommand)?;
    let text = captures.name("quote").map(|m| m.as_str().to_string());

    debug!(command = %kind, has_text = text.is_some(), "parsed command");

    match (kind.mode(), text) {
        (None, _) => Ok(Command::List),
        (Some(mode), Some(text)) => Ok(Command::Create { mode, text }),
        (Some(_), None) => Err(ParseError::MissingQuote { command: kind }),
    }
}
