// crates/qualifier-core/src/dispatch.rs - Command dispatcher
//
// Single pass from a raw command line to a store effect:
//
//   parse -> (list | check raw length -> render -> mode check -> add)
//
// The dispatcher holds no state of its own beyond the store it is given and the
// length limit, so every call starts from scratch and a rejected command never
// touches the store.

use thiserror::Error;
use tracing::{debug, info};

use crate::command::{Command, ParseError, parse_command};
use crate::config::QualifierConfig;
use crate::quote::Quote;
use crate::store::{QuoteStore, StoreError};
use crate::variant::{MAX_QUOTE_LENGTH, VariantMode};

/// Notice shown when a rendered quote is already stored
pub const DUPLICATE_NOTICE: &str = "Quote has already been added previously";

/// Errors that abort a command
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Quote is too long ({length} characters, maximum is {max})")]
    TooLong { length: usize, max: usize },

    #[error("Quote was not modified: pig latin result is {length} characters, maximum is {max}")]
    ResultTooLong { length: usize, max: usize },

    #[error("Quote was not modified")]
    NotModified,

    #[error("Store error: {0}")]
    Store(StoreError),
}

/// Result type for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Coarse error taxonomy for callers that branch on the failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Length,
    NoOpTransform,
    Store,
}

impl DispatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Parse,
            Self::TooLong { .. } | Self::ResultTooLong { .. } => ErrorKind::Length,
            Self::NotModified => ErrorKind::NoOpTransform,
            Self::Store(_) => ErrorKind::Store,
        }
    }
}

/// What a successful command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rendered quotes in store order
    Listed(Vec<String>),
    /// The rendered form that was stored
    Added(String),
    /// The rendered form was already present; nothing was stored
    Duplicate(String),
}

impl Outcome {
    /// Human-readable notice for non-fatal outcomes
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Duplicate(_) => Some(DUPLICATE_NOTICE),
            Self::Listed(_) | Self::Added(_) => None,
        }
    }
}

/// Wires the command grammar, variant engine and store together
#[derive(Debug)]
pub struct Dispatcher<S> {
    store: S,
    max_length: usize,
}

impl<S: QuoteStore> Dispatcher<S> {
    /// Create a dispatcher with the default 50-character limit
    pub fn new(store: S) -> Self {
        Self::with_max_length(store, MAX_QUOTE_LENGTH)
    }

    /// Create a dispatcher with a custom length limit
    pub fn with_max_length(store: S, max_length: usize) -> Self {
        Self { store, max_length }
    }

    /// Create a dispatcher using the configured limits
    pub fn from_config(store: S, config: &QualifierConfig) -> Self {
        Self::with_max_length(store, config.limits.max_quote_length)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Parse and execute a raw command line
    pub fn run(&self, input: &str) -> DispatchResult<Outcome> {
        let command = parse_command(input)?;
        self.execute(command)
    }

    /// Execute an already parsed command
    pub fn execute(&self, command: Command) -> DispatchResult<Outcome> {
        match command {
            Command::List => self.list(),
            Command::Create { mode, text } => self.create(mode, text),
        }
    }

    fn list(&self) -> DispatchResult<Outcome> {
        let quotes = self.store.list().map_err(DispatchError::Store)?;
        debug!(count = quotes.len(), "listing quotes");
        Ok(Outcome::Listed(quotes))
    }

    fn create(&self, mode: VariantMode, text: String) -> DispatchResult<Outcome> {
        let length = text.chars().count();
        if length > self.max_length {
            return Err(DispatchError::TooLong {
                length,
                max: self.max_length,
            });
        }

        let quote = Quote::with_limit(text, mode, self.max_length);
        self.validate(&quote)?;

        let rendered = quote.rendered().to_string();
        match self.store.add(quote) {
            Ok(()) => {
                info!(%mode, quote = %rendered, "stored quote");
                Ok(Outcome::Added(rendered))
            }
            Err(StoreError::Duplicate(existing)) => {
                debug!(%mode, quote = %existing, "duplicate quote discarded");
                Ok(Outcome::Duplicate(existing))
            }
            Err(err) => Err(DispatchError::Store(err)),
        }
    }

    fn validate(&self, quote: &Quote) -> DispatchResult<()> {
        match quote.mode() {
            VariantMode::Normal => Ok(()),
            VariantMode::Uwu => {
                if quote.is_unchanged() {
                    Err(DispatchError::NotModified)
                } else {
                    Ok(())
                }
            }
            VariantMode::PigLatin => {
                let length = quote.rendered().chars().count();
                if length > self.max_length {
                    Err(DispatchError::ResultTooLong {
                        length,
                        max: self.max_length,
                    })
                } else {
                    Ok(())
                }
            }
        }
    }
}
