// crates/qualifier-core/src/lib.rs - Quote variant engine and command dispatcher
//
// MODULE ORGANIZATION:
// - variant:  pure text transforms (normal, uwu, piglatin)
// - quote:    quote value with a lazily rendered form
// - command:  the four-form command grammar
// - store:    storage contract and in-memory store
// - dispatch: parse -> validate -> render -> store
// - config:   configuration schema and loading

pub mod command;
pub mod config;
pub mod dispatch;
pub mod quote;
pub mod store;
pub mod variant;

pub use command::{Command, CommandKind, ParseError, parse_command};
pub use config::{ConfigError, ConfigManager, QualifierConfig};
pub use dispatch::{DispatchError, DispatchResult, Dispatcher, ErrorKind, Outcome};
pub use quote::Quote;
pub use store::{MemoryStore, QuoteStore, StoreError};
pub use variant::{MAX_QUOTE_LENGTH, Rendered, VariantMode, render, render_with_limit};
