// crates/qualifier-cli/src/commands/mod.rs - Command Handler Modules
//
// MODULE ORGANIZATION:
// - run:    dispatch one quote command
// - repl:   dispatch a stream of quote commands against one store
// - render: run the variant engine directly
// - config: show effective or default configuration

pub mod config;
pub mod render;
pub mod repl;
pub mod run;
