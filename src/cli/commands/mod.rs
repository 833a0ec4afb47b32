//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands (`deploylint check`, `deploylint serve`) to their
//! implementations.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod rules;
pub mod serve;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
