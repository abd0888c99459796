//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`gradtrack check`, `gradtrack lint`)
//! - Shared config and input loading through [`context::ProjectContext`]
//! - Consistent global flag handling

pub mod check;
pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod display;
pub mod lint;
pub mod migrate;
pub mod schema;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
