//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`runetrack evaluate`, `runetrack diff`)
//! - Shared configuration loading through [`Workspace`]
//! - Consistent global flag handling

pub mod check;
pub mod combat;
pub mod completions;
pub mod diff;
pub mod dispatcher;
pub mod display;
pub mod evaluate;
pub mod schema;
pub mod summary;
pub mod validate;
pub mod workspace;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use workspace::Workspace;
