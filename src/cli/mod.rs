//! Command-line interface for runetrack.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    CheckArgs, Cli, CombatArgs, Commands, CompletionsArgs, DiffArgs, EvaluateArgs, SchemaArgs,
    SchemaKind, SummaryArgs, ValidateArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
