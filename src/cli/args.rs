//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::OutputFormat;

/// Runetrack - Old School RuneScape requirements and progress tracking.
#[derive(Debug, Parser)]
#[command(name = "runetrack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides the layered .runetrack/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides discovery from the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate content bundles against a character's facts
    Evaluate(EvaluateArgs),

    /// Evaluate a single inline requirement
    Check(CheckArgs),

    /// Compare two progress snapshots
    Diff(DiffArgs),

    /// Summarize gains across a directory of snapshots
    Summary(SummaryArgs),

    /// Calculate a combat level
    Combat(CombatArgs),

    /// Validate content bundles
    Validate(ValidateArgs),

    /// Print a JSON Schema for content files
    Schema(SchemaArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `evaluate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EvaluateArgs {
    /// Content bundle file or directory (repeatable; overrides config)
    #[arg(long, value_name = "PATH")]
    pub content: Vec<PathBuf>,

    /// Fact source document (overrides config)
    #[arg(long, value_name = "PATH")]
    pub facts: Option<PathBuf>,

    /// Evaluate only this quest
    #[arg(long, value_name = "ID", conflicts_with = "diary")]
    pub quest: Option<String>,

    /// Evaluate only this diary
    #[arg(long, value_name = "ID")]
    pub diary: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Requirement as inline JSON or YAML
    #[arg(short, long, value_name = "REQUIREMENT")]
    pub requirement: String,

    /// Fact source document (overrides config)
    #[arg(long, value_name = "PATH")]
    pub facts: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `diff` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DiffArgs {
    /// Earlier snapshot
    pub previous: PathBuf,

    /// Later snapshot
    pub current: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show unchanged skills and activities too
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the `summary` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SummaryArgs {
    /// Snapshot directory (overrides config)
    #[arg(long, value_name = "DIR")]
    pub snapshots: Option<PathBuf>,

    /// Window to summarize, e.g. 7d or 24h (default: everything)
    #[arg(long, value_name = "DURATION")]
    pub since: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `combat` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CombatArgs {
    #[arg(long, default_value_t = 1.0)]
    pub attack: f64,

    #[arg(long, default_value_t = 1.0)]
    pub strength: f64,

    #[arg(long, default_value_t = 1.0)]
    pub defence: f64,

    #[arg(long, default_value_t = 10.0)]
    pub hitpoints: f64,

    #[arg(long, default_value_t = 1.0)]
    pub prayer: f64,

    #[arg(long, default_value_t = 1.0)]
    pub ranged: f64,

    #[arg(long, default_value_t = 1.0)]
    pub magic: f64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for CombatArgs {
    fn default() -> Self {
        Self {
            attack: 1.0,
            strength: 1.0,
            defence: 1.0,
            hitpoints: 10.0,
            prayer: 1.0,
            ranged: 1.0,
            magic: 1.0,
            json: false,
        }
    }
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {
    /// Content bundle file or directory (repeatable; overrides config)
    #[arg(long, value_name = "PATH")]
    pub content: Vec<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Output format (defaults to settings.output_format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Which schema to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    /// A whole content bundle
    #[default]
    Bundle,
    /// A single requirement
    Requirement,
}

/// Arguments for the `schema` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SchemaArgs {
    #[arg(long, value_enum, default_value_t = SchemaKind::Bundle)]
    pub kind: SchemaKind,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
