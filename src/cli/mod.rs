//! CLI argument parsing for csb.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::balance::EntityId;
use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// csb: balance customers across customer success agents.
///
/// Each customer goes to the least capable available agent whose score
/// covers the customer's score. The result is the id of the agent left
/// serving the most customers, or 0 when that maximum is shared.
#[derive(Parser, Debug)]
#[command(name = "csb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file to use instead of ./csb.yaml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for csb.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assign customers to agents and report the busiest agent.
    ///
    /// Prints the busiest agent's id, or 0 when no single agent
    /// serves strictly the most customers.
    Balance(BalanceArgs),

    /// Validate a roster without assigning anything.
    ///
    /// Reports agent, availability, and customer counts.
    Check(CheckArgs),

    /// Write a default config file.
    Init(InitArgs),
}

/// Arguments for the `balance` command.
#[derive(Parser, Debug)]
pub struct BalanceArgs {
    /// Roster file (YAML, or JSON with a .json extension).
    pub roster: PathBuf,

    /// Away agent ids, replacing the roster's `away` list.
    #[arg(long, value_delimiter = ',')]
    pub away: Option<Vec<EntityId>>,

    /// Output format (defaults to the config's `output`).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// List each agent's customers in text output.
    #[arg(long)]
    pub assignments: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Roster file (YAML, or JSON with a .json extension).
    pub roster: PathBuf,

    /// Away agent ids, replacing the roster's `away` list.
    #[arg(long, value_delimiter = ',')]
    pub away: Option<Vec<EntityId>>,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the config file.
    #[arg(long, default_value = "csb.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
