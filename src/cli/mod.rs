//! Command-line interface for sprint
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is implemented in its own submodule.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

mod columns;
mod table;

/// sprint - sprint task tables
///
/// Builds dependency-aware task tables for a sprint from a JSON snapshot of
/// its tasks, edges, story points and owner handles.
#[derive(Parser, Debug)]
#[command(name = "sprint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory to look for `.sprint.toml` in (defaults to current directory)
    #[arg(long, global = true, env = "SPRINT_DIR")]
    pub dir: Option<PathBuf>,

    /// Explicit config file; errors in it are reported instead of ignored
    #[arg(long, global = true, env = "SPRINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the task table for a sprint snapshot
    Table {
        /// Snapshot JSON file (tasks, edges, points, handles)
        #[arg(long, short)]
        snapshot: PathBuf,

        /// Column to order by, e.g. "Priority" or "-Last Update" to reverse
        #[arg(long, allow_hyphen_values = true)]
        order: Option<String>,
    },

    /// List the columns the table can be ordered by
    Columns,
}

impl Cli {
    /// Subcommand name used to label output envelopes.
    pub fn command_name(&self) -> &'static str {
        match self.command {
            Commands::Table { .. } => "table",
            Commands::Columns => "columns",
        }
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Table { snapshot, order } => table::run(table::TableOptions {
                snapshot,
                order,
                dir: self.dir,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Columns => columns::run(columns::ColumnsOptions {
                dir: self.dir,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}

/// An explicit config path must load cleanly; otherwise fall back to
/// `.sprint.toml` in `dir`, then the user config, then defaults.
fn load_config(dir: Option<&Path>, config: Option<&Path>) -> Result<Config> {
    if let Some(path) = config {
        return Config::load(path);
    }
    let dir = dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    Ok(Config::load_from_dir(&dir))
}
