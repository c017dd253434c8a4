//! CLI command definitions for the `botgen` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod catalog;
pub mod check;
pub mod generate;
pub mod logging;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

/// Generate Telegram bot programs from builder configurations.
#[derive(Parser, Debug)]
#[command(name = "botgen", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a bot program from a JSON request.
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// List the supported block types.
    Catalog,

    /// Inspect a generated program: handlers, replies, duplicate names.
    Check {
        /// Python file to inspect ("-" for stdin).
        file: PathBuf,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Request JSON file ("-" for stdin).
    pub input: PathBuf,

    /// Write the program here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generator config (TOML).
    #[arg(long, env = "BOTGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Input uses the legacy flat format.
    #[arg(long)]
    pub legacy: bool,

    /// Drop blocks whose text contains line breaks instead of escaping them.
    #[arg(long)]
    pub reject_newlines: bool,
}

/// Read a whole file, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
