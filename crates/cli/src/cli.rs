// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A pre-commit gate that runs lint, style and mess checks on staged code
#[derive(Parser)]
#[command(name = "stagegate")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file instead of <root>/.stagegate/config.yml
    #[arg(short = 'C', long = "config", global = true, env = "STAGEGATE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the pre-commit checks
    Check(CheckArgs),
    /// Write the default configuration file
    Init(InitArgs),
    /// Show the effective configuration
    Config(ConfigArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Candidate files to check
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Project root (tools run from here)
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Also check the files staged in the git index
    #[arg(long)]
    pub staged: bool,

    /// Answer "no" to every question
    #[arg(short = 'n', long, env = "STAGEGATE_NO_INTERACTION")]
    pub no_interaction: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Project root to write the configuration into
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    /// Project root to read the configuration from
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
