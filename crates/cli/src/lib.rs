// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stagegate library.
//!
//! A pre-commit gate: filters the candidate files, runs lint, style and
//! mess checks and the test suite as external tools, and lets the user
//! fix and restart before the commit is accepted or rejected.

pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod filter;
pub mod git;
pub mod init;
pub mod output;
pub mod pipeline;
pub mod process;
pub mod prompt;
pub mod runner;
pub mod verdict;

pub use check::{CheckKind, CheckResult, Failure, FailureKind};
pub use cli::{CheckArgs, Cli, Command, ConfigArgs, InitArgs, OutputFormat};
pub use config::{EffectiveConfig, Settings};
pub use error::{Error, ExitCode, Result};
pub use pipeline::Pipeline;
pub use verdict::Verdict;

#[cfg(test)]
pub mod test_utils;
