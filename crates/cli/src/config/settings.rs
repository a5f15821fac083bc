// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed view of the effective configuration.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::EffectiveConfig;
use super::defaults::keys;
use crate::error::{Error, Result};

/// An external command prefix such as `php ./vendor/bin/phpcs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Split a command string on whitespace into program and leading args.
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(String::from);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Every value the pipeline needs, looked up once per cycle.
///
/// Building this before any check runs means a missing or mistyped key
/// aborts the run before an external process is launched.
#[derive(Debug, Clone)]
pub struct Settings {
    pub run_lint: bool,
    pub run_style_fixer: bool,
    pub style_fixer_standard: String,
    pub run_style_checker: bool,
    pub style_checker_standard: String,
    pub run_mess_detector: bool,
    pub run_test_suite: bool,
    pub auto_restage_fixes: bool,
    pub excluded_path_prefixes: Vec<String>,
    pub source_extensions: Vec<String>,
    pub lint_command: CommandLine,
    pub style_fixer_command: CommandLine,
    pub style_checker_command: CommandLine,
    pub mess_detector_command: CommandLine,
    pub mess_detector_rule_file: PathBuf,
    pub mess_detector_ruleset: String,
    pub test_suite_command: CommandLine,
    pub test_suite_timeout: Duration,
    pub max_restarts: usize,
}

impl Settings {
    pub fn from_config(config: &EffectiveConfig) -> Result<Self> {
        let command = |key: &str| -> Result<CommandLine> {
            let raw = config.string(key)?;
            CommandLine::parse(raw).ok_or_else(|| Error::Config {
                message: format!("`{key}` must not be empty"),
                path: Some(config.path().to_path_buf()),
            })
        };

        let max_restarts = config.integer(keys::MAX_RESTARTS)?;
        let max_restarts = usize::try_from(max_restarts).map_err(|_| Error::Config {
            message: format!("`{}` must not be negative", keys::MAX_RESTARTS),
            path: Some(config.path().to_path_buf()),
        })?;

        Ok(Self {
            run_lint: config.bool(keys::RUN_LINT)?,
            run_style_fixer: config.bool(keys::RUN_STYLE_FIXER)?,
            style_fixer_standard: config.string(keys::STYLE_FIXER_STANDARD)?.to_string(),
            run_style_checker: config.bool(keys::RUN_STYLE_CHECKER)?,
            style_checker_standard: config.string(keys::STYLE_CHECKER_STANDARD)?.to_string(),
            run_mess_detector: config.bool(keys::RUN_MESS_DETECTOR)?,
            run_test_suite: config.bool(keys::RUN_TEST_SUITE)?,
            auto_restage_fixes: config.bool(keys::AUTO_RESTAGE_FIXES)?,
            excluded_path_prefixes: config.list(keys::EXCLUDED_PATH_PREFIXES)?,
            source_extensions: config.list(keys::SOURCE_EXTENSIONS)?,
            lint_command: command(keys::LINT_COMMAND)?,
            style_fixer_command: command(keys::STYLE_FIXER_COMMAND)?,
            style_checker_command: command(keys::STYLE_CHECKER_COMMAND)?,
            mess_detector_command: command(keys::MESS_DETECTOR_COMMAND)?,
            mess_detector_rule_file: PathBuf::from(config.string(keys::MESS_DETECTOR_RULE_FILE)?),
            mess_detector_ruleset: config.string(keys::MESS_DETECTOR_RULESET)?.to_string(),
            test_suite_command: command(keys::TEST_SUITE_COMMAND)?,
            test_suite_timeout: config.duration(keys::TEST_SUITE_TIMEOUT)?,
            max_restarts,
        })
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
