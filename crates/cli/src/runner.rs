// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential check runner.
//!
//! Runs one check at a time, one external invocation at a time. Per-file
//! checks visit every tracked file even after a failure so the user sees
//! the complete violation list; a check passes iff every invocation did.

use std::path::{Path, PathBuf};

use crate::check::{CheckKind, CheckResult, Failure, FailureKind};
use crate::checks::{self, lint, mess, style, suite};
use crate::config::Settings;
use crate::error::Result;
use crate::output::Reporter;
use crate::process::{Invocation, ProcessError, ProcessOutput, ProcessRunner};

/// Files the fixer rewrote, and the ones it could not.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    pub fixed: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

pub struct CheckRunner<'a> {
    root: &'a Path,
    settings: &'a Settings,
    process: &'a dyn ProcessRunner,
}

impl<'a> CheckRunner<'a> {
    pub fn new(root: &'a Path, settings: &'a Settings, process: &'a dyn ProcessRunner) -> Self {
        Self {
            root,
            settings,
            process,
        }
    }

    /// Run a check over the tracked files.
    ///
    /// Disabled checks are skipped without output and pass vacuously.
    pub fn run(
        &self,
        kind: CheckKind,
        files: &[PathBuf],
        reporter: &mut dyn Reporter,
    ) -> Result<CheckResult> {
        if !checks::enabled(kind, self.settings) {
            tracing::debug!("{kind} disabled in config, skipping");
            return Ok(CheckResult::skipped(kind));
        }

        reporter.check_started(kind)?;

        let planned = self.plan(kind, files);
        let invocations = planned.len();
        let mut failures = Vec::new();

        for (file, invocation) in planned {
            if let Some(failure) = self.execute(file, &invocation) {
                reporter.failure(&failure)?;
                failures.push(failure);
            }
        }

        let result = CheckResult::from_failures(kind, invocations, failures);
        tracing::debug!(
            "{kind}: {} of {} invocations failed",
            result.failures.len(),
            invocations
        );
        Ok(result)
    }

    /// Run the fixer in write mode over the tracked files.
    pub fn apply_fixes(&self, files: &[PathBuf], reporter: &mut dyn Reporter) -> Result<FixOutcome> {
        reporter.note("Fixing code style with the style fixer")?;

        let mut outcome = FixOutcome::default();
        for file in files {
            let invocation = style::fixer_apply(self.settings, file).current_dir(self.root);
            match self.execute(Some(file.clone()), &invocation) {
                None => {
                    reporter.fixed(file)?;
                    outcome.fixed.push(file.clone());
                }
                Some(failure) => {
                    reporter.failure(&failure)?;
                    outcome.failures.push(failure);
                }
            }
        }
        Ok(outcome)
    }

    fn plan(&self, kind: CheckKind, files: &[PathBuf]) -> Vec<(Option<PathBuf>, Invocation)> {
        let settings = self.settings;
        let per_file = |build: &dyn Fn(&Path) -> Invocation| -> Vec<(Option<PathBuf>, Invocation)> {
            files
                .iter()
                .map(|file| (Some(file.clone()), build(file).current_dir(self.root)))
                .collect()
        };

        match kind {
            CheckKind::Lint => per_file(&|file: &Path| lint::invocation(settings, file)),
            CheckKind::StyleFixer => per_file(&|file: &Path| style::fixer_dry_run(settings, file)),
            CheckKind::StyleChecker => per_file(&|file: &Path| style::checker(settings, file)),
            CheckKind::MessDetector => {
                let rules = mess::rule_source(settings, self.root);
                per_file(&|file: &Path| mess::invocation(settings, file, &rules))
            }
            CheckKind::TestSuite => {
                vec![(None, suite::invocation(settings).current_dir(self.root))]
            }
        }
    }

    fn execute(&self, file: Option<PathBuf>, invocation: &Invocation) -> Option<Failure> {
        match self.process.run(invocation) {
            Ok(output) if output.success() => None,
            Ok(output) => Some(Failure::new(
                file,
                FailureKind::Violation,
                diagnostic_text(&output),
            )),
            Err(e @ ProcessError::TimedOut { .. }) => {
                tracing::warn!("{e}");
                Some(Failure::new(file, FailureKind::TimedOut, e.to_string()))
            }
            Err(e @ ProcessError::Launch { .. }) => {
                tracing::warn!("{e}");
                Some(Failure::new(file, FailureKind::LaunchFailed, e.to_string()))
            }
            // The tool started, so a lost exit status counts against the file.
            Err(e @ ProcessError::Wait { .. }) => {
                tracing::warn!("{e}");
                Some(Failure::new(file, FailureKind::Violation, e.to_string()))
            }
        }
    }
}

/// Diagnostic text for a non-zero exit: stderr, then stdout.
fn diagnostic_text(output: &ProcessOutput) -> String {
    let parts: Vec<&str> = [output.stderr.trim(), output.stdout.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        match output.code {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        }
    } else {
        parts.join("\n")
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
