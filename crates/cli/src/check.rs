// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check kinds and result types.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// The checks the pipeline knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Syntax lint, one invocation per file.
    Lint,
    /// Style fixer in dry-run mode, one invocation per file.
    StyleFixer,
    /// Style checker, one invocation per file.
    StyleChecker,
    /// Mess detector, one invocation per file.
    MessDetector,
    /// Project test suite, a single invocation.
    TestSuite,
}

impl CheckKind {
    /// Unique identifier (e.g., "lint", "style_checker").
    pub fn name(self) -> &'static str {
        match self {
            CheckKind::Lint => "lint",
            CheckKind::StyleFixer => "style_fixer",
            CheckKind::StyleChecker => "style_checker",
            CheckKind::MessDetector => "mess_detector",
            CheckKind::TestSuite => "test_suite",
        }
    }

    /// Progress line printed before the check runs.
    pub fn title(self) -> &'static str {
        match self {
            CheckKind::Lint => "Running syntax lint",
            CheckKind::StyleFixer => "Checking code style with the style fixer",
            CheckKind::StyleChecker => "Checking code style with the style checker",
            CheckKind::MessDetector => "Checking code mess with the mess detector",
            CheckKind::TestSuite => "Running the test suite",
        }
    }

    /// A failure aborts the pipeline instead of entering remediation.
    pub fn is_fatal(self) -> bool {
        matches!(self, CheckKind::Lint | CheckKind::TestSuite)
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a single invocation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The tool ran and exited non-zero.
    Violation,
    /// The tool could not be started.
    LaunchFailed,
    /// The tool exceeded its time limit.
    TimedOut,
}

/// A failed invocation within a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// File the invocation was for (None for whole-project checks).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    pub kind: FailureKind,

    /// Captured diagnostic text, trimmed.
    pub output: String,
}

impl Failure {
    pub fn new(file: Option<PathBuf>, kind: FailureKind, output: impl Into<String>) -> Self {
        Self {
            file,
            kind,
            output: output.into().trim().to_string(),
        }
    }
}

/// Result of running a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub kind: CheckKind,

    /// Whether this check passed. Skipped checks pass vacuously.
    pub passed: bool,

    /// True if the check is disabled in configuration.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,

    /// Number of tool invocations made.
    pub invocations: usize,

    /// Failed invocations (omitted if empty).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<Failure>,
}

impl CheckResult {
    /// Result for a check disabled in configuration.
    pub fn skipped(kind: CheckKind) -> Self {
        Self {
            kind,
            passed: true,
            skipped: true,
            invocations: 0,
            failures: Vec::new(),
        }
    }

    /// Aggregate invocations: passed iff none failed.
    pub fn from_failures(kind: CheckKind, invocations: usize, failures: Vec<Failure>) -> Self {
        Self {
            kind,
            passed: failures.is_empty(),
            skipped: false,
            invocations,
            failures,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
