// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Final accept/reject decision.

use std::path::PathBuf;

use serde::Serialize;

use crate::check::CheckResult;

/// Style findings from the current cycle.
///
/// The fixer and the checker report independently; either one means the
/// style is violated. Reset at the start of every cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StyleViolation {
    pub by_fixer: bool,
    pub by_checker: bool,
}

impl StyleViolation {
    pub fn is_violated(&self) -> bool {
        self.by_fixer || self.by_checker
    }
}

/// Outcome of a pipeline run that was not aborted.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    /// True iff no style violation remains once remediation is done.
    pub accepted: bool,
    pub style: StyleViolation,
    /// The mess detector reported findings that were accepted as-is.
    pub mess_violated: bool,
    /// Number of times the pipeline restarted.
    pub restarts: usize,
    /// Files checked in the final cycle.
    pub tracked: Vec<PathBuf>,
    /// Files the fixer rewrote in the final cycle.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub auto_fixed: Vec<PathBuf>,
    /// Results of the final cycle, in run order.
    pub checks: Vec<CheckResult>,
}

impl Verdict {
    pub fn new(
        style: StyleViolation,
        mess_violated: bool,
        restarts: usize,
        tracked: Vec<PathBuf>,
        auto_fixed: Vec<PathBuf>,
        checks: Vec<CheckResult>,
    ) -> Self {
        Self {
            accepted: !style.is_violated(),
            style,
            mess_violated,
            restarts,
            tracked,
            auto_fixed,
            checks,
        }
    }

    pub fn is_violated(&self) -> bool {
        self.style.is_violated()
    }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
