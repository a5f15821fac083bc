// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command templates for each check.
//!
//! Each module turns the effective settings into the external invocation
//! for one check; running and aggregating is the runner's job.

pub mod lint;
pub mod mess;
pub mod style;
pub mod suite;

use crate::check::CheckKind;
use crate::config::Settings;

/// Whether a check is enabled in configuration.
pub fn enabled(kind: CheckKind, settings: &Settings) -> bool {
    match kind {
        CheckKind::Lint => settings.run_lint,
        CheckKind::StyleFixer => settings.run_style_fixer,
        CheckKind::StyleChecker => settings.run_style_checker,
        CheckKind::MessDetector => settings.run_mess_detector,
        CheckKind::TestSuite => settings.run_test_suite,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
