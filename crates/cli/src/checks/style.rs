// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Style fixer and style checker invocations.
//!
//! The fixer runs twice in a cycle: once as a dry-run check, and, if the
//! user accepts, once more in write mode over the same files.

use std::path::Path;

use crate::config::Settings;
use crate::process::Invocation;

fn rules_arg(settings: &Settings) -> String {
    format!("--rules=@{}", settings.style_fixer_standard)
}

/// `<fixer> --dry-run --diff --verbose fix <file> --rules=@<standard>`
pub fn fixer_dry_run(settings: &Settings, file: &Path) -> Invocation {
    Invocation::from_command(&settings.style_fixer_command)
        .arg("--dry-run")
        .arg("--diff")
        .arg("--verbose")
        .arg("fix")
        .path_arg(file)
        .arg(rules_arg(settings))
}

/// `<fixer> fix <file> --rules=@<standard>`
pub fn fixer_apply(settings: &Settings, file: &Path) -> Invocation {
    Invocation::from_command(&settings.style_fixer_command)
        .arg("fix")
        .path_arg(file)
        .arg(rules_arg(settings))
}

/// `<checker> -n --standard=<standard> <file>`
pub fn checker(settings: &Settings, file: &Path) -> Invocation {
    Invocation::from_command(&settings.style_checker_command)
        .arg("-n")
        .arg(format!("--standard={}", settings.style_checker_standard))
        .path_arg(file)
}
