// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mess detector: `<detector> <file> text <rules>`.

use std::path::Path;

use crate::config::Settings;
use crate::process::Invocation;

/// Rule source for one mess detector run.
///
/// A project rule file wins over the built-in rule set. Callers resolve
/// this at the start of every run; the file may appear between restarts.
pub fn rule_source(settings: &Settings, root: &Path) -> String {
    let rule_file = root.join(&settings.mess_detector_rule_file);
    if rule_file.is_file() {
        tracing::debug!("using mess detector rules from {}", rule_file.display());
        rule_file.to_string_lossy().into_owned()
    } else {
        settings.mess_detector_ruleset.clone()
    }
}

pub fn invocation(settings: &Settings, file: &Path, rules: &str) -> Invocation {
    Invocation::from_command(&settings.mess_detector_command)
        .path_arg(file)
        .arg("text")
        .arg(rules)
}
