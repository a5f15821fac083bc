// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax lint: `<lint> -l <file>`.

use std::path::Path;

use crate::config::Settings;
use crate::process::Invocation;

pub fn invocation(settings: &Settings, file: &Path) -> Invocation {
    Invocation::from_command(&settings.lint_command)
        .arg("-l")
        .path_arg(file)
}
