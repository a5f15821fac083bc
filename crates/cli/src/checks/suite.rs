// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test suite: the configured command, once, under a time limit.

use crate::config::Settings;
use crate::process::Invocation;

pub fn invocation(settings: &Settings) -> Invocation {
    Invocation::from_command(&settings.test_suite_command).timeout(settings.test_suite_timeout)
}
