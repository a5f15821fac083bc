// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Every key the pipeline looks up has an entry here; a key missing from
//! both this table and the config file is a configuration error.

use super::ConfigValue;

/// Configuration key names.
pub mod keys {
    pub const RUN_LINT: &str = "run_lint";
    pub const RUN_STYLE_FIXER: &str = "run_style_fixer";
    pub const STYLE_FIXER_STANDARD: &str = "style_fixer_standard";
    pub const RUN_STYLE_CHECKER: &str = "run_style_checker";
    pub const STYLE_CHECKER_STANDARD: &str = "style_checker_standard";
    pub const RUN_MESS_DETECTOR: &str = "run_mess_detector";
    pub const RUN_TEST_SUITE: &str = "run_test_suite";
    pub const AUTO_RESTAGE_FIXES: &str = "auto_restage_fixes";
    pub const EXCLUDED_PATH_PREFIXES: &str = "excluded_path_prefixes";

    pub const SOURCE_EXTENSIONS: &str = "source_extensions";
    pub const LINT_COMMAND: &str = "lint_command";
    pub const STYLE_FIXER_COMMAND: &str = "style_fixer_command";
    pub const STYLE_CHECKER_COMMAND: &str = "style_checker_command";
    pub const MESS_DETECTOR_COMMAND: &str = "mess_detector_command";
    pub const MESS_DETECTOR_RULE_FILE: &str = "mess_detector_rule_file";
    pub const MESS_DETECTOR_RULESET: &str = "mess_detector_ruleset";
    pub const TEST_SUITE_COMMAND: &str = "test_suite_command";
    pub const TEST_SUITE_TIMEOUT: &str = "test_suite_timeout";
    pub const MAX_RESTARTS: &str = "max_restarts";
}

/// Compiled-in default table, in the order `stagegate init` writes it.
pub fn table() -> Vec<(&'static str, ConfigValue)> {
    use keys::*;

    vec![
        (RUN_LINT, true.into()),
        (RUN_STYLE_FIXER, true.into()),
        (STYLE_FIXER_STANDARD, "Symfony".into()),
        (RUN_STYLE_CHECKER, true.into()),
        (STYLE_CHECKER_STANDARD, "PSR2".into()),
        (RUN_MESS_DETECTOR, true.into()),
        (RUN_TEST_SUITE, false.into()),
        (AUTO_RESTAGE_FIXES, true.into()),
        (EXCLUDED_PATH_PREFIXES, (&["/app", "/bin"][..]).into()),
        (SOURCE_EXTENSIONS, (&["php"][..]).into()),
        (LINT_COMMAND, "php".into()),
        (STYLE_FIXER_COMMAND, "php ./vendor/bin/php-cs-fixer".into()),
        (STYLE_CHECKER_COMMAND, "php ./vendor/bin/phpcs".into()),
        (MESS_DETECTOR_COMMAND, "php ./vendor/bin/phpmd".into()),
        (MESS_DETECTOR_RULE_FILE, "phpmd.xml".into()),
        (MESS_DETECTOR_RULESET, "codesize,unusedcode,naming".into()),
        (TEST_SUITE_COMMAND, "vendor/bin/phpspec run".into()),
        (TEST_SUITE_TIMEOUT, "1h".into()),
        (MAX_RESTARTS, 5i64.into()),
    ]
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;
