// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `stagegate config`.

use crate::prelude::*;

fn config_cmd(project: &Project) -> std::process::Command {
    let mut cmd = stagegate_cmd();
    cmd.args(["config", "--root"]).arg(project.path());
    cmd
}

#[test]
fn shows_defaults_without_config_file() {
    config_cmd(&Project::empty())
        .assert()
        .success()
        .stdout(
            predicates::str::contains("run_lint: true  # default")
                .and(predicates::str::contains("excluded_path_prefixes: /app,/bin  # default")),
        );
}

#[test]
fn shows_file_values_with_provenance() {
    let project = Project::empty().config("style_checker_standard: PSR12\n");
    config_cmd(&project)
        .assert()
        .success()
        .stdout(predicates::str::contains("style_checker_standard: PSR12  # file"));
}

#[test]
fn json_lists_value_and_source() {
    let project = Project::empty().config("run_test_suite: true\n");
    let output = config_cmd(&project).args(["-o", "json"]).output().unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["run_test_suite"]["value"], true);
    assert_eq!(json["run_test_suite"]["source"], "file");
    assert_eq!(json["run_lint"]["source"], "default");
}

#[test]
fn invalid_value_is_config_error() {
    let project = Project::empty().config("max_restarts: -3\n");
    config_cmd(&project)
        .assert()
        .code(2)
        .stderr(predicates::str::contains("max_restarts"));
}
