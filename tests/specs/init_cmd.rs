// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `stagegate init`.

use crate::prelude::*;

fn init_cmd(project: &Project) -> std::process::Command {
    let mut cmd = stagegate_cmd();
    cmd.args(["init", "--root"]).arg(project.path());
    cmd
}

#[test]
fn init_creates_default_config() {
    let project = Project::empty();
    init_cmd(&project)
        .assert()
        .success()
        .stdout(predicates::str::contains("Created"));

    let written = std::fs::read_to_string(project.join(".stagegate/config.yml")).unwrap();
    assert!(written.contains("run_lint: true"));
    assert!(written.contains("max_restarts: 5"));
}

#[test]
fn init_refuses_to_overwrite() {
    let project = Project::empty().config("run_lint: false\n");
    init_cmd(&project)
        .assert()
        .code(2)
        .stderr(predicates::str::contains("--force"));

    let kept = std::fs::read_to_string(project.join(".stagegate/config.yml")).unwrap();
    assert_eq!(kept, "run_lint: false\n");
}

#[test]
fn init_force_overwrites() {
    let project = Project::empty().config("run_lint: false\n");
    init_cmd(&project).arg("--force").assert().success();

    let written = std::fs::read_to_string(project.join(".stagegate/config.yml")).unwrap();
    assert!(written.contains("run_lint: true"));
}

#[test]
fn initialized_project_passes_config() {
    let project = Project::empty();
    init_cmd(&project).assert().success();

    stagegate_cmd()
        .args(["config", "--root"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("# default").not());
}
