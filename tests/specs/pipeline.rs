// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `stagegate check`.

use crate::prelude::*;

#[test]
fn empty_file_list_is_accepted() {
    Project::passing("")
        .check(&[])
        .assert()
        .code(0)
        .stdout(predicates::str::contains("ACCEPTED"));
}

#[test]
fn clean_files_are_accepted() {
    Project::passing("")
        .check(&["src/A.php", "src/B.php"])
        .assert()
        .code(0)
        .stdout(
            predicates::str::contains("Running syntax lint")
                .and(predicates::str::contains("Checking code style with the style checker"))
                .and(predicates::str::contains("Checking code mess with the mess detector"))
                .and(predicates::str::contains("ACCEPTED")),
        );
}

#[test]
fn lint_failure_is_fatal() {
    Project::passing("lint_command: \"false\"\n")
        .check(&["a.php"])
        .assert()
        .code(3)
        .stdout(
            predicates::str::contains("FAIL a.php")
                .and(predicates::str::contains("Checking code style").not()),
        )
        .stderr(predicates::str::contains("stagegate: lint failed"));
}

#[test]
fn style_violation_is_rejected_and_mess_still_runs() {
    Project::passing("style_checker_command: \"false\"\n")
        .check(&["b.php"])
        .assert()
        .code(1)
        .stdout(
            predicates::str::contains("violations found by the style checker")
                .and(predicates::str::contains("Checking code mess with the mess detector"))
                .and(predicates::str::contains("REJECTED")),
        );
}

#[test]
fn mess_findings_are_accepted_as_is() {
    Project::passing("mess_detector_command: \"false\"\n")
        .check(&["a.php"])
        .assert()
        .code(0)
        .stdout(predicates::str::contains("mess detector findings accepted as-is"));
}

#[test]
fn test_suite_failure_is_fatal() {
    Project::passing("run_test_suite: true\ntest_suite_command: \"false\"\n")
        .check(&["a.php"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("test_suite failed"));
}

#[test]
fn test_suite_timeout_is_fatal() {
    Project::passing("run_test_suite: true\ntest_suite_command: sleep 5\ntest_suite_timeout: 200ms\n")
        .check(&[])
        .assert()
        .code(3)
        .stdout(predicates::str::contains("TIMEOUT"));
}

#[test]
fn missing_tool_is_reported_as_launch_failure() {
    Project::passing("style_checker_command: stagegate-no-such-tool\n")
        .check(&["a.php"])
        .assert()
        .code(1)
        .stdout(
            predicates::str::contains("ERROR a.php")
                .and(predicates::str::contains("could not launch `stagegate-no-such-tool`")),
        );
}

#[test]
fn excluded_and_foreign_files_are_skipped() {
    Project::passing("lint_command: \"false\"\n")
        .check(&["app/Kernel.php", "bin/console.php", "README.md"])
        .assert()
        .code(0);
}

#[test]
fn disabled_checks_do_not_run() {
    Project::passing(
        "run_style_fixer: false\nrun_style_checker: false\nstyle_checker_command: \"false\"\n",
    )
    .check(&["a.php"])
    .assert()
    .code(0)
    .stdout(predicates::str::contains("Checking code style").not());
}

#[test]
fn malformed_config_is_config_error() {
    Project::empty()
        .config("run_lint: [unclosed\n")
        .check(&["a.php"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains(".stagegate/config.yml"))
        .stdout(predicates::str::contains("Running syntax lint").not());
}

#[test]
fn mistyped_value_is_config_error() {
    // Unquoted `true` is a boolean, not a command
    Project::empty()
        .config("lint_command: true\n")
        .check(&["a.php"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("`lint_command` must be a string"));
}

#[test]
fn unknown_key_warns_with_suggestion() {
    Project::passing("phpcs_standard: PSR12\n")
        .check(&[])
        .assert()
        .code(0)
        .stdout(
            predicates::str::contains("unknown configuration key `phpcs_standard`")
                .and(predicates::str::contains("style_checker_standard")),
        );
}

#[test]
fn defaulted_keys_are_noted() {
    Project::passing("")
        .check(&[])
        .assert()
        .stdout(predicates::str::contains(
            "`style_checker_standard` not defined at",
        ));
}

#[test]
fn json_output_carries_verdict() {
    let output = Project::passing("style_checker_command: \"false\"\n")
        .check(&["a.php"])
        .args(["-o", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("output should be valid JSON");
    assert_eq!(json["accepted"], false);
    assert_eq!(json["style"]["by_checker"], true);
    assert!(json["timestamp"].is_string());
    assert_eq!(json["tracked"][0], "a.php");

    // Progress goes to stderr in JSON mode
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("REJECTED"));
}

#[test]
fn staged_files_are_checked() {
    let project = Project::passing("lint_command: \"false\"\n").file("src/A.php", "<?php\n");
    project.git_init();
    project.git(&["add", "src/A.php"]);

    project
        .check(&["--staged"])
        .assert()
        .code(3)
        .stdout(predicates::str::contains("FAIL src/A.php"));
}

#[test]
fn staged_outside_repository_is_argument_error() {
    let project = Project::passing("");
    // Skip when the temp dir happens to sit inside a repository
    if std::process::Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .current_dir(project.path())
        .output()
        .is_ok_and(|out| out.status.success())
    {
        return;
    }

    project
        .check(&["--staged"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("requires a git repository"));
}
