// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Projects stand in `true` and `false` for the real tools, so a spec
//! controls each check's outcome through the config file alone.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the stagegate binary
pub fn stagegate_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stagegate"));
    cmd.env_remove("STAGEGATE_CONFIG")
        .env_remove("STAGEGATE_LOG")
        .env_remove("STAGEGATE_NO_INTERACTION")
        .env("NO_COLOR", "1");
    cmd
}

/// Every tool passes.
pub const ALL_PASS: &str = "\
lint_command: \"true\"
style_fixer_command: \"true\"
style_checker_command: \"true\"
mess_detector_command: \"true\"
test_suite_command: \"true\"
";

/// A temp project with `.stagegate/config.yml` and source files.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Empty project, no config file.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Project whose tools all pass, plus `overrides` appended to the config.
    pub fn passing(overrides: &str) -> Self {
        Self::empty().config(&format!("{ALL_PASS}{overrides}"))
    }

    pub fn config(self, yaml: &str) -> Self {
        self.file(".stagegate/config.yml", yaml)
    }

    pub fn file(self, path: &str, content: &str) -> Self {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, path: &str) -> PathBuf {
        self.dir.path().join(path)
    }

    /// `stagegate check --no-interaction --root <project> <files...>`
    pub fn check(&self, files: &[&str]) -> Command {
        let mut cmd = stagegate_cmd();
        cmd.args(["check", "--no-interaction", "--root"])
            .arg(self.path())
            .args(files)
            .current_dir(self.path());
        cmd
    }

    /// Run a git command in the project, panicking on failure.
    pub fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("git should run")
            .status;
        assert!(status.success(), "git {args:?} failed");
    }

    /// Initialize a repository with a committer identity.
    pub fn git_init(&self) {
        self.git(&["init", "-q"]);
        self.git(&["config", "user.email", "test@example.com"]);
        self.git(&["config", "user.name", "Test User"]);
    }
}
