// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides temp projects and scripted stand-ins for the pipeline's
//! capabilities (processes, prompts, staging).

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::{self, Settings, defaults};
use crate::git::Stager;
use crate::process::{Invocation, ProcessError, ProcessOutput, ProcessRunner};
use crate::prompt::Prompt;

/// Creates an empty temp directory (no config file, defaults apply).
pub fn temp_project() -> TempDir {
    TempDir::new().unwrap()
}

/// Creates a temp directory with custom `.stagegate/config.yml` content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    create_tree(dir.path(), &[(config::CONFIG_PATH, config)]);
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = temp_project();
/// create_tree(tmp.path(), &[
///     ("src/Kernel.php", "<?php\n"),
///     ("phpmd.xml", "<ruleset/>"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Settings resolved from the compiled-in defaults only.
pub fn default_settings() -> Settings {
    let config = config::resolve(None, &defaults::table(), PathBuf::from(config::CONFIG_PATH));
    Settings::from_config(&config).unwrap()
}

// =============================================================================
// PROCESSES
// =============================================================================

type Handler = dyn Fn(&Invocation, &[Invocation]) -> Result<ProcessOutput, ProcessError>;

/// Scripted process runner.
///
/// The handler sees the invocation and every invocation made before it,
/// so a script can change behavior after, say, the fixer has run.
pub struct FakeProcess {
    handler: Box<Handler>,
    calls: RefCell<Vec<Invocation>>,
}

impl FakeProcess {
    pub fn new(
        handler: impl Fn(&Invocation, &[Invocation]) -> Result<ProcessOutput, ProcessError> + 'static,
    ) -> Self {
        Self {
            handler: Box::new(handler),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every tool exits 0.
    pub fn passing() -> Self {
        Self::new(|_, _| Ok(ok()))
    }

    /// Tools whose command line contains `needle` exit 1; the rest pass.
    pub fn failing_on(needle: &'static str) -> Self {
        Self::new(move |inv, _| {
            if runs(inv, needle) {
                Ok(fail(&format!("{needle} found problems")))
            } else {
                Ok(ok())
            }
        })
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Number of invocations whose command line contains `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.calls.borrow().iter().filter(|inv| runs(inv, needle)).count()
    }
}

impl ProcessRunner for FakeProcess {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, ProcessError> {
        let history = self.calls.borrow().clone();
        let result = (self.handler)(invocation, &history);
        self.calls.borrow_mut().push(invocation.clone());
        result
    }
}

/// Whether the invocation's command line contains `needle`.
///
/// With default settings the tools are told apart by "-l" (lint),
/// "--dry-run" (fixer check), "php-cs-fixer fix" (fixer apply), "phpcs",
/// "phpmd" and "phpspec".
pub fn runs(invocation: &Invocation, needle: &str) -> bool {
    invocation.display().contains(needle)
}

pub fn ok() -> ProcessOutput {
    ProcessOutput {
        code: Some(0),
        stdout: String::new(),
        stderr: String::new(),
    }
}

pub fn fail(stdout: &str) -> ProcessOutput {
    ProcessOutput {
        code: Some(1),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

pub fn launch_error(invocation: &Invocation) -> ProcessError {
    ProcessError::Launch {
        program: invocation.program.clone(),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    }
}

// =============================================================================
// PROMPTS AND STAGING
// =============================================================================

/// Answers questions from a script, then "no" once the script runs out.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    pub questions: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            questions: Vec::new(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        self.questions.push(question.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}

/// Records every stage call; optionally fails them all.
#[derive(Debug, Default)]
pub struct RecordingStager {
    pub calls: RefCell<Vec<Vec<PathBuf>>>,
    pub fail: bool,
}

impl RecordingStager {
    pub fn failing() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail: true,
        }
    }
}

impl Stager for RecordingStager {
    fn stage(&self, files: &[PathBuf]) -> anyhow::Result<()> {
        self.calls.borrow_mut().push(files.to_vec());
        if self.fail {
            anyhow::bail!("index is locked");
        }
        Ok(())
    }
}
