// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The pre-commit pipeline and its remediation loop.
//!
//! One cycle runs lint, the two style checks, the mess detector and the
//! test suite in that order. Style and mess findings may restart the
//! cycle; a restart reloads the configuration and refilters the
//! candidates, and starts again with a clean style state and an empty
//! auto-fixed set. Lint and test suite failures abort the run.

use std::path::{Path, PathBuf};

use crate::check::{CheckKind, CheckResult};
use crate::config::{self, ConfigValue, Settings, defaults};
use crate::error::{Error, Result};
use crate::filter::FileFilter;
use crate::git::Stager;
use crate::output::Reporter;
use crate::process::ProcessRunner;
use crate::prompt::Prompt;
use crate::runner::CheckRunner;
use crate::verdict::{StyleViolation, Verdict};

pub const AUTO_FIX_QUESTION: &str = "Continue auto fix with the style fixer?";
pub const RESTART_QUESTION: &str = "Restart check again?";
pub const MESS_RESTART_QUESTION: &str =
    "Resolve the mess detector findings manually, or accept them as-is. Restart check again?";

/// How a cycle ended.
enum Cycle {
    Restart,
    Done(Verdict),
}

pub struct Pipeline<'a> {
    root: PathBuf,
    candidates: Vec<PathBuf>,
    config_path: PathBuf,
    defaults: Vec<(&'static str, ConfigValue)>,
    process: &'a dyn ProcessRunner,
    prompt: &'a mut dyn Prompt,
    stager: &'a dyn Stager,
    reporter: &'a mut dyn Reporter,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        root: &Path,
        candidates: Vec<PathBuf>,
        process: &'a dyn ProcessRunner,
        prompt: &'a mut dyn Prompt,
        stager: &'a dyn Stager,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self {
            root: root.to_path_buf(),
            candidates,
            config_path: config::config_path(root),
            defaults: defaults::table(),
            process,
            prompt,
            stager,
            reporter,
        }
    }

    /// Replace the compiled-in default table.
    pub fn with_defaults(mut self, defaults: Vec<(&'static str, ConfigValue)>) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    /// Run cycles until one completes.
    ///
    /// Returns the verdict of the last cycle, or the error that aborted it.
    pub fn run(mut self) -> Result<Verdict> {
        let mut restarts = 0;
        loop {
            match self.cycle(restarts)? {
                Cycle::Restart => {
                    restarts += 1;
                    tracing::info!("restarting pipeline ({restarts})");
                }
                Cycle::Done(verdict) => {
                    self.reporter.outcome(&verdict)?;
                    return Ok(verdict);
                }
            }
        }
    }

    fn cycle(&mut self, restarts: usize) -> Result<Cycle> {
        let settings = self.load_settings(restarts == 0)?;
        let root = self.root.clone();

        let tracked = FileFilter::new(
            &root,
            &settings.excluded_path_prefixes,
            &settings.source_extensions,
        )
        .apply(&self.candidates);
        tracing::debug!(
            "tracking {} of {} candidate files",
            tracked.len(),
            self.candidates.len()
        );

        let runner = CheckRunner::new(&root, &settings, self.process);

        let lint = runner.run(CheckKind::Lint, &tracked, &mut *self.reporter)?;
        abort_if_fatal(&lint)?;

        let fixer = runner.run(CheckKind::StyleFixer, &tracked, &mut *self.reporter)?;
        let checker = runner.run(CheckKind::StyleChecker, &tracked, &mut *self.reporter)?;
        let style = StyleViolation {
            by_fixer: !fixer.passed,
            by_checker: !checker.passed,
        };
        if style.by_fixer {
            self.reporter
                .error("There are coding standards violations found by the style fixer")?;
        }
        if style.by_checker {
            self.reporter
                .error("There are coding standards violations found by the style checker")?;
        }

        let mut auto_fixed = Vec::new();
        if style.is_violated() {
            if settings.run_style_fixer && self.prompt.confirm(AUTO_FIX_QUESTION) {
                let outcome = runner.apply_fixes(&tracked, &mut *self.reporter)?;
                if !outcome.failures.is_empty() {
                    self.reporter.warning(&format!(
                        "the style fixer could not fix {} file(s)",
                        outcome.failures.len()
                    ))?;
                }
                auto_fixed = outcome.fixed;
                self.restage(&settings, &auto_fixed)?;
            }
            if self.offer_restart(&settings, restarts, RESTART_QUESTION)? {
                return Ok(Cycle::Restart);
            }
        }

        let mess = runner.run(CheckKind::MessDetector, &tracked, &mut *self.reporter)?;
        if !mess.passed {
            self.reporter
                .error("There are mess detector violations in the staged files")?;
            if self.offer_restart(&settings, restarts, MESS_RESTART_QUESTION)? {
                self.restage(&settings, &auto_fixed)?;
                return Ok(Cycle::Restart);
            }
        }

        let suite = runner.run(CheckKind::TestSuite, &tracked, &mut *self.reporter)?;
        abort_if_fatal(&suite)?;

        Ok(Cycle::Done(Verdict::new(
            style,
            !mess.passed,
            restarts,
            tracked,
            auto_fixed,
            vec![lint, fixer, checker, mess, suite],
        )))
    }

    /// Load, resolve and type the configuration.
    ///
    /// Runs before any external process so a bad key aborts the cycle
    /// up front. Notes about defaults and unknown keys go out once.
    fn load_settings(&mut self, announce: bool) -> Result<Settings> {
        let loaded = config::load(&self.config_path)?;
        let file_exists = loaded.is_some();
        let config = config::resolve(loaded, &self.defaults, self.config_path.clone());
        let settings = Settings::from_config(&config)?;

        self.reporter
            .banner(&format!("stagegate {}", env!("CARGO_PKG_VERSION")))?;
        if !announce {
            return Ok(settings);
        }

        if file_exists {
            let path = config.path().display().to_string();
            for (key, value) in config.defaulted() {
                self.reporter.note(&format!(
                    "`{key}` not defined at {path}, using default: {key}={value}"
                ))?;
            }
        } else {
            self.reporter.note(&format!(
                "No configuration at {}, using defaults",
                config.path().display()
            ))?;
        }
        for warning in config.unknown_key_warnings() {
            self.reporter.warning(&warning)?;
        }

        Ok(settings)
    }

    /// Ask to restart unless the restart limit is reached.
    fn offer_restart(&mut self, settings: &Settings, restarts: usize, question: &str) -> Result<bool> {
        if restarts >= settings.max_restarts {
            self.reporter.warning(&format!(
                "restart limit of {} reached, continuing",
                settings.max_restarts
            ))?;
            return Ok(false);
        }
        Ok(self.prompt.confirm(question))
    }

    /// Best-effort re-stage of fixed files; failures only warn.
    fn restage(&mut self, settings: &Settings, files: &[PathBuf]) -> Result<()> {
        if !settings.auto_restage_fixes || files.is_empty() {
            return Ok(());
        }
        match self.stager.stage(files) {
            Ok(()) => self
                .reporter
                .note(&format!("Re-staged {} fixed file(s)", files.len()))?,
            Err(e) => {
                tracing::warn!("re-staging failed: {e:#}");
                self.reporter
                    .warning(&format!("could not re-stage fixed files: {e:#}"))?;
            }
        }
        Ok(())
    }
}

/// A failed check that cannot be remediated ends the run.
fn abort_if_fatal(result: &CheckResult) -> Result<()> {
    if result.passed || !result.kind.is_fatal() {
        return Ok(());
    }
    let message = match result.kind {
        CheckKind::Lint => format!("syntax errors in {} file(s)", result.failures.len()),
        CheckKind::TestSuite => "the test suite did not pass".to_string(),
        _ => format!("{} failing invocation(s)", result.failures.len()),
    };
    Err(Error::Fatal {
        check: result.kind.to_string(),
        message,
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
