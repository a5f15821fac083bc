// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Progress and result output.

pub mod json;
pub mod text;

use std::io;
use std::path::Path;

use crate::check::{CheckKind, Failure};
use crate::verdict::Verdict;

pub use text::TextReporter;

/// Sink for user-facing progress lines.
pub trait Reporter {
    /// Tool name and version, printed at the start of every cycle.
    fn banner(&mut self, title: &str) -> io::Result<()>;

    /// A check is about to run.
    fn check_started(&mut self, kind: CheckKind) -> io::Result<()>;

    /// An invocation failed; shows the file and captured text.
    fn failure(&mut self, failure: &Failure) -> io::Result<()>;

    /// The fixer rewrote a file.
    fn fixed(&mut self, file: &Path) -> io::Result<()>;

    fn note(&mut self, message: &str) -> io::Result<()>;

    fn warning(&mut self, message: &str) -> io::Result<()>;

    fn error(&mut self, message: &str) -> io::Result<()>;

    /// Final accept/reject line.
    fn outcome(&mut self, verdict: &Verdict) -> io::Result<()>;
}
