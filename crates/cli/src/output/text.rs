// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text reporter.
//!
//! ```text
//! Checking code style with the style checker
//!   FAIL src/Kernel.php
//!     <tool output>
//! REJECTED: code style violations remain
//! ```

use std::io::{self, Write};
use std::path::Path;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::Reporter;
use crate::check::{CheckKind, Failure, FailureKind};
use crate::color::scheme;
use crate::verdict::Verdict;

/// Text reporter with color support.
pub struct TextReporter<W> {
    out: W,
}

impl TextReporter<StandardStream> {
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }

    pub fn stderr(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stderr(color_choice))
    }
}

impl<W: WriteColor> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn styled(&mut self, spec: &ColorSpec, text: &str) -> io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{text}")?;
        self.out.reset()
    }

    fn labeled(&mut self, spec: &ColorSpec, label: &str, message: &str) -> io::Result<()> {
        self.styled(spec, label)?;
        writeln!(self.out, " {message}")
    }
}

impl<W: WriteColor> Reporter for TextReporter<W> {
    fn banner(&mut self, title: &str) -> io::Result<()> {
        self.styled(&scheme::check_name(), title)?;
        writeln!(self.out)
    }

    fn check_started(&mut self, kind: CheckKind) -> io::Result<()> {
        self.styled(&scheme::check_name(), kind.title())?;
        writeln!(self.out)
    }

    fn failure(&mut self, failure: &Failure) -> io::Result<()> {
        let (spec, label) = match failure.kind {
            FailureKind::Violation => (scheme::fail(), "FAIL"),
            FailureKind::LaunchFailed => (scheme::fail(), "ERROR"),
            FailureKind::TimedOut => (scheme::warn(), "TIMEOUT"),
        };

        write!(self.out, "  ")?;
        self.styled(&spec, label)?;
        if let Some(file) = &failure.file {
            write!(self.out, " ")?;
            self.styled(&scheme::path(), &file.display().to_string())?;
        }
        writeln!(self.out)?;

        self.out.set_color(&scheme::detail())?;
        for line in failure.output.lines() {
            writeln!(self.out, "    {line}")?;
        }
        self.out.reset()
    }

    fn fixed(&mut self, file: &Path) -> io::Result<()> {
        write!(self.out, "  ")?;
        self.styled(&scheme::fixed(), "FIXED")?;
        write!(self.out, " ")?;
        self.styled(&scheme::path(), &file.display().to_string())?;
        writeln!(self.out)
    }

    fn note(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")
    }

    fn warning(&mut self, message: &str) -> io::Result<()> {
        self.labeled(&scheme::warn(), "warning:", message)
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        self.labeled(&scheme::fail(), "error:", message)
    }

    fn outcome(&mut self, verdict: &Verdict) -> io::Result<()> {
        if verdict.accepted {
            self.styled(&scheme::pass(), "ACCEPTED")?;
            if verdict.mess_violated {
                write!(self.out, ": mess detector findings accepted as-is")?;
            }
        } else {
            self.styled(&scheme::fail(), "REJECTED")?;
            write!(self.out, ": code style violations remain")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
