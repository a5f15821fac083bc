// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Yes/no questions asked during remediation.
//!
//! Every question defaults to "no": an unattended run never fixes or
//! restarts, so the pipeline always terminates.

use std::io::{self, BufRead, IsTerminal, Write};

/// Capability to ask the user a yes/no question.
pub trait Prompt {
    fn confirm(&mut self, question: &str) -> bool;
}

/// Answers "no" to everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInteraction;

impl Prompt for NoInteraction {
    fn confirm(&mut self, question: &str) -> bool {
        tracing::debug!("non-interactive, answering no: {question}");
        false
    }
}

/// Asks on stderr and reads the answer from stdin.
///
/// Falls back to "no" when stdin is not a terminal (for example when run
/// from a git hook without a TTY) or when reading fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return NoInteraction.confirm(question);
        }

        let mut stderr = io::stderr();
        if write!(stderr, "{question} [y/N] ").and_then(|_| stderr.flush()).is_err() {
            return false;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(_) => parse_answer(&line),
            Err(e) => {
                tracing::warn!("failed to read answer: {e}");
                false
            }
        }
    }
}

/// `y`/`yes` in any case is yes; anything else, including empty, is no.
pub fn parse_answer(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
