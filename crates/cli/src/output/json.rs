// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON verdict output.
//!
//! Written once, after the pipeline finishes; progress lines go to stderr
//! in this mode so stdout stays machine-readable.

use std::io::Write;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::verdict::Verdict;

#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// ISO 8601 timestamp.
    pub timestamp: String,
    #[serde(flatten)]
    pub verdict: &'a Verdict,
}

impl<'a> JsonOutput<'a> {
    pub fn new(verdict: &'a Verdict) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            verdict,
        }
    }
}

/// Write the verdict as pretty-printed JSON followed by a newline.
pub fn write_verdict<W: Write>(mut out: W, verdict: &Verdict) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut out, &JsonOutput::new(verdict))?;
    writeln!(out)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
