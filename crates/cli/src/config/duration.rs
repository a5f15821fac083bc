// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Duration string parsing for the test suite time limit.
//!
//! Supports formats:
//! - `"500ms"` → 500 milliseconds
//! - `"30s"` → 30 seconds (fractional allowed, e.g. `"1.5s"`)
//! - `"10m"` → 10 minutes
//! - `"1h"` → 1 hour

use std::time::Duration;

/// Parse a duration string into a Duration.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    // Milliseconds first (longer suffix shares the `s`)
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        return Ok(Duration::from_millis(n));
    }

    if let Some(secs) = s.strip_suffix('s') {
        let n: f64 = secs
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        if !n.is_finite() || n < 0.0 {
            return Err(format!("negative duration: {s}"));
        }
        return Duration::try_from_secs_f64(n)
            .map_err(|_| format!("duration out of range: {s}"));
    }

    if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        return scaled(n, 60, s);
    }

    if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        return scaled(n, 3600, s);
    }

    Err(format!(
        "invalid duration format: {s} (use 500ms, 30s, 10m, or 1h)"
    ))
}

fn scaled(n: u64, unit_secs: u64, s: &str) -> Result<Duration, String> {
    n.checked_mul(unit_secs)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("duration out of range: {s}"))
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
