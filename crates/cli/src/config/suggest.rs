// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key name suggestions for config validation.

use super::defaults::keys;

/// Suggest a known key for an unknown one found in the config file.
pub fn suggest_key<'a>(unknown: &str, known: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    if unknown.is_empty() {
        return None;
    }

    // Key names used by the PHP quality tool this replaces
    let legacy = match unknown {
        "lint" => Some(keys::RUN_LINT),
        "phpcs" => Some(keys::RUN_STYLE_CHECKER),
        "phpcs_standard" => Some(keys::STYLE_CHECKER_STANDARD),
        "phpfixer" | "run_style_fixer_check" => Some(keys::RUN_STYLE_FIXER),
        "phpfixer_standard" => Some(keys::STYLE_FIXER_STANDARD),
        "phpmd" => Some(keys::RUN_MESS_DETECTOR),
        "phpspec" | "units" => Some(keys::RUN_TEST_SUITE),
        "self_fix" => Some(keys::AUTO_RESTAGE_FIXES),
        "exclude_dirs" => Some(keys::EXCLUDED_PATH_PREFIXES),
        _ => None,
    };

    let known: Vec<&'a str> = known.into_iter().collect();

    if let Some(legacy) = legacy
        && let Some(found) = known.iter().find(|k| **k == legacy)
    {
        return Some(*found);
    }

    // Prefix matching (require at least 3 chars to avoid false positives)
    if unknown.len() >= 3 {
        for name in &known {
            if name.starts_with(unknown) || unknown.starts_with(name) {
                return Some(*name);
            }
        }
    }

    // `run_` prefix forgotten
    known
        .iter()
        .find(|name| name.strip_prefix("run_") == Some(unknown))
        .copied()
}

/// Warning text for an unknown key in the config file.
pub fn unknown_key_warning<'a>(key: &str, known: impl IntoIterator<Item = &'a str>) -> String {
    match suggest_key(key, known) {
        Some(suggested) => format!("unknown configuration key `{key}`. Did you mean `{suggested}`?"),
        None => format!("unknown configuration key `{key}` is ignored"),
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
