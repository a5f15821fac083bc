// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Seeding the default configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{self, ConfigValue, defaults};
use crate::error::{Error, Result};

const HEADER: &str = "\
# stagegate configuration
#
# Keys left out fall back to the built-in defaults; `stagegate config`
# shows the effective values and where each one came from.
";

/// What `write_default_config` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Created(PathBuf),
    Overwritten(PathBuf),
    AlreadyExists(PathBuf),
}

/// Render the default table as a YAML document.
///
/// Values are written in JSON flow syntax, which YAML reads unchanged.
pub fn default_config(table: &[(&str, ConfigValue)]) -> String {
    let mut out = HEADER.to_string();
    out.push('\n');
    for (key, value) in table {
        let rendered = serde_json::to_string(value).unwrap_or_else(|_| value.to_string());
        out.push_str(&format!("{key}: {rendered}\n"));
    }
    out
}

/// Write the default configuration under `root`.
///
/// An existing file is left alone unless `force` is set.
pub fn write_default_config(root: &Path, force: bool) -> Result<InitOutcome> {
    let path = config::config_path(root);
    let existed = path.exists();
    if existed && !force {
        return Ok(InitOutcome::AlreadyExists(path));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&path, default_config(&defaults::table())).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!("wrote {}", path.display());

    Ok(if existed {
        InitOutcome::Overwritten(path)
    } else {
        InitOutcome::Created(path)
    })
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
