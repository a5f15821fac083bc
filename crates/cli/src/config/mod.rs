// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading and resolution.
//!
//! The config file is a flat YAML mapping at `.stagegate/config.yml`.
//! Loading is separate from resolution: [`load`] reads whatever the file
//! says, and [`resolve`] merges it with the compiled-in defaults into an
//! [`EffectiveConfig`] that stays immutable for one pipeline cycle.

pub mod defaults;
mod duration;
mod settings;
mod suggest;
mod value;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

pub use duration::parse_duration;
pub use settings::{CommandLine, Settings};
pub use suggest::{suggest_key, unknown_key_warning};
pub use value::ConfigValue;

use crate::error::{Error, Result};

/// Config file location relative to the project root.
pub const CONFIG_PATH: &str = ".stagegate/config.yml";

/// Key/value pairs as read from the config file.
pub type RawConfig = BTreeMap<String, ConfigValue>;

/// Where an effective value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    File,
    Default,
}

/// A resolved configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub value: ConfigValue,
    pub source: Source,
}

/// Default config file path for a project root.
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_PATH)
}

/// Load the config file, if present.
///
/// A missing file is not an error (`Ok(None)`); defaults apply to every key.
pub fn load(path: &Path) -> Result<Option<RawConfig>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    parse(&content, path).map(Some)
}

/// Parse config file content.
///
/// An empty document is an empty mapping; anything that is not a mapping
/// of known value shapes is rejected.
pub fn parse(content: &str, path: &Path) -> Result<RawConfig> {
    if content.trim().is_empty() {
        return Ok(RawConfig::new());
    }

    serde_yaml::from_str::<RawConfig>(content).map_err(|e| Error::Config {
        message: format!("{}: {}", path.display(), e),
        path: Some(path.to_path_buf()),
    })
}

/// Merge loaded values over the default table.
///
/// Keys present in the file win; every other default key is filled in.
/// File keys with no default are kept (forward compatibility) and are
/// reported by [`EffectiveConfig::unknown_keys`].
pub fn resolve(
    loaded: Option<RawConfig>,
    defaults: &[(&'static str, ConfigValue)],
    path: PathBuf,
) -> EffectiveConfig {
    let mut entries: BTreeMap<String, Entry> = defaults
        .iter()
        .map(|(key, value)| {
            (
                key.to_string(),
                Entry {
                    value: value.clone(),
                    source: Source::Default,
                },
            )
        })
        .collect();

    for (key, value) in loaded.unwrap_or_default() {
        entries.insert(
            key,
            Entry {
                value,
                source: Source::File,
            },
        );
    }

    EffectiveConfig {
        entries,
        known: defaults.iter().map(|(key, _)| *key).collect(),
        path,
    }
}

/// Configuration after merging file values over defaults.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    entries: BTreeMap<String, Entry>,
    known: Vec<&'static str>,
    path: PathBuf,
}

impl EffectiveConfig {
    /// Path of the config file these values were resolved against.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a key; unknown keys are a configuration error.
    pub fn get(&self, key: &str) -> Result<&ConfigValue> {
        self.entries
            .get(key)
            .map(|entry| &entry.value)
            .ok_or_else(|| Error::unknown_key(key, Some(self.path.clone())))
    }

    pub fn bool(&self, key: &str) -> Result<bool> {
        let value = self.get(key)?;
        value.as_bool().ok_or_else(|| self.type_error(key, "boolean", value))
    }

    pub fn string(&self, key: &str) -> Result<&str> {
        let value = self.get(key)?;
        value.as_str().ok_or_else(|| self.type_error(key, "string", value))
    }

    pub fn list(&self, key: &str) -> Result<Vec<String>> {
        let value = self.get(key)?;
        value.to_list().ok_or_else(|| self.type_error(key, "list", value))
    }

    pub fn integer(&self, key: &str) -> Result<i64> {
        let value = self.get(key)?;
        value
            .as_integer()
            .ok_or_else(|| self.type_error(key, "integer", value))
    }

    /// Duration from a string like `"30s"` or a bare number of seconds.
    pub fn duration(&self, key: &str) -> Result<Duration> {
        match self.get(key)? {
            ConfigValue::Integer(secs) if *secs >= 0 => Ok(Duration::from_secs(*secs as u64)),
            ConfigValue::String(s) => parse_duration(s).map_err(|e| Error::Config {
                message: format!("`{key}`: {e}"),
                path: Some(self.path.clone()),
            }),
            other => Err(self.type_error(key, "duration", other)),
        }
    }

    /// All entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Known keys that fell back to their default value.
    pub fn defaulted(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.source == Source::Default)
            .map(|(key, entry)| (key.as_str(), &entry.value))
    }

    /// Keys present in the file that have no default.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.entries
            .keys()
            .filter(|key| !self.known.contains(&key.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Warning lines for unknown keys, with suggestions.
    pub fn unknown_key_warnings(&self) -> Vec<String> {
        self.unknown_keys()
            .into_iter()
            .map(|key| unknown_key_warning(key, self.known.iter().copied()))
            .collect()
    }

    fn type_error(&self, key: &str, expected: &str, found: &ConfigValue) -> Error {
        Error::Config {
            message: format!(
                "`{key}` must be a {expected}, found {} `{found}`",
                found.type_name()
            ),
            path: Some(self.path.clone()),
        }
    }
}

/// Load the config file at `path` and resolve it against the default table.
pub fn load_effective(path: &Path) -> Result<EffectiveConfig> {
    let loaded = load(path)?;
    Ok(resolve(loaded, &defaults::table(), path.to_path_buf()))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
