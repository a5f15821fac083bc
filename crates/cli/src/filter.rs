// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Narrows the candidate file set to the files the checks apply to.
//!
//! A path is tracked when it has a recognized source extension and, once
//! the project root is stripped, does not sit under an excluded prefix.
//! Prefixes match whole path components: `/app` excludes `app/Kernel.php`
//! but not `application/Kernel.php`.

use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileFilter {
    root: PathBuf,
    excluded: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(root: &Path, excluded_prefixes: &[String], extensions: &[String]) -> Self {
        let excluded = excluded_prefixes
            .iter()
            .map(|prefix| prefix.trim().trim_matches('/'))
            .filter(|prefix| !prefix.is_empty())
            .map(PathBuf::from)
            .collect();
        let extensions = extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();

        Self {
            root: root.to_path_buf(),
            excluded,
            extensions,
        }
    }

    /// Keep tracked files, preserving input order.
    pub fn apply(&self, files: &[PathBuf]) -> Vec<PathBuf> {
        files
            .iter()
            .filter(|file| self.is_tracked(file))
            .cloned()
            .collect()
    }

    pub fn is_tracked(&self, file: &Path) -> bool {
        self.has_source_extension(file) && !self.is_excluded(file)
    }

    fn has_source_extension(&self, file: &Path) -> bool {
        file.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|known| known == ext))
    }

    fn is_excluded(&self, file: &Path) -> bool {
        let relative: PathBuf = file
            .strip_prefix(&self.root)
            .unwrap_or(file)
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();

        self.excluded.iter().any(|prefix| relative.starts_with(prefix))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
