// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git index access.
//!
//! Uses git2 (libgit2) for all git operations to avoid subprocess overhead.
//!
//! Staged files are the paths whose index entry differs from HEAD. Deleted
//! paths are left out: there is nothing on disk for a check to read.

use std::path::{Path, PathBuf};

use anyhow::Context;
use git2::{Delta, Repository};

/// Check if a path is in a git repository.
pub fn is_git_repo(root: &Path) -> bool {
    Repository::discover(root).is_ok()
}

/// Working directory of the repository, with symlinks resolved.
fn workdir(repo: &Repository) -> anyhow::Result<PathBuf> {
    let workdir = repo
        .workdir()
        .ok_or_else(|| anyhow::anyhow!("repository has no working directory"))?;
    workdir
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", workdir.display()))
}

/// Get the files staged for commit, as absolute canonical paths.
pub fn get_staged_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let repo = Repository::discover(root).context("Failed to open repository")?;
    let workdir = workdir(&repo)?;

    // Get HEAD tree (handle case of empty repo with no commits)
    let head_tree = match repo.head() {
        Ok(head) => Some(head.peel_to_tree().context("Failed to get HEAD tree")?),
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => None,
        Err(e) => return Err(e).context("Failed to get HEAD"),
    };

    let index = repo.index().context("Failed to get repository index")?;

    // Compare HEAD tree to index to find staged changes
    let diff = repo
        .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)
        .context("Failed to compute diff")?;

    let files = diff
        .deltas()
        .filter(|delta| delta.status() != Delta::Deleted)
        .filter_map(|delta| delta.new_file().path().map(|path| workdir.join(path)))
        .collect();

    Ok(files)
}

/// Capability to re-stage files the fixer rewrote.
pub trait Stager {
    fn stage(&self, files: &[PathBuf]) -> anyhow::Result<()>;
}

/// Stages files into the index of the repository containing `root`.
#[derive(Debug, Clone)]
pub struct GitStager {
    root: PathBuf,
}

impl GitStager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Stager for GitStager {
    fn stage(&self, files: &[PathBuf]) -> anyhow::Result<()> {
        let repo = Repository::discover(&self.root).context("Failed to open repository")?;
        let workdir = workdir(&repo)?;
        let root = self
            .root
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", self.root.display()))?;

        let mut index = repo.index().context("Failed to get repository index")?;
        let mut failed = Vec::new();
        for file in files {
            match add_to_index(&mut index, &root, &workdir, file) {
                Ok(relative) => tracing::debug!("staged {}", relative.display()),
                Err(e) => {
                    tracing::warn!("could not stage {}: {e:#}", file.display());
                    failed.push(file.display().to_string());
                }
            }
        }
        // Files that did stage are kept even when others failed.
        index.write().context("Failed to write repository index")?;

        if !failed.is_empty() {
            anyhow::bail!("Failed to stage {}", failed.join(", "));
        }
        Ok(())
    }
}

fn add_to_index(
    index: &mut git2::Index,
    root: &Path,
    workdir: &Path,
    file: &Path,
) -> anyhow::Result<PathBuf> {
    let absolute = root
        .join(file)
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", file.display()))?;
    let relative = absolute
        .strip_prefix(workdir)
        .with_context(|| format!("{} is outside the repository", file.display()))?;
    index
        .add_path(relative)
        .with_context(|| format!("Failed to stage {}", relative.display()))?;
    Ok(relative.to_path_buf())
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
