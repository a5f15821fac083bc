// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;

use stagegate::Pipeline;
use stagegate::cli::{CheckArgs, Cli, OutputFormat};
use stagegate::color::{Stream, resolve_color};
use stagegate::error::{Error, ExitCode};
use stagegate::git::{GitStager, get_staged_files, is_git_repo};
use stagegate::output::{TextReporter, json};
use stagegate::process::SystemProcess;
use stagegate::prompt::{NoInteraction, Prompt, TerminalPrompt};

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let start = Instant::now();

    let root = args.root.canonicalize().map_err(|e| {
        Error::Argument(format!("cannot use {} as root: {e}", args.root.display()))
    })?;
    if !root.is_dir() {
        return Err(Error::Argument(format!("{} is not a directory", root.display())).into());
    }

    let candidates = collect_candidates(&root, args)?;
    tracing::debug!("{} candidate files", candidates.len());

    // In JSON mode stdout carries only the verdict
    let stream = match args.output {
        OutputFormat::Text => Stream::Stdout,
        OutputFormat::Json => Stream::Stderr,
    };
    let color = resolve_color(args.color, args.no_color, stream);
    let mut reporter = match stream {
        Stream::Stdout => TextReporter::stdout(color),
        Stream::Stderr => TextReporter::stderr(color),
    };

    let mut prompt: Box<dyn Prompt> = if args.no_interaction {
        Box::new(NoInteraction)
    } else {
        Box::new(TerminalPrompt)
    };
    let process = SystemProcess;
    let stager = GitStager::new(&root);

    let mut pipeline = Pipeline::new(
        &root,
        candidates,
        &process,
        prompt.as_mut(),
        &stager,
        &mut reporter,
    );
    if let Some(path) = &cli.config {
        pipeline = pipeline.with_config_path(path);
    }
    let verdict = pipeline.run()?;

    if args.output == OutputFormat::Json {
        json::write_verdict(std::io::stdout().lock(), &verdict)?;
    }
    tracing::info!("pipeline finished in {:?}", start.elapsed());

    Ok(if verdict.accepted {
        ExitCode::Success
    } else {
        ExitCode::Rejected
    })
}

/// Explicit paths first, then staged files not already listed.
fn collect_candidates(root: &std::path::Path, args: &CheckArgs) -> anyhow::Result<Vec<PathBuf>> {
    let mut candidates = args.paths.clone();
    if !args.staged {
        return Ok(candidates);
    }

    if !is_git_repo(root) {
        return Err(Error::Argument(format!(
            "--staged requires a git repository at {}",
            root.display()
        ))
        .into());
    }
    let staged = get_staged_files(root).context("could not read staged files")?;
    for file in staged {
        let relative = file
            .strip_prefix(root)
            .map(PathBuf::from)
            .unwrap_or_else(|_| file.clone());
        if !candidates.contains(&relative) {
            candidates.push(relative);
        }
    }
    Ok(candidates)
}
