// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `stagegate config` command implementation.

use std::collections::BTreeMap;
use std::io::Write;

use stagegate::cli::{Cli, ConfigArgs, OutputFormat};
use stagegate::config::{self, Entry, Settings, Source};
use stagegate::error::ExitCode;

/// Print the effective configuration with the source of each value.
pub fn run(cli: &Cli, args: &ConfigArgs) -> anyhow::Result<ExitCode> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => config::config_path(&args.root),
    };
    let effective = config::load_effective(&path)?;
    // Same validation the pipeline does before running anything
    Settings::from_config(&effective)?;

    for warning in effective.unknown_key_warnings() {
        eprintln!("stagegate: warning: {warning}");
    }

    let mut stdout = std::io::stdout().lock();
    match args.output {
        OutputFormat::Text => {
            writeln!(stdout, "# {}", effective.path().display())?;
            for (key, entry) in effective.entries() {
                let source = match entry.source {
                    Source::File => "file",
                    Source::Default => "default",
                };
                writeln!(stdout, "{key}: {}  # {source}", entry.value)?;
            }
        }
        OutputFormat::Json => {
            let entries: BTreeMap<&str, &Entry> = effective.entries().collect();
            serde_json::to_writer_pretty(&mut stdout, &entries)?;
            writeln!(stdout)?;
        }
    }
    Ok(ExitCode::Success)
}
