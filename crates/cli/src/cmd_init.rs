// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `stagegate init` command.

use stagegate::cli::InitArgs;
use stagegate::error::ExitCode;
use stagegate::init::{InitOutcome, write_default_config};

/// Run the `init` command to create `.stagegate/config.yml`.
pub fn run(args: &InitArgs) -> anyhow::Result<ExitCode> {
    match write_default_config(&args.root, args.force)? {
        InitOutcome::Created(path) => println!("Created {}", path.display()),
        InitOutcome::Overwritten(path) => println!("Overwrote {}", path.display()),
        InitOutcome::AlreadyExists(path) => {
            eprintln!("{} already exists. Use --force to overwrite.", path.display());
            return Ok(ExitCode::ConfigError);
        }
    }
    Ok(ExitCode::Success)
}
