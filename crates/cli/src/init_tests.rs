// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::config::{Settings, parse, resolve};
use crate::test_utils::{temp_project, temp_project_with_config};

#[test]
fn template_lists_every_default_in_order() {
    let rendered = default_config(&defaults::table());
    let keys: Vec<&str> = rendered
        .lines()
        .filter(|line| !line.starts_with('#') && !line.is_empty())
        .filter_map(|line| line.split(':').next())
        .collect();
    let expected: Vec<&str> = defaults::table().iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, expected);
}

#[test]
fn template_values_render_as_yaml_scalars() {
    let rendered = default_config(&defaults::table());
    assert!(rendered.contains("run_lint: true\n"));
    assert!(rendered.contains("style_checker_standard: \"PSR2\"\n"));
    assert!(rendered.contains("excluded_path_prefixes: [\"/app\",\"/bin\"]\n"));
    assert!(rendered.contains("max_restarts: 5\n"));
}

#[test]
fn template_parses_back_to_defaults() {
    let path = PathBuf::from(config::CONFIG_PATH);
    let loaded = parse(&default_config(&defaults::table()), &path).unwrap();
    let config = resolve(Some(loaded), &defaults::table(), path);

    assert_eq!(config.defaulted().count(), 0);
    assert!(config.unknown_keys().is_empty());
    Settings::from_config(&config).unwrap();
}

#[test]
fn writes_config_into_fresh_project() {
    let tmp = temp_project();
    let outcome = write_default_config(tmp.path(), false).unwrap();

    let path = config::config_path(tmp.path());
    assert_eq!(outcome, InitOutcome::Created(path.clone()));
    assert!(fs::read_to_string(path).unwrap().starts_with("# stagegate configuration"));
}

#[test]
fn existing_config_is_kept_without_force() {
    let tmp = temp_project_with_config("run_lint: false\n");
    let outcome = write_default_config(tmp.path(), false).unwrap();

    let path = config::config_path(tmp.path());
    assert_eq!(outcome, InitOutcome::AlreadyExists(path.clone()));
    assert_eq!(fs::read_to_string(path).unwrap(), "run_lint: false\n");
}

#[test]
fn force_overwrites_existing_config() {
    let tmp = temp_project_with_config("run_lint: false\n");
    let outcome = write_default_config(tmp.path(), true).unwrap();

    let path = config::config_path(tmp.path());
    assert_eq!(outcome, InitOutcome::Overwritten(path.clone()));
    assert!(fs::read_to_string(path).unwrap().contains("run_lint: true"));
}
