// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    y = { "y\n", true },
    yes = { "yes\n", true },
    upper = { "YES\r\n", true },
    padded = { "  y  ", true },
    n = { "n\n", false },
    empty = { "\n", false },
    eof = { "", false },
    other = { "sure\n", false },
)]
fn parses_answers(line: &str, expected: bool) {
    assert_eq!(parse_answer(line), expected);
}

#[test]
fn no_interaction_always_declines() {
    let mut prompt = NoInteraction;
    assert!(!prompt.confirm("Auto-fix?"));
    assert!(!prompt.confirm("Restart?"));
}
