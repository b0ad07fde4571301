// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use termcolor::{Ansi, NoColor};

use super::TextFormatter;
use crate::check::CheckOutput;
use crate::services::Services;

fn evaluate(pattern: &str, candidates: &[&str]) -> CheckOutput {
    let compiled = Services::new(pattern).compile().unwrap();
    CheckOutput::evaluate(&compiled, candidates.iter().copied())
}

fn render(output: &CheckOutput) -> String {
    let mut formatter = TextFormatter::new(NoColor::new(Vec::new()));
    formatter.write(output).unwrap();
    String::from_utf8(formatter.into_inner().into_inner()).unwrap()
}

#[test]
fn allowed_batch_has_no_summary() {
    let text = render(&evaluate("^svc-", &["svc-a", "svc-b"]));
    assert_eq!(text, "svc-a: ALLOWED\nsvc-b: ALLOWED\n");
}

#[test]
fn denied_batch_ends_with_summary() {
    let text = render(&evaluate("^svc-[a-z]+$", &["svc-a", "svc-B"]));
    assert_eq!(
        text,
        "svc-a: ALLOWED\nsvc-B: DENIED\n1 service denied by pattern ^svc-[a-z]+$\n"
    );
}

#[test]
fn summary_pluralizes() {
    let text = render(&evaluate("^svc", &["api", "web"]));
    assert!(text.ends_with("2 services denied by pattern ^svc\n"));
}

#[test]
fn ansi_writer_emits_escape_codes() {
    let output = evaluate("svc", &["svc-a"]);
    let mut formatter = TextFormatter::new(Ansi::new(Vec::new()));
    formatter.write(&output).unwrap();
    let text = String::from_utf8(formatter.into_inner().into_inner()).unwrap();
    assert!(text.contains("\x1b["));
    assert!(text.contains("ALLOWED"));
}
