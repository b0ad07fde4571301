// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[parameterized(
    anchored_lowercase = { "^svc-[a-z]+$", "svc-payments", true },
    anchored_rejects_uppercase = { "^svc-[a-z]+$", "svc-Payments", false },
    anchored_rejects_digits = { "^svc-[a-z]+$", "svc-42", false },
    unanchored_substring = { "svc", "myservice", true },
    wildcard_matches_empty = { ".*", "", true },
    suffix_anchor = { "-prod$", "billing-prod", true },
    suffix_anchor_miss = { "-prod$", "billing-prod-canary", false },
)]
fn check_reports_match(pattern: &str, svc: &str, expected: bool) {
    let services = Services::new(pattern);
    assert_eq!(services.check(svc).unwrap(), expected);
}

#[parameterized(
    empty = { "" },
    service = { "svc-payments" },
    whitespace = { "  " },
)]
fn unbalanced_group_is_an_error_for_any_candidate(svc: &str) {
    let services = Services::new("(");
    assert!(matches!(services.check(svc), Err(PatternError::Syntax { .. })));
}

#[test]
fn construction_does_not_validate() {
    let services = Services::from("[unclosed");
    assert_eq!(services.pattern(), "[unclosed");
    assert!(services.compile().is_err());
}

#[test]
fn display_shows_pattern_source() {
    let services = Services::from(String::from("^svc-"));
    assert_eq!(services.to_string(), "^svc-");
}

#[test]
fn deserializes_from_bare_string() {
    let services: Services = serde_json::from_str(r#""^svc-[a-z]+$""#).unwrap();
    assert_eq!(services, Services::new("^svc-[a-z]+$"));
}

#[test]
fn serializes_to_bare_string() {
    let json = serde_json::to_string(&Services::new("svc")).unwrap();
    assert_eq!(json, r#""svc""#);
}

#[test]
fn compiled_keeps_source_pattern() {
    let compiled = Services::new("^svc").compile().unwrap();
    assert_eq!(compiled.services().pattern(), "^svc");
}

#[test]
fn compiled_find_reports_span() {
    let compiled = Services::new("pay").compile().unwrap();
    let m = compiled.find("svc-payments").unwrap();
    assert_eq!((m.start, m.end), (4, 7));
}

#[test]
fn shared_across_threads() {
    let services = std::sync::Arc::new(Services::new("^svc-[a-z]+$"));
    let handles: Vec<_> = ["svc-a", "svc-B", "svc-c"]
        .into_iter()
        .map(|svc| {
            let services = std::sync::Arc::clone(&services);
            std::thread::spawn(move || services.check(svc).unwrap())
        })
        .collect();
    let verdicts: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(verdicts, vec![true, false, true]);
}

proptest! {
    #[test]
    fn check_is_deterministic(svc in "\\PC{0,24}") {
        let services = Services::new("^svc-[a-z]+$");
        let first = services.check(&svc).unwrap();
        prop_assert_eq!(services.check(&svc).unwrap(), first);
    }

    #[test]
    fn compiled_agrees_with_check(
        pattern in prop_oneof![
            Just("svc"),
            Just("api|web"),
            Just("^svc-[a-z]+$"),
            Just(r"\d{2,}"),
            Just(".*"),
        ],
        svc in "[a-zA-Z0-9-]{0,16}",
    ) {
        let services = Services::new(pattern);
        let compiled = services.compile().unwrap();
        prop_assert_eq!(compiled.is_match(&svc), services.check(&svc).unwrap());
    }

    #[test]
    fn literal_check_is_substring_containment(
        needle in "[a-z]{1,4}",
        svc in "[a-z]{0,16}",
    ) {
        let services = Services::new(needle.clone());
        prop_assert_eq!(services.check(&svc).unwrap(), svc.contains(&needle));
    }
}
