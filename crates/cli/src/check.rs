// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verdicts for a batch of candidate services.

use serde::Serialize;

use crate::services::{CompiledServices, Services};

/// Allow/deny outcome for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Candidate service identifier.
    pub service: String,

    /// Whether the candidate matched the allow pattern.
    pub allowed: bool,
}

/// Verdicts for every candidate checked against one pattern.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    /// Pattern the candidates were checked against.
    pub pattern: Services,

    /// True when every candidate is allowed.
    pub passed: bool,

    /// One entry per candidate, in input order.
    pub services: Vec<Verdict>,
}

impl CheckOutput {
    /// Check each candidate against an already-compiled pattern.
    pub fn evaluate<I, S>(compiled: &CompiledServices, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let services: Vec<Verdict> = candidates
            .into_iter()
            .map(|svc| {
                let service = svc.into();
                let allowed = compiled.is_match(&service);
                tracing::debug!(%service, allowed, "service verdict");
                Verdict { service, allowed }
            })
            .collect();

        Self {
            pattern: compiled.services().clone(),
            passed: services.iter().all(|v| v.allowed),
            services,
        }
    }

    /// Number of denied candidates.
    pub fn denied_count(&self) -> usize {
        self.services.iter().filter(|v| !v.allowed).count()
    }
}

/// Split candidate text into service identifiers, one per line.
///
/// Surrounding whitespace is trimmed and blank lines are skipped.
pub fn parse_candidates(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
