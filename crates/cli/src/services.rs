// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Service allow-list pattern.
//!
//! A [`Services`] value holds the regex source that every allowed service
//! identifier must match. The pattern is stored as written and only compiled
//! when a candidate is checked, so constructing one never fails.
//!
//! Matching uses search semantics: the pattern may match anywhere in the
//! candidate unless it carries its own `^`/`$` anchors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pattern::{CompiledPattern, PatternError, PatternMatch};

/// Regex which all allowed services should match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Services(String);

impl Services {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// The pattern source as supplied.
    pub fn pattern(&self) -> &str {
        &self.0
    }

    /// Check whether `svc` is allowed.
    ///
    /// The pattern is compiled on every call. Use [`Services::compile`] and
    /// keep the result when checking many candidates.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Syntax`] if the stored pattern is not a valid
    /// regular expression. No verdict is produced in that case.
    pub fn check(&self, svc: &str) -> Result<bool, PatternError> {
        Ok(self.compile()?.is_match(svc))
    }

    /// Validate and compile the pattern for repeated checks.
    pub fn compile(&self) -> Result<CompiledServices, PatternError> {
        let matcher = CompiledPattern::compile(&self.0)?;
        tracing::debug!(pattern = %self.0, kind = matcher.kind(), "compiled service pattern");
        Ok(CompiledServices {
            services: self.clone(),
            matcher,
        })
    }
}

impl fmt::Display for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Services {
    fn from(pattern: String) -> Self {
        Self(pattern)
    }
}

impl From<&str> for Services {
    fn from(pattern: &str) -> Self {
        Self(pattern.to_string())
    }
}

/// A [`Services`] pattern that has already been compiled.
#[derive(Debug, Clone)]
pub struct CompiledServices {
    services: Services,
    matcher: CompiledPattern,
}

impl CompiledServices {
    /// The pattern this matcher was compiled from.
    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Same verdict as [`Services::check`], without recompiling.
    pub fn is_match(&self, svc: &str) -> bool {
        self.matcher.is_match(svc)
    }

    /// Span of the leftmost match in `svc`.
    pub fn find(&self, svc: &str) -> Option<PatternMatch> {
        self.matcher.find(svc)
    }
}

#[cfg(test)]
#[path = "services_tests.rs"]
mod tests;
