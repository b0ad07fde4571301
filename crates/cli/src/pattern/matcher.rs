// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled pattern matchers with automatic optimization.

use aho_corasick::AhoCorasick;
use memchr::memmem::Finder;
use regex::Regex;

/// A compiled pattern optimized for its structure.
///
/// Every tier reports the leftmost match anywhere in the candidate, so the
/// result never depends on which tier was selected.
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    /// Single literal string (fastest).
    Literal(LiteralMatcher),
    /// Multiple literal strings (Aho-Corasick).
    MultiLiteral(MultiLiteralMatcher),
    /// Full regex (most flexible).
    Regex(RegexMatcher),
}

/// Matcher for single literal strings using SIMD-optimized memchr.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    len: usize,
    finder: Finder<'static>,
}

/// Matcher for multiple literal strings using Aho-Corasick automaton.
#[derive(Debug, Clone)]
pub struct MultiLiteralMatcher {
    automaton: AhoCorasick,
}

/// Matcher for complex regex patterns.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

/// A match found in a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    /// Byte offset where match starts.
    pub start: usize,
    /// Byte offset where match ends.
    pub end: usize,
}

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The pattern is not a valid regular expression.
    #[error("invalid service pattern `{pattern}`: {source}")]
    Syntax {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl CompiledPattern {
    /// Compile a pattern string into an optimized matcher.
    ///
    /// Automatically selects the best matcher based on pattern structure:
    /// - Plain literal -> LiteralMatcher (fastest)
    /// - Pure alternation of literals -> MultiLiteralMatcher
    /// - Complex regex -> RegexMatcher
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if is_literal(pattern) {
            return Ok(CompiledPattern::Literal(LiteralMatcher::new(pattern)));
        }

        if let Some(literals) = extract_alternation_literals(pattern) {
            // An automaton that fails to build still has a regex equivalent.
            match MultiLiteralMatcher::new(&literals) {
                Some(m) => return Ok(CompiledPattern::MultiLiteral(m)),
                None => tracing::debug!(pattern, "aho-corasick build failed, using regex"),
            }
        }

        Ok(CompiledPattern::Regex(RegexMatcher::new(pattern)?))
    }

    /// Short name of the selected tier, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            CompiledPattern::Literal(_) => "literal",
            CompiledPattern::MultiLiteral(_) => "multi-literal",
            CompiledPattern::Regex(_) => "regex",
        }
    }

    /// Find the leftmost match in the candidate.
    pub fn find(&self, candidate: &str) -> Option<PatternMatch> {
        match self {
            CompiledPattern::Literal(m) => m.find(candidate),
            CompiledPattern::MultiLiteral(m) => m.find(candidate),
            CompiledPattern::Regex(m) => m.find(candidate),
        }
    }

    /// Test whether the pattern matches anywhere in the candidate.
    pub fn is_match(&self, candidate: &str) -> bool {
        match self {
            CompiledPattern::Literal(m) => m.finder.find(candidate.as_bytes()).is_some(),
            CompiledPattern::MultiLiteral(m) => m.automaton.is_match(candidate),
            CompiledPattern::Regex(m) => m.regex.is_match(candidate),
        }
    }
}

/// Check if pattern is a plain literal (no regex metacharacters).
fn is_literal(pattern: &str) -> bool {
    !pattern.chars().any(|c| {
        matches!(
            c,
            '\\' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|'
        )
    })
}

/// Extract literals from patterns like "api|web|worker".
///
/// Returns None if the pattern is not a pure alternation of literals.
fn extract_alternation_literals(pattern: &str) -> Option<Vec<String>> {
    let parts: Vec<&str> = pattern.split('|').collect();
    if parts.len() < 2 {
        return None;
    }

    if !parts.iter().all(|part| is_literal(part)) {
        return None;
    }

    Some(parts.into_iter().map(String::from).collect())
}

impl LiteralMatcher {
    /// Create a new literal matcher.
    pub fn new(pattern: &str) -> Self {
        Self {
            len: pattern.len(),
            finder: Finder::new(pattern).into_owned(),
        }
    }

    pub fn find(&self, candidate: &str) -> Option<PatternMatch> {
        self.finder
            .find(candidate.as_bytes())
            .map(|pos| PatternMatch {
                start: pos,
                end: pos + self.len,
            })
    }
}

impl MultiLiteralMatcher {
    /// Create a new multi-literal matcher using Aho-Corasick.
    ///
    /// Uses leftmost-first semantics so the reported match is the one the
    /// regex engine would report for the same alternation.
    pub fn new(literals: &[String]) -> Option<Self> {
        AhoCorasick::builder()
            .match_kind(aho_corasick::MatchKind::LeftmostFirst)
            .build(literals)
            .ok()
            .map(|automaton| Self { automaton })
    }

    pub fn find(&self, candidate: &str) -> Option<PatternMatch> {
        self.automaton.find(candidate).map(|m| PatternMatch {
            start: m.start(),
            end: m.end(),
        })
    }
}

impl RegexMatcher {
    /// Create a new regex matcher.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|source| PatternError::Syntax {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    pub fn find(&self, candidate: &str) -> Option<PatternMatch> {
        self.regex.find(candidate).map(|m| PatternMatch {
            start: m.start(),
            end: m.end(),
        })
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
