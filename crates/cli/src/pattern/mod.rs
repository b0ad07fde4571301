// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation for service allow-lists.
//!
//! Picks the cheapest matcher that preserves regex search semantics:
//! - Single literal: memchr::memmem
//! - Multiple literals: aho-corasick
//! - Complex regex: regex crate

pub mod matcher;

pub use matcher::{CompiledPattern, PatternError, PatternMatch};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
