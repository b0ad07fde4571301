// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::check::{CheckOutput, Verdict};
use crate::services::Services;

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Top-level JSON document.
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    timestamp: String,
    pattern: &'a Services,
    passed: bool,
    services: &'a [Verdict],
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, output: &CheckOutput) -> std::io::Result<()> {
        let doc = JsonOutput {
            timestamp: Utc::now().to_rfc3339(),
            pattern: &output.pattern,
            passed: output.passed,
            services: &output.services,
        };
        let json = serde_json::to_string_pretty(&doc).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }

    /// Consume the formatter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
