// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One line per candidate:
//! ```text
//! <service>: ALLOWED
//! <service>: DENIED
//! ```
//! Denied batches end with a summary naming the pattern.

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::check::{CheckOutput, Verdict};
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Create a text formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write every verdict followed by the summary line.
    pub fn write(&mut self, output: &CheckOutput) -> std::io::Result<()> {
        for verdict in &output.services {
            self.write_verdict(verdict)?;
        }

        if !output.passed {
            self.write_summary(output)?;
        }
        self.out.flush()
    }

    fn write_verdict(&mut self, verdict: &Verdict) -> std::io::Result<()> {
        self.out.set_color(&scheme::service())?;
        write!(self.out, "{}", verdict.service)?;
        self.out.reset()?;
        write!(self.out, ": ")?;

        if verdict.allowed {
            self.out.set_color(&scheme::allowed())?;
            write!(self.out, "ALLOWED")?;
        } else {
            self.out.set_color(&scheme::denied())?;
            write!(self.out, "DENIED")?;
        }
        self.out.reset()?;
        writeln!(self.out)
    }

    fn write_summary(&mut self, output: &CheckOutput) -> std::io::Result<()> {
        let denied = output.denied_count();
        let noun = if denied == 1 { "service" } else { "services" };
        write!(self.out, "{denied} {noun} denied by pattern ")?;
        self.out.set_color(&scheme::pattern())?;
        write!(self.out, "{}", output.pattern)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// Consume the formatter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
