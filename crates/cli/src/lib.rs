// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Service allow-list checks.
//!
//! The core type is [`Services`]: a regex that every allowed service
//! identifier must match.
//!
//! ```
//! use svcguard::Services;
//!
//! let services = Services::new("^svc-[a-z]+$");
//! assert!(services.check("svc-payments")?);
//! assert!(!services.check("svc-Payments")?);
//! # Ok::<(), svcguard::PatternError>(())
//! ```

pub mod check;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod pattern;
pub mod services;

pub use check::{CheckOutput, Verdict};
pub use cli::{CheckArgs, Cli, Command, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use pattern::PatternError;
pub use services::{CompiledServices, Services};
