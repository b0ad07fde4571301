// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Check service identifiers against an allow-list pattern
#[derive(Parser)]
#[command(name = "svcguard")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SVCGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check services against the allow pattern
    Check(CheckArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Service identifiers to check (read from stdin when omitted)
    #[arg(value_name = "SERVICE")]
    pub services: Vec<String>,

    /// Allow pattern, overriding `[services] allow` from the config
    #[arg(short, long, value_name = "PATTERN", env = "SVCGUARD_PATTERN")]
    pub pattern: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Validate config and pattern, then exit without checking services
    #[arg(long = "config-only")]
    pub config_only: bool,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
