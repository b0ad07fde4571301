// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::io::Read;
use std::path::Path;

use svcguard::check::{CheckOutput, parse_candidates};
use svcguard::cli::{CheckArgs, Cli, OutputFormat};
use svcguard::color::resolve_color;
use svcguard::error::{Error, ExitCode};
use svcguard::output::json::JsonFormatter;
use svcguard::output::text::TextFormatter;
use svcguard::services::Services;
use svcguard::{config, discovery};

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let services = resolve_services(cli, args, &cwd)?;

    // A bad pattern is a configuration fault, never a silent deny.
    let compiled = services.compile().map_err(Error::from)?;

    if args.config_only {
        tracing::info!(pattern = %services, "service pattern is valid");
        return Ok(ExitCode::Success);
    }

    let candidates = if args.services.is_empty() {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        parse_candidates(&input)
    } else {
        args.services.clone()
    };

    if candidates.is_empty() {
        return Err(Error::Argument("no services to check".to_string()).into());
    }

    let output = CheckOutput::evaluate(&compiled, candidates);

    match args.output {
        OutputFormat::Text => {
            let color_choice = resolve_color(args.color, args.no_color);
            TextFormatter::stdout(color_choice).write(&output)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write(&output)?;
        }
    }

    Ok(if output.passed {
        ExitCode::Success
    } else {
        ExitCode::Denied
    })
}

/// Pick the allow pattern: `--pattern` first, then the config file.
fn resolve_services(cli: &Cli, args: &CheckArgs, cwd: &Path) -> Result<Services, Error> {
    if let Some(pattern) = &args.pattern {
        return Ok(Services::new(pattern.as_str()));
    }

    let Some(path) = discovery::resolve_config(cli.config.as_deref(), cwd)? else {
        return Err(Error::Config {
            message: format!(
                "no service pattern: pass --pattern or create {}",
                config::CONFIG_FILE_NAME
            ),
            path: None,
        });
    };

    tracing::debug!(path = %path.display(), "loading config");
    let config = config::load(&path)?;
    config.services.allow.ok_or_else(|| Error::Config {
        message: "missing [services] allow pattern".to_string(),
        path: Some(path),
    })
}
