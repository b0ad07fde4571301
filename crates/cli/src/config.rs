// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles svcguard.toml parsing with version validation and unknown key warnings.
//! The service pattern is carried as written; it is compiled by the caller.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::services::Services;

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "svcguard.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "services"];

/// Known keys in the `[services]` table.
const KNOWN_SERVICES_KEYS: &[&str] = &["allow"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Service allow-list settings.
    #[serde(default)]
    pub services: ServicesConfig,
}

/// `[services]` table.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ServicesConfig {
    /// Regex every allowed service must match.
    pub allow: Option<Services>,
}

/// Load config from a file path, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;

    for key in unknown_keys(content) {
        eprintln!(
            "svcguard: warning: {}: unrecognized field `{}` (ignored)",
            path.display(),
            key
        );
    }

    Ok(config)
}

/// Dotted names of keys the config schema does not recognize.
pub fn unknown_keys(content: &str) -> Vec<String> {
    let Ok(table) = content.parse::<toml::Table>() else {
        return Vec::new();
    };

    let mut unknown = Vec::new();
    for (key, value) in &table {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown.push(key.clone());
            continue;
        }
        if key == "services"
            && let toml::Value::Table(services) = value
        {
            unknown.extend(
                services
                    .keys()
                    .filter(|k| !KNOWN_SERVICES_KEYS.contains(&k.as_str()))
                    .map(|k| format!("services.{k}")),
            );
        }
    }
    unknown
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
