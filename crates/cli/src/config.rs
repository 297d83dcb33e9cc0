// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Layered configuration: TOML file, then environment, then flags.
//!
//! ```toml
//! [layout]
//! scripts_dir = "/NAS/mis/esp/scripts"
//!
//! [run]
//! concurrency = 8
//! deadline_secs = 3600
//!
//! [lookup]
//! command = "catalog-query --job {job}"
//!
//! [environment]
//! service_accounts = ["svc_batch"]
//! ```

use crate::env;
use bulkrun_core::Layout;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub layout: Layout,
    pub run: RunConfig,
    pub lookup: LookupConfig,
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Maximum jobs running at once; unbounded when unset
    pub concurrency: Option<usize>,
    /// Whole-batch deadline in seconds; none when unset
    pub deadline_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LookupConfig {
    pub command: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentConfig {
    pub service_accounts: Vec<String>,
}

impl Config {
    /// Load the config file and apply environment overrides.
    ///
    /// An explicitly named file (flag or `BULKRUN_CONFIG`) must exist; the
    /// default location is optional.
    pub fn load(flag: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = flag.map(Path::to_path_buf).or_else(env::explicit_config_path);
        let mut config = match explicit {
            Some(path) => Self::read(&path)?,
            None => match env::config_path() {
                Some(path) if path.exists() => Self::read(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env();
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::parse(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Environment variables override file values.
    pub fn apply_env(&mut self) {
        if let Some(n) = env::concurrency() {
            self.run.concurrency = Some(n);
        }
        if let Some(d) = env::deadline() {
            self.run.deadline_secs = Some(d.as_secs());
        }
        if let Some(cmd) = env::lookup_command() {
            self.lookup.command = Some(cmd);
        }
        if let Some(accounts) = env::service_accounts() {
            self.environment.service_accounts = accounts;
        }
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.run.deadline_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
