// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use worker_launcher_core::{FailurePolicy, LoopConfig};

pub const DEFAULT_CONFIG_PATH: &str = "launcher.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("thread name must not be empty")]
    EmptyThreadName,

    #[error("stack size must be greater than zero")]
    ZeroStackSize,
}

/// Launcher settings as written in the JSON config file.
/// Every field is optional; durations are in milliseconds.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    pub iterations: Option<u64>,
    pub pause_ms: Option<u64>,
    pub delay_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub on_failure: Option<FailurePolicy>,
    pub retry_delay_ms: Option<u64>,
    pub thread_name: Option<String>,
    pub stack_size: Option<usize>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub loop_config: LoopConfig,
    pub stack_size: Option<usize>,
}

impl LauncherConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Values set in `overrides` win over values in `self`
    pub fn merge(self, overrides: LauncherConfig) -> Self {
        Self {
            iterations: overrides.iterations.or(self.iterations),
            pause_ms: overrides.pause_ms.or(self.pause_ms),
            delay_ms: overrides.delay_ms.or(self.delay_ms),
            timeout_ms: overrides.timeout_ms.or(self.timeout_ms),
            on_failure: overrides.on_failure.or(self.on_failure),
            retry_delay_ms: overrides.retry_delay_ms.or(self.retry_delay_ms),
            thread_name: overrides.thread_name.or(self.thread_name),
            stack_size: overrides.stack_size.or(self.stack_size),
        }
    }

    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        let defaults = LoopConfig::default();

        let thread_name = match self.thread_name {
            Some(name) if name.trim().is_empty() => return Err(ConfigError::EmptyThreadName),
            Some(name) => name,
            None => defaults.thread_name,
        };
        if self.stack_size == Some(0) {
            return Err(ConfigError::ZeroStackSize);
        }

        let loop_config = LoopConfig {
            iterations: self.iterations.into(),
            pause: self.pause_ms.map_or(defaults.pause, Duration::from_millis),
            inter_iteration_delay: self
                .delay_ms
                .map_or(defaults.inter_iteration_delay, Duration::from_millis),
            join_timeout: self.timeout_ms.map(Duration::from_millis),
            failure_policy: self.on_failure.unwrap_or(defaults.failure_policy),
            retry_delay: self
                .retry_delay_ms
                .map_or(defaults.retry_delay, Duration::from_millis),
            thread_name,
        };

        Ok(Settings {
            loop_config,
            stack_size: self.stack_size,
        })
    }
}
