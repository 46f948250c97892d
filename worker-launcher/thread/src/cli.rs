// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::settings::{ConfigError, LauncherConfig, Settings, DEFAULT_CONFIG_PATH};
use clap::Parser;
use std::path::{Path, PathBuf};
use worker_launcher_core::FailurePolicy;

/// Repeatedly launch a worker thread and wait for it to finish
#[derive(Debug, Parser)]
#[command(name = "thread-launcher", version)]
pub struct Cli {
    /// JSON config file. Without this flag `launcher.json` is used when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Stop after this many iterations (default: run until interrupted)
    #[arg(long)]
    pub iterations: Option<u64>,

    /// How long each worker pauses, in milliseconds
    #[arg(long)]
    pub pause_ms: Option<u64>,

    /// Delay between iterations, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Give up waiting on a worker after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// What to do when a worker cannot be launched: continue or abort
    #[arg(long)]
    pub on_failure: Option<FailurePolicy>,

    #[arg(long)]
    pub retry_delay_ms: Option<u64>,

    #[arg(long)]
    pub thread_name: Option<String>,

    /// Worker stack size in bytes
    #[arg(long)]
    pub stack_size: Option<usize>,
}

impl Cli {
    pub fn overrides(&self) -> LauncherConfig {
        LauncherConfig {
            iterations: self.iterations,
            pause_ms: self.pause_ms,
            delay_ms: self.delay_ms,
            timeout_ms: self.timeout_ms,
            on_failure: self.on_failure,
            retry_delay_ms: self.retry_delay_ms,
            thread_name: self.thread_name.clone(),
            stack_size: self.stack_size,
        }
    }

    /// Config file values, overridden by command-line flags.
    /// An explicitly named config file must exist.
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        let file = match &self.config {
            Some(path) => LauncherConfig::load(path)?,
            None => LauncherConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))?,
        };
        file.merge(self.overrides()).into_settings()
    }
}
