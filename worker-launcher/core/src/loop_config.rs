// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::pause_worker::DEFAULT_PAUSE;
use crate::worker_launcher::DEFAULT_THREAD_NAME;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// How many iterations the driving loop runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IterationLimit {
    /// Run until externally stopped
    #[default]
    Unbounded,
    Bounded(u64),
}

impl IterationLimit {
    /// Whether another iteration may start after `done` iterations
    pub fn allows(self, done: u64) -> bool {
        match self {
            IterationLimit::Unbounded => true,
            IterationLimit::Bounded(limit) => done < limit,
        }
    }
}

impl From<Option<u64>> for IterationLimit {
    fn from(limit: Option<u64>) -> Self {
        limit.map_or(IterationLimit::Unbounded, IterationLimit::Bounded)
    }
}

/// What the driving loop does after an iteration fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the failure, wait the retry delay and carry on with the next iteration
    #[default]
    Continue,
    /// Stop the loop and return the failure
    Abort,
}

#[derive(Debug, Error)]
#[error("unknown failure policy '{0}', expected 'continue' or 'abort'")]
pub struct ParsePolicyError(String);

impl FromStr for FailurePolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "continue" => Ok(FailurePolicy::Continue),
            "abort" => Ok(FailurePolicy::Abort),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// Driving loop configuration. The default reproduces the classic behavior:
/// unbounded, one second pause, no delay between iterations, no wait bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopConfig {
    pub iterations: IterationLimit,
    pub pause: Duration,
    pub inter_iteration_delay: Duration,
    pub join_timeout: Option<Duration>,
    pub failure_policy: FailurePolicy,
    /// Delay before the next iteration after a failure under [`FailurePolicy::Continue`]
    pub retry_delay: Duration,
    pub thread_name: String,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            iterations: IterationLimit::Unbounded,
            pause: DEFAULT_PAUSE,
            inter_iteration_delay: Duration::ZERO,
            join_timeout: None,
            failure_policy: FailurePolicy::Continue,
            retry_delay: Duration::from_secs(1),
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}
