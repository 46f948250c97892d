// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::UnitId;
use std::time::Duration;
use thiserror::Error;

/// Why a runtime could not deliver the exit status of a spawned unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// The unit of work panicked, so it never produced a status
    #[error("worker panicked")]
    Panicked,

    /// The unit was still running when the wait bound elapsed
    #[error("worker still running after {0:?}")]
    TimedOut(Duration),
}

/// Errors surfaced by a single launch-and-wait iteration
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The platform refused to create the execution unit (e.g. resource limits reached).
    /// No handle exists, so nothing is waited on.
    #[error("iteration {iteration}: failed to launch worker thread: {source}")]
    LaunchFailure {
        iteration: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("iteration {iteration}: thread {unit} panicked")]
    WorkerPanicked { iteration: u64, unit: UnitId },

    /// The unit is still live; its resources could not be released
    #[error("iteration {iteration}: thread {unit} still running after {timeout:?}")]
    JoinTimeout {
        iteration: u64,
        unit: UnitId,
        timeout: Duration,
    },
}

impl LaunchError {
    pub fn iteration(&self) -> u64 {
        match self {
            LaunchError::LaunchFailure { iteration, .. }
            | LaunchError::WorkerPanicked { iteration, .. }
            | LaunchError::JoinTimeout { iteration, .. } => *iteration,
        }
    }

    /// True when a unit may still be running after this error
    pub fn leaves_unit_live(&self) -> bool {
        matches!(self, LaunchError::JoinTimeout { .. })
    }

    pub(crate) fn from_join(iteration: u64, unit: UnitId, error: JoinError) -> Self {
        match error {
            JoinError::Panicked => LaunchError::WorkerPanicked { iteration, unit },
            JoinError::TimedOut(timeout) => LaunchError::JoinTimeout {
                iteration,
                unit,
                timeout,
            },
        }
    }
}
