// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ExitStatus, UnitId};
use std::time::{Duration, Instant};

/// One spawned execution unit.
///
/// Only exists for units the platform actually created. It is owned by the
/// launcher for the iteration that created it and consumed by the wait step,
/// which releases the native resource.
pub struct WorkerHandle<H> {
    id: UnitId,
    iteration: u64,
    started_at: Instant,
    native: H,
}

impl<H> WorkerHandle<H> {
    pub(crate) fn new(id: UnitId, iteration: u64, native: H) -> Self {
        Self {
            id,
            iteration,
            started_at: Instant::now(),
            native,
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub(crate) fn into_parts(self) -> (UnitId, u64, Instant, H) {
        (self.id, self.iteration, self.started_at, self.native)
    }
}

/// Result of one completed launch-and-wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerOutcome {
    pub iteration: u64,
    pub unit: UnitId,
    pub exit_status: ExitStatus,
    pub elapsed: Duration,
}
