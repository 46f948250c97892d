// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ExitStatus, LaunchError, UnitId, WorkerOutcome};

/// Per-iteration launcher state: `Idle → Launching → Running → Finished → Idle`,
/// or `Launching → Failed` when the platform refuses to create the unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
    Idle,
    Launching,
    Running(UnitId),
    Finished(UnitId, ExitStatus),
    Failed,
}

/// Receives the launcher's notices
pub trait LaunchReporter: Send + Sync {
    /// Emitted before the unit is requested
    fn started(&self, iteration: u64);

    /// Emitted after the unit terminated and was released
    fn finished(&self, outcome: &WorkerOutcome);

    fn failed(&self, error: &LaunchError);

    fn phase_changed(&self, _iteration: u64, _phase: LaunchPhase) {}
}

impl<R: LaunchReporter + ?Sized> LaunchReporter for std::sync::Arc<R> {
    fn started(&self, iteration: u64) {
        (**self).started(iteration)
    }

    fn finished(&self, outcome: &WorkerOutcome) {
        (**self).finished(outcome)
    }

    fn failed(&self, error: &LaunchError) {
        (**self).failed(error)
    }

    fn phase_changed(&self, iteration: u64, phase: LaunchPhase) {
        (**self).phase_changed(iteration, phase)
    }
}
