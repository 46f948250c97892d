// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{LaunchError, LaunchPhase, LaunchReporter, WorkerOutcome};
use tracing::{debug, error, info};

/// Writes the launcher's notices as human-readable log lines
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl LaunchReporter for TracingReporter {
    fn started(&self, iteration: u64) {
        info!("Starting worker thread (iteration {})", iteration);
    }

    fn finished(&self, outcome: &WorkerOutcome) {
        info!(
            exit_status = outcome.exit_status,
            elapsed_ms = outcome.elapsed.as_millis() as u64,
            "Thread {} finished",
            outcome.unit
        );
    }

    fn failed(&self, error: &LaunchError) {
        error!("{}", error);
    }

    fn phase_changed(&self, iteration: u64, phase: LaunchPhase) {
        debug!(iteration, ?phase, "launcher phase changed");
    }
}
