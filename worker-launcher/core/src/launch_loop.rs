// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{
    FailurePolicy, LaunchError, LaunchReporter, LoopConfig, ShutdownSignal, Timer, UnitOfWork,
    WorkerLauncher, WorkerRuntime,
};
use std::time::Duration;
use tracing::{info, warn};

/// Counters for a finished driving loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    /// Iterations attempted, including failed ones
    pub launched: u64,
    pub completed: u64,
    pub failed: u64,
}

/// Sequential driving loop: one unit per iteration, each awaited before the next
pub struct LaunchLoop<R, W, P, T, S>
where
    R: WorkerRuntime,
    W: UnitOfWork,
    P: LaunchReporter,
    T: Timer,
    S: ShutdownSignal,
{
    launcher: WorkerLauncher<R, W, P>,
    timer: T,
    shutdown: S,
    config: LoopConfig,
}

impl<R, W, P, T, S> LaunchLoop<R, W, P, T, S>
where
    R: WorkerRuntime,
    W: UnitOfWork,
    P: LaunchReporter,
    T: Timer,
    S: ShutdownSignal,
{
    pub fn new(
        launcher: WorkerLauncher<R, W, P>,
        timer: T,
        shutdown: S,
        config: LoopConfig,
    ) -> Self {
        let launcher = launcher
            .with_thread_name(config.thread_name.clone())
            .with_join_timeout(config.join_timeout);
        Self {
            launcher,
            timer,
            shutdown,
            config,
        }
    }

    pub fn launcher(&self) -> &WorkerLauncher<R, W, P> {
        &self.launcher
    }

    /// Run until the iteration limit is reached or shutdown is requested.
    ///
    /// Returns the failure that stopped the loop under [`FailurePolicy::Abort`].
    /// A join timeout always stops the loop: the timed-out unit is still live,
    /// so launching another would run two units at once.
    pub fn run(&mut self) -> Result<LoopSummary, LaunchError> {
        let mut summary = LoopSummary::default();
        let mut pending_delay = Duration::ZERO;

        while self.config.iterations.allows(summary.launched) {
            if !pending_delay.is_zero() {
                self.timer.sleep(pending_delay);
            }

            // Checked after the delay so a signal raised while waiting launches nothing
            if self.shutdown.is_cancelled() {
                info!(
                    "Shutdown requested, stopping after {} iterations",
                    summary.launched
                );
                break;
            }

            summary.launched += 1;
            match self.launcher.launch_and_wait(summary.launched) {
                Ok(_) => {
                    summary.completed += 1;
                    pending_delay = self.config.inter_iteration_delay;
                }
                Err(e) if e.leaves_unit_live() => return Err(e),
                Err(e) => {
                    if self.config.failure_policy == FailurePolicy::Abort {
                        return Err(e);
                    }
                    summary.failed += 1;
                    warn!(
                        "Iteration {} failed, retrying in {:?}",
                        e.iteration(),
                        self.config.retry_delay
                    );
                    pending_delay = self.config.retry_delay;
                }
            }
        }

        Ok(summary)
    }
}
