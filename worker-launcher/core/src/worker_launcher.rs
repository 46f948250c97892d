// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{
    LaunchError, LaunchPhase, LaunchReporter, UnitOfWork, WorkerHandle, WorkerOutcome,
    WorkerRuntime,
};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_THREAD_NAME: &str = "worker";

/// Runs a fixed unit of work on a separate execution unit, one at a time,
/// blocking until it completes
pub struct WorkerLauncher<R: WorkerRuntime, W: UnitOfWork, P: LaunchReporter> {
    runtime: R,
    work: Arc<W>,
    reporter: P,
    thread_name: String,
    join_timeout: Option<Duration>,
}

impl<R: WorkerRuntime, W: UnitOfWork, P: LaunchReporter> WorkerLauncher<R, W, P> {
    pub fn new(runtime: R, work: W, reporter: P) -> Self {
        Self {
            runtime,
            work: Arc::new(work),
            reporter,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
            join_timeout: None,
        }
    }

    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Bound the wait step. `None` (the default) waits forever.
    pub fn with_join_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.join_timeout = timeout;
        self
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    pub fn reporter(&self) -> &P {
        &self.reporter
    }

    /// Launch one unit, wait for it, release it and report its exit status.
    ///
    /// Taking `&mut self` keeps a second launch from starting while a unit is live.
    pub fn launch_and_wait(&mut self, iteration: u64) -> Result<WorkerOutcome, LaunchError> {
        self.reporter.started(iteration);
        self.reporter.phase_changed(iteration, LaunchPhase::Launching);

        let handle = match self.launch(iteration) {
            Ok(handle) => handle,
            Err(e) => return Err(self.fail(iteration, e)),
        };
        self.reporter
            .phase_changed(iteration, LaunchPhase::Running(handle.id()));

        let outcome = match self.wait(handle) {
            Ok(outcome) => outcome,
            Err(e) => return Err(self.fail(iteration, e)),
        };

        self.reporter.phase_changed(
            iteration,
            LaunchPhase::Finished(outcome.unit, outcome.exit_status),
        );
        self.reporter.finished(&outcome);
        self.reporter.phase_changed(iteration, LaunchPhase::Idle);
        Ok(outcome)
    }

    fn launch(&self, iteration: u64) -> Result<WorkerHandle<R::Handle>, LaunchError> {
        let name = format!("{}-{}", self.thread_name, iteration);
        let native = self
            .runtime
            .spawn(name, Arc::clone(&self.work))
            .map_err(|source| LaunchError::LaunchFailure { iteration, source })?;
        let id = R::unit_id(&native);
        Ok(WorkerHandle::new(id, iteration, native))
    }

    fn wait(&self, handle: WorkerHandle<R::Handle>) -> Result<WorkerOutcome, LaunchError> {
        let (unit, iteration, started_at, native) = handle.into_parts();
        let exit_status = self
            .runtime
            .join(native, self.join_timeout)
            .map_err(|e| LaunchError::from_join(iteration, unit, e))?;

        Ok(WorkerOutcome {
            iteration,
            unit,
            exit_status,
            elapsed: started_at.elapsed(),
        })
    }

    fn fail(&self, iteration: u64, error: LaunchError) -> LaunchError {
        self.reporter.phase_changed(iteration, LaunchPhase::Failed);
        self.reporter.failed(&error);
        error
    }
}
