// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(dead_code)]

use std::io;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;
use worker_launcher_core::{
    ExitStatus, JoinError, LaunchError, LaunchPhase, LaunchReporter, Timer, UnitId, UnitOfWork,
    WorkerOutcome, WorkerRuntime,
};

// ============================================================
// Reporter double
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Started(u64),
    Finished(u64, UnitId, ExitStatus),
    Failed(u64),
}

#[derive(Clone, Default)]
pub struct RecordingReporter {
    notices: Arc<Mutex<Vec<Notice>>>,
    phases: Arc<Mutex<Vec<(u64, LaunchPhase)>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn phases(&self) -> Vec<(u64, LaunchPhase)> {
        self.phases.lock().unwrap().clone()
    }

    pub fn started_count(&self) -> usize {
        self.notices()
            .iter()
            .filter(|n| matches!(n, Notice::Started(_)))
            .count()
    }

    pub fn finished_count(&self) -> usize {
        self.notices()
            .iter()
            .filter(|n| matches!(n, Notice::Finished(..)))
            .count()
    }
}

impl LaunchReporter for RecordingReporter {
    fn started(&self, iteration: u64) {
        self.notices.lock().unwrap().push(Notice::Started(iteration));
    }

    fn finished(&self, outcome: &WorkerOutcome) {
        self.notices.lock().unwrap().push(Notice::Finished(
            outcome.iteration,
            outcome.unit,
            outcome.exit_status,
        ));
    }

    fn failed(&self, error: &LaunchError) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Failed(error.iteration()));
    }

    fn phase_changed(&self, iteration: u64, phase: LaunchPhase) {
        self.phases.lock().unwrap().push((iteration, phase));
    }
}

// ============================================================
// Timer double
// ============================================================

#[derive(Clone, Default)]
pub struct RecordingTimer {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl Timer for RecordingTimer {
    fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

// ============================================================
// Runtime double: real threads, counted handles, injected failures
// ============================================================

struct LiveGuard(Arc<AtomicUsize>);

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct CountedHandle {
    call: u64,
    thread: JoinHandle<ExitStatus>,
    _guard: LiveGuard,
}

#[derive(Default)]
pub struct CountingRuntime {
    live_handles: Arc<AtomicUsize>,
    spawns: AtomicU64,
    joins: Arc<AtomicU64>,
    names: Arc<Mutex<Vec<String>>>,
    fail_spawn_on: Vec<u64>,
    time_out_on: Vec<u64>,
}

impl CountingRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse to create the unit on the given (1-based) spawn calls
    pub fn failing_on(mut self, calls: &[u64]) -> Self {
        self.fail_spawn_on = calls.to_vec();
        self
    }

    /// Report a timed-out wait on the given (1-based) spawn calls
    pub fn timing_out_on(mut self, calls: &[u64]) -> Self {
        self.time_out_on = calls.to_vec();
        self
    }

    pub fn live_handles(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.live_handles)
    }

    pub fn joins(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.joins)
    }

    pub fn names(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.names)
    }
}

impl WorkerRuntime for CountingRuntime {
    type Handle = CountedHandle;

    fn spawn<W: UnitOfWork>(&self, name: String, work: Arc<W>) -> io::Result<Self::Handle> {
        let call = self.spawns.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_spawn_on.contains(&call) {
            return Err(io::Error::new(
                io::ErrorKind::OutOfMemory,
                "injected thread creation failure",
            ));
        }

        self.names.lock().unwrap().push(name);
        self.live_handles.fetch_add(1, Ordering::SeqCst);
        let guard = LiveGuard(Arc::clone(&self.live_handles));
        let thread = std::thread::spawn(move || work.run());

        Ok(CountedHandle {
            call,
            thread,
            _guard: guard,
        })
    }

    fn unit_id(handle: &Self::Handle) -> UnitId {
        UnitId::new(0x1000 + handle.call)
    }

    fn join(
        &self,
        handle: Self::Handle,
        timeout: Option<Duration>,
    ) -> Result<ExitStatus, JoinError> {
        self.joins.fetch_add(1, Ordering::SeqCst);
        if self.time_out_on.contains(&handle.call) {
            return Err(JoinError::TimedOut(timeout.unwrap_or_default()));
        }
        handle.thread.join().map_err(|_| JoinError::Panicked)
    }
}

// ============================================================
// Instrumented unit of work
// ============================================================

/// Records how many units run its body at the same time
#[derive(Clone, Default)]
pub struct ConcurrencyProbe {
    running: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
    calls: Arc<AtomicUsize>,
}

impl ConcurrencyProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl UnitOfWork for ConcurrencyProbe {
    fn run(&self) -> ExitStatus {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.running.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        std::thread::yield_now();
        self.running.fetch_sub(1, Ordering::SeqCst);
        0
    }
}
