// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use worker_launcher_core::{ExitStatus, JoinError, UnitId, UnitOfWork, WorkerRuntime};

/// OS thread-based runtime
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRuntime {
    stack_size: Option<usize>,
}

impl ThreadRuntime {
    pub fn new() -> Self {
        Self { stack_size: None }
    }

    /// `None` keeps the platform default stack size
    pub fn with_stack_size(mut self, stack_size: Option<usize>) -> Self {
        self.stack_size = stack_size;
        self
    }
}

/// Owns a spawned thread until it is joined
pub struct ThreadHandle {
    id: UnitId,
    thread: JoinHandle<ExitStatus>,
    done: Receiver<ExitStatus>,
}

impl WorkerRuntime for ThreadRuntime {
    type Handle = ThreadHandle;

    fn spawn<W: UnitOfWork>(&self, name: String, work: Arc<W>) -> std::io::Result<Self::Handle> {
        let (done_tx, done) = mpsc::sync_channel(1);
        let mut builder = thread::Builder::new().name(name);
        if let Some(stack_size) = self.stack_size {
            builder = builder.stack_size(stack_size);
        }

        let thread = builder.spawn(move || {
            let status = work.run();
            // The launcher may have stopped listening after a timeout
            let _ = done_tx.send(status);
            status
        })?;

        Ok(ThreadHandle {
            id: native_unit_id(&thread),
            thread,
            done,
        })
    }

    fn unit_id(handle: &Self::Handle) -> UnitId {
        handle.id
    }

    fn join(
        &self,
        handle: Self::Handle,
        timeout: Option<Duration>,
    ) -> Result<ExitStatus, JoinError> {
        if let Some(timeout) = timeout {
            match handle.done.recv_timeout(timeout) {
                // Disconnected means the worker unwound before sending; join reports the panic
                Ok(_) | Err(RecvTimeoutError::Disconnected) => {}
                Err(RecvTimeoutError::Timeout) => return Err(JoinError::TimedOut(timeout)),
            }
        }
        handle.thread.join().map_err(|_| JoinError::Panicked)
    }
}

#[cfg(unix)]
fn native_unit_id<T>(thread: &JoinHandle<T>) -> UnitId {
    use std::os::unix::thread::JoinHandleExt;
    UnitId::new(thread.as_pthread_t() as u64)
}

#[cfg(windows)]
fn native_unit_id<T>(thread: &JoinHandle<T>) -> UnitId {
    use std::os::windows::io::AsRawHandle;
    UnitId::new(thread.as_raw_handle() as usize as u64)
}

#[cfg(not(any(unix, windows)))]
fn native_unit_id<T>(_thread: &JoinHandle<T>) -> UnitId {
    use std::sync::atomic::{AtomicU64, Ordering};
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    UnitId::new(NEXT_ID.fetch_add(1, Ordering::Relaxed))
}
