// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ExitStatus, JoinError, UnitId, UnitOfWork};
use std::sync::Arc;
use std::time::Duration;

/// Trait for abstracting the platform facility that creates execution units
pub trait WorkerRuntime: Send + Sync {
    /// Native handle owning the unit's platform resources
    type Handle: Send;

    /// Create one concurrently schedulable unit running `work`.
    /// Returns the platform's error when the unit cannot be created; no handle exists then.
    fn spawn<W: UnitOfWork>(&self, name: String, work: Arc<W>) -> std::io::Result<Self::Handle>;

    fn unit_id(handle: &Self::Handle) -> UnitId;

    /// Block until the unit terminates, release it and return its exit status.
    ///
    /// With `timeout: None` the wait is unbounded. When a timeout elapses the
    /// handle is dropped without waiting and the unit keeps running detached.
    fn join(
        &self,
        handle: Self::Handle,
        timeout: Option<Duration>,
    ) -> Result<ExitStatus, JoinError>;
}
