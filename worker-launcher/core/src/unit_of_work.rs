// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ExitStatus;

/// The fixed, parameterless payload executed inside each spawned unit
pub trait UnitOfWork: Send + Sync + 'static {
    fn run(&self) -> ExitStatus;
}

impl<F> UnitOfWork for F
where
    F: Fn() -> ExitStatus + Send + Sync + 'static,
{
    fn run(&self) -> ExitStatus {
        (self)()
    }
}
