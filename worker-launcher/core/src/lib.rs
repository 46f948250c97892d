// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod unit_id;
pub use unit_id::{ExitStatus, UnitId};

mod launch_error;
pub use launch_error::{JoinError, LaunchError};

pub mod timer;
pub use timer::Timer;

pub mod shutdown_signal;
pub use shutdown_signal::ShutdownSignal;

pub mod atomic_shutdown_signal;
pub use atomic_shutdown_signal::AtomicShutdownSignal;

pub mod unit_of_work;
pub use unit_of_work::UnitOfWork;

mod pause_worker;
pub use pause_worker::PauseWorker;

pub mod worker_runtime;
pub use worker_runtime::WorkerRuntime;

mod worker_handle;
pub use worker_handle::{WorkerHandle, WorkerOutcome};

pub mod launch_reporter;
pub use launch_reporter::{LaunchPhase, LaunchReporter};

mod tracing_reporter;
pub use tracing_reporter::TracingReporter;

mod worker_launcher;
pub use worker_launcher::WorkerLauncher;

mod loop_config;
pub use loop_config::{FailurePolicy, IterationLimit, LoopConfig, ParsePolicyError};

mod launch_loop;
pub use launch_loop::{LaunchLoop, LoopSummary};
