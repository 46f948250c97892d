// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use worker_launcher_core::{
    AtomicShutdownSignal, IterationLimit, LaunchLoop, PauseWorker, TracingReporter,
    WorkerLauncher,
};
use worker_launcher_thread::{logging, Cli, ThreadRuntime, ThreadTimer};

fn main() -> ExitCode {
    logging::init_tracing();
    let cli = Cli::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let config = settings.loop_config;

    match config.iterations {
        IterationLimit::Unbounded => info!("Launching worker threads until interrupted"),
        IterationLimit::Bounded(n) => info!("Launching {} worker threads", n),
    }

    // Setup Ctrl+C handler
    let shutdown = AtomicShutdownSignal::new();
    let ctrl_c_signal = shutdown.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Ctrl+C received, stopping after the current worker");
        ctrl_c_signal.shutdown();
    }) {
        warn!("Failed to install Ctrl+C handler: {}", e);
    }

    let runtime = ThreadRuntime::new().with_stack_size(settings.stack_size);
    let worker = PauseWorker::new(ThreadTimer, config.pause);
    let launcher = WorkerLauncher::new(runtime, worker, TracingReporter);
    let mut driving_loop = LaunchLoop::new(launcher, ThreadTimer, shutdown, config);

    match driving_loop.run() {
        Ok(summary) => {
            info!(
                "Launched {} workers: {} completed, {} failed",
                summary.launched, summary.completed, summary.failed
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Launch loop stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}
