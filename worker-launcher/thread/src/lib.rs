// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod thread_runtime;
pub use thread_runtime::{ThreadHandle, ThreadRuntime};

mod thread_timer;
pub use thread_timer::ThreadTimer;

pub mod settings;
pub use settings::{ConfigError, LauncherConfig, Settings};

pub mod cli;
pub use cli::Cli;

pub mod logging;
