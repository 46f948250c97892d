// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ExitStatus, Timer, UnitOfWork};
use std::time::Duration;
use tracing::info;

pub const DEFAULT_PAUSE: Duration = Duration::from_secs(1);

/// Worker that logs, pauses for a fixed duration and always succeeds
pub struct PauseWorker<T: Timer> {
    timer: T,
    pause: Duration,
}

impl<T: Timer> PauseWorker<T> {
    pub fn new(timer: T, pause: Duration) -> Self {
        Self { timer, pause }
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }
}

impl<T: Timer + 'static> UnitOfWork for PauseWorker<T> {
    fn run(&self) -> ExitStatus {
        info!("Sleep {}", describe_pause(self.pause));
        self.timer.sleep(self.pause);
        0
    }
}

fn describe_pause(pause: Duration) -> String {
    if pause.subsec_nanos() != 0 {
        return format!("{} ms", pause.as_millis());
    }
    match pause.as_secs() {
        1 => "1 second".to_string(),
        secs => format!("{} seconds", secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_whole_seconds() {
        assert_eq!(describe_pause(DEFAULT_PAUSE), "1 second");
        assert_eq!(describe_pause(Duration::from_secs(3)), "3 seconds");
        assert_eq!(describe_pause(Duration::ZERO), "0 seconds");
    }

    #[test]
    fn test_describe_fractional_pause_in_millis() {
        assert_eq!(describe_pause(Duration::from_millis(250)), "250 ms");
        assert_eq!(describe_pause(Duration::from_millis(1500)), "1500 ms");
    }
}
