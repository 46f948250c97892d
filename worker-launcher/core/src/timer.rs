// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

/// Blocking pause, injectable so tests never sleep in real time
pub trait Timer: Send + Sync {
    fn sleep(&self, duration: Duration);
}

impl<T: Timer + ?Sized> Timer for std::sync::Arc<T> {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}
