// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Manually advanceable clock for deterministic time-dependent tests.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use minaret_core::Clock;

/// A [`Clock`] pinned to a settable instant.
///
/// Defaults to `2026-08-08 12:00:00 UTC` so tests share a stable "today".
pub struct MockClock {
    now: Mutex<DateTime<Utc>>,
}

impl MockClock {
    /// Creates a clock pinned to `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Repins the clock to an absolute instant.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("mock clock lock") = now;
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        let by = chrono::Duration::from_std(by).expect("advance duration out of range");
        let mut now = self.now.lock().expect("mock clock lock");
        *now += by;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::at(
            Utc.with_ymd_and_hms(2026, 8, 8, 12, 0, 0)
                .single()
                .expect("valid fixed timestamp"),
        )
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("mock clock lock")
    }
}
