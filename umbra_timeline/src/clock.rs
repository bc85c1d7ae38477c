// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall-clock source for snapshot timestamps.

use std::time::SystemTime;

/// Source of snapshot timestamps.
///
/// The registry reads the clock once per append, under its lock. Readings are
/// recorded as returned: a clock that steps backwards produces snapshots with
/// decreasing timestamps, and that is not an error.
pub trait Clock: Send + Sync {
    /// Returns the current wall-clock time.
    fn now(&self) -> SystemTime;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> SystemTime + Send + Sync,
{
    #[inline]
    fn now(&self) -> SystemTime {
        self()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use super::*;

    #[test]
    fn system_clock_is_after_epoch() {
        assert!(SystemClock.now() > UNIX_EPOCH);
    }

    #[test]
    fn closures_are_clocks() {
        let fixed = || UNIX_EPOCH + Duration::from_secs(5);
        assert_eq!(Clock::now(&fixed), UNIX_EPOCH + Duration::from_secs(5));
    }
}
