// SPDX-License-Identifier: Apache-2.0

//! Fixed-delay pacing between consecutive mutating calls.
//!
//! The service expects clients not to fire task mutations back to back.
//! This is a simple fixed gap, not an adaptive backoff: each `tick` awaits
//! whatever remains of the interval since the previous tick. Injected into
//! the task-mutation path so the pacing is testable and tunable instead of
//! an inline sleep.

use std::time::Duration;

use tokio::time::Instant;

/// Enforces a minimum interval between ticks.
#[derive(Debug)]
pub struct FixedDelay {
    interval: Duration,
    last: Option<Instant>,
}

impl FixedDelay {
    /// Create a limiter with the given minimum interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Create a limiter from a millisecond count (config value).
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Wait out the remainder of the interval since the previous tick.
    ///
    /// The first tick never waits.
    pub async fn tick(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                tokio::time::sleep(self.interval - elapsed).await;
            }
        }
        self.last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_tick_is_immediate() {
        let mut delay = FixedDelay::from_millis(500);
        let before = Instant::now();
        delay.tick().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn second_tick_waits_out_the_interval() {
        let mut delay = FixedDelay::from_millis(500);
        delay.tick().await;
        let before = Instant::now();
        delay.tick().await;
        // Paused clock auto-advances exactly through the sleep.
        assert_eq!(before.elapsed(), Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_time_counts_toward_the_interval() {
        let mut delay = FixedDelay::from_millis(500);
        delay.tick().await;
        tokio::time::advance(Duration::from_millis(400)).await;
        let before = Instant::now();
        delay.tick().await;
        assert_eq!(before.elapsed(), Duration::from_millis(100));
    }
}
