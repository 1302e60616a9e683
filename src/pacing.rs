//! Playback pacing
//!
//! A [`Pacer`] turns the current [`Speed`] into the delay inserted after each
//! store mutation.  [`pause`] is the single suspension point of an async run;
//! a zero delay still yields to the scheduler, so tasks holding a
//! [`SpeedHandle`](crate::controller::SpeedHandle) get to run between steps.

use crate::config::Speed;
use std::time::Duration;

/// Delay at 1x speed
pub const BASE_DELAY: Duration = Duration::from_millis(100);

pub trait Pacer {
    /// Pause to insert after one mutation at `speed`
    fn delay(&self, speed: Speed) -> Duration;
}

/// Base delay divided by the speed multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPacer {
    pub base: Duration,
}

impl FixedPacer {
    pub fn new(base: Duration) -> Self {
        FixedPacer { base }
    }
}

impl Default for FixedPacer {
    fn default() -> Self {
        FixedPacer::new(BASE_DELAY)
    }
}

impl Pacer for FixedPacer {
    fn delay(&self, speed: Speed) -> Duration {
        let nanos = self.base.as_nanos() as f64 / speed.multiplier();
        Duration::from_nanos(nanos.round() as u64)
    }
}

/// No delay at all, for tests and headless batch runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn delay(&self, _speed: Speed) -> Duration {
        Duration::ZERO
    }
}

/// Suspend for `delay`, or just yield when it is zero
pub async fn pause(delay: Duration) {
    if delay.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(delay).await;
    }
}
