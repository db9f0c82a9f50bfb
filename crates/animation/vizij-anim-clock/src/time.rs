//! Time sources for the animation clock.
//!
//! The clock never ticks on its own; every query asks a [`TimeSource`] for
//! "now" and extrapolates from the last anchor. Timestamps are plain seconds
//! as `f64` so the same arithmetic serves wall-clock time and simulated time.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use instant::Instant;

/// Source of the current timestamp, in seconds.
///
/// Implementations must be monotonic for playback to move forward; the clock
/// itself accepts any value, including time running backwards.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> f64;
}

/// Monotonic wall clock measured from its own creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    #[inline]
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Settable clock for simulations, replays and tests.
///
/// Clones share the same underlying time, so a test can keep one handle and
/// hand another to an [`AnimInterface`](crate::AnimInterface).
#[derive(Clone, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a manual clock starting at `seconds`.
    pub fn with_time(seconds: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(seconds.to_bits())),
        }
    }

    /// Set the current time.
    #[inline]
    pub fn set(&self, seconds: f64) {
        self.bits.store(seconds.to_bits(), Ordering::Release);
    }

    /// Move the current time forward by `dt` seconds (backward if negative).
    pub fn advance(&self, dt: f64) {
        let mut cur = self.bits.load(Ordering::Acquire);
        loop {
            let next = (f64::from_bits(cur) + dt).to_bits();
            match self
                .bits
                .compare_exchange_weak(cur, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return,
                Err(actual) => cur = actual,
            }
        }
    }
}

impl TimeSource for ManualClock {
    #[inline]
    fn now(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("now", &self.now())
            .finish()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    #[inline]
    fn now(&self) -> f64 {
        (**self).now()
    }
}
