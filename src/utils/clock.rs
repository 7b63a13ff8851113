//! Time sources.
//!
//! A clock is anything that reports the current time as floating-point
//! seconds. The default [`PerfClock`] reads `std::time::Instant` relative to a
//! process-wide origin, so readings from different instances are comparable.

use std::sync::OnceLock;
use std::time::Instant;

static ORIGIN: OnceLock<Instant> = OnceLock::new();

/// Monotonic time source returning seconds.
///
/// Successive calls must not decrease. Any `Fn() -> f64` closure is a clock,
/// which makes it easy to inject a manual clock in tests.
pub trait Clock {
    fn now(&self) -> f64;
}

impl<F> Clock for F
where
    F: Fn() -> f64,
{
    #[inline(always)]
    fn now(&self) -> f64 {
        self()
    }
}

/// High-resolution wall clock, the default for every timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PerfClock;

impl Clock for PerfClock {
    #[inline(always)]
    fn now(&self) -> f64 {
        let origin = *ORIGIN.get_or_init(Instant::now);
        origin.elapsed().as_secs_f64()
    }
}

/// A single scoped reading: started on creation, read with [`Stopwatch::elapsed`].
pub struct Stopwatch<'c, C: Clock + ?Sized> {
    clock: &'c C,
    start: f64,
}

impl<'c, C: Clock + ?Sized> Stopwatch<'c, C> {
    #[inline(always)]
    pub fn start(clock: &'c C) -> Self {
        Self {
            start: clock.now(),
            clock,
        }
    }

    /// Seconds since the stopwatch started, never negative.
    #[inline(always)]
    pub fn elapsed(&self) -> f64 {
        (self.clock.now() - self.start).max(0.0)
    }
}
