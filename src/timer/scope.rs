//! Scoped region measurement.

use super::{Measurement, Timer};
use crate::utils::clock::Clock;

/// An open measurement region.
///
/// Created by [`Timer::scope`]. Dropping the region records the elapsed time
/// on the timer, whether the enclosing block finished normally, returned early
/// through `?`, or is unwinding from a panic.
pub struct ScopedRegion<'t, W, C: Clock> {
    timer: &'t mut Timer<W, C>,
    start: f64,
}

impl<'t, W, C: Clock> ScopedRegion<'t, W, C> {
    pub(super) fn open(timer: &'t mut Timer<W, C>) -> Self {
        let start = timer.clock.now();
        Self { timer, start }
    }

    /// Seconds elapsed so far, without closing the region.
    pub fn elapsed(&self) -> f64 {
        (self.timer.clock.now() - self.start).max(0.0)
    }
}

impl<W, C: Clock> Drop for ScopedRegion<'_, W, C> {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        tracing::trace!(elapsed, "scoped region closed");
        self.timer.measurement = Measurement::Scoped { elapsed };
    }
}
