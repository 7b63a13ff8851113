//! Background memory reclamation switch.
//!
//! Values handed to [`retire`] are dropped immediately while reclamation is
//! enabled and parked in a process-wide queue while it is paused. Re-enabling
//! drains the queue. Timed inner loops run under a [`ReclaimPause`] so that
//! expensive drops cannot land inside a measurement; wrapping a workload in
//! [`Retire`](crate::Retire) routes its results through [`retire`].
//!
//! The flag is process-wide. Driving two timers concurrently from different
//! threads interleaves pauses and is not supported.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

static ENABLED: AtomicBool = AtomicBool::new(true);
static PENDING: Mutex<Vec<Box<dyn Send>>> = Mutex::new(Vec::new());

/// Whether reclamation currently runs eagerly.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Acquire)
}

/// Stop dropping retired values until [`enable`] is called.
pub fn disable() {
    ENABLED.store(false, Ordering::Release);
}

/// Resume reclamation and drop everything retired while paused.
pub fn enable() {
    ENABLED.store(true, Ordering::Release);
    let drained = std::mem::take(&mut *PENDING.lock().unwrap_or_else(PoisonError::into_inner));
    if !drained.is_empty() {
        tracing::trace!(count = drained.len(), "reclaiming deferred values");
    }
    drop(drained);
}

/// Number of values waiting for reclamation.
pub fn pending() -> usize {
    PENDING
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .len()
}

/// Hand a value over for reclamation.
pub fn retire<T: Send + 'static>(value: T) {
    if is_enabled() {
        drop(value);
        return;
    }
    PENDING
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(Box::new(value));
}

/// RAII guard - pauses reclamation on creation, restores the prior state on drop.
///
/// Restoration also happens while unwinding from a panic in the guarded code.
///
/// # Example
/// ```
/// use micro_timer::utils::reclaim::{self, ReclaimPause};
///
/// {
///     let _pause = ReclaimPause::new();
///     assert!(!reclaim::is_enabled());
/// }
/// assert!(reclaim::is_enabled());
/// ```
pub struct ReclaimPause {
    was_enabled: bool,
}

impl ReclaimPause {
    pub fn new() -> Self {
        let was_enabled = is_enabled();
        disable();
        Self { was_enabled }
    }

    /// Whether reclamation was enabled when the guard was created.
    pub fn was_enabled(&self) -> bool {
        self.was_enabled
    }
}

impl Drop for ReclaimPause {
    fn drop(&mut self) {
        if self.was_enabled {
            enable();
        }
    }
}

impl Default for ReclaimPause {
    fn default() -> Self {
        Self::new()
    }
}
