//! Thread pinning around timed trials.
//!
//! Pinning keeps the scheduler from migrating the measuring thread between
//! cores mid-trial. Implemented with `libc` on Linux; other platforms get a
//! no-op fallback where pinning always reports failure.

// ============================================================================
// Linux implementation using libc
// ============================================================================

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    pub fn get_current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn save_affinity() -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) != 0 {
                return false;
            }
            ORIGINAL_AFFINITY.with(|cell| *cell.borrow_mut() = Some(set));
            true
        }
    }

    pub fn set_affinity(core_id: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore_affinity() -> bool {
        ORIGINAL_AFFINITY.with(|cell| match cell.borrow_mut().take() {
            Some(set) => unsafe {
                libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
            },
            None => false,
        })
    }
}

// ============================================================================
// Fallback for other platforms
// ============================================================================

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn get_current_cpu() -> Option<usize> {
        None
    }
    pub fn save_affinity() -> bool {
        true
    }
    pub fn set_affinity(_core_id: usize) -> bool {
        false
    }
    pub fn restore_affinity() -> bool {
        true
    }
}

/// Pin the calling thread to the core it is running on.
///
/// Returns the core ID, or `None` if the platform refused.
pub fn pin_to_current_core() -> Option<usize> {
    let core = platform::get_current_cpu()?;
    if !platform::save_affinity() {
        return None;
    }
    if platform::set_affinity(core) {
        Some(core)
    } else {
        platform::restore_affinity();
        None
    }
}

/// Restore the affinity saved by the last successful pin.
pub fn unpin() -> bool {
    platform::restore_affinity()
}

/// RAII guard for CPU pinning - pins on creation, unpins on drop.
///
/// The thread is unpinned when the guard goes out of scope, even if the
/// guarded code panics.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let pinned_core = pin_to_current_core();
        if pinned_core.is_none() {
            tracing::trace!("cpu pinning unavailable, measuring unpinned");
        }
        Self { pinned_core }
    }

    /// Get the core ID this thread is pinned to, if any.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
