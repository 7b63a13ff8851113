//! Utility modules for timing and reporting.

pub mod bench;
pub mod clock;
pub mod cpu_affinity;
pub mod format;
pub mod reclaim;

// Re-export commonly used items
pub use bench::{compute_stats, Summary};
pub use clock::{Clock, PerfClock, Stopwatch};
pub use cpu_affinity::CpuPinGuard;
pub use format::format_time;
pub use reclaim::ReclaimPause;
