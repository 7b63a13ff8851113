//! # Micro-Timer
//!
//! Wall-clock timing of small code snippets with an automatically calibrated
//! iteration count.
//!
//! ```
//! use micro_timer::{Timer, TimerConfig};
//!
//! let mut timer = Timer::new(|| (0..64).map(|n| n * n).sum::<u64>())
//!     .with_config(TimerConfig { min_trial_time: 0.01, ..TimerConfig::default() });
//! timer.repeat(5, None).unwrap();
//!
//! assert_eq!(timer.all_times().len(), 5);
//! assert!(timer.best().unwrap() <= timer.worst().unwrap());
//! println!("{}", timer);
//! ```

pub mod error;
pub mod timer;
pub mod utils;

pub use error::{Result, TimerError};
pub use timer::{
    Measurement, Noop, PinStrategy, Retire, ScopedRegion, Timer, TimerConfig, TrialSet,
    Verification, Workload,
};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{Result, TimerError};
    pub use crate::timer::{Timer, TimerConfig, Verification, Workload};
    pub use crate::utils::clock::{Clock, PerfClock};
    pub use crate::utils::format::format_time;
}
