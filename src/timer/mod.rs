//! # Timer
//!
//! Wall-clock timer that is both a scoped measurement region and a
//! repeated-trial accumulator.
//!
//! A trial runs the workload `n` times in a tight loop and records the total
//! duration. When `n` is not given, it is calibrated: the progression
//! 1, 2, 5, 10, 20, 50, ... is tried until a single trial lasts at least
//! [`TimerConfig::min_trial_time`].
//!
//! ```
//! use micro_timer::Timer;
//!
//! let mut timer = Timer::new(|| (0..100).map(|n| n.to_string()).collect::<Vec<_>>().join("-"));
//! timer.repeat(3, Some(50)).unwrap();
//! assert_eq!(timer.all_times().len(), 3);
//! assert_eq!(timer.iterations(), 50);
//! println!("{}", timer);
//! ```

pub mod config;
pub mod ops;
pub mod scope;


use std::fmt;
use std::hint::black_box;

pub use config::{PinStrategy, TimerConfig};
pub use ops::Verification;
pub use scope::ScopedRegion;

use crate::error::{Result, TimerError};
use crate::utils::bench::{self, Summary};
use crate::utils::clock::{Clock, PerfClock, Stopwatch};
use crate::utils::cpu_affinity::CpuPinGuard;
use crate::utils::format::format_time;
use crate::utils::reclaim::{self, ReclaimPause};

/// Something that can be invoked repeatedly with no arguments.
///
/// Every `FnMut() -> R` is a workload. The result is passed through
/// [`black_box`] and discarded: the side effect is what gets measured.
pub trait Workload {
    fn run_once(&mut self);
}

impl<F, R> Workload for F
where
    F: FnMut() -> R,
{
    #[inline(always)]
    fn run_once(&mut self) {
        black_box(self());
    }
}

/// The empty workload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Noop;

impl Workload for Noop {
    #[inline(always)]
    fn run_once(&mut self) {
        black_box(());
    }
}

/// Workload adapter handing each result to [`reclaim::retire`].
///
/// While the trial's [`ReclaimPause`] is held, results are queued instead of
/// dropped, so their destructors run after the timed loop. Results with no
/// drop glue are discarded in place.
///
/// ```
/// use micro_timer::{Retire, Timer};
///
/// let mut timer = Timer::new(Retire(|| vec![0u8; 256]));
/// timer.timeit(Some(100)).unwrap();
/// assert_eq!(micro_timer::utils::reclaim::pending(), 0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Retire<F>(pub F);

impl<F, R> Workload for Retire<F>
where
    F: FnMut() -> R,
    R: Send + 'static,
{
    #[inline(always)]
    fn run_once(&mut self) {
        let result = (self.0)();
        if std::mem::needs_drop::<R>() {
            reclaim::retire(result);
        } else {
            black_box(result);
        }
    }
}

/// Trial durations sharing one iteration count
#[derive(Clone, Debug, PartialEq)]
pub struct TrialSet {
    times: Vec<f64>,
    iterations: u64,
}

impl TrialSet {
    fn new(iterations: u64, first: f64) -> Self {
        Self {
            times: vec![first],
            iterations,
        }
    }

    /// Trial durations in seconds, in trial order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Workload invocations per trial.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn total(&self) -> f64 {
        self.times.iter().sum()
    }
}

/// What a timer currently holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Measurement {
    /// Nothing measured yet
    #[default]
    Idle,
    /// A scoped region completed
    Scoped { elapsed: f64 },
    /// One or more trials recorded
    Trials(TrialSet),
    /// Result of adding or subtracting two timers
    Derived { elapsed: f64 },
}

impl Measurement {
    /// Total elapsed time in seconds, if anything was measured.
    pub fn total(&self) -> Option<f64> {
        match self {
            Measurement::Idle => None,
            Measurement::Scoped { elapsed } | Measurement::Derived { elapsed } => Some(*elapsed),
            Measurement::Trials(set) => Some(set.total()),
        }
    }

    /// Iterations behind the total: 1 for a scoped region, 0 when idle or derived.
    pub fn iterations(&self) -> u64 {
        match self {
            Measurement::Scoped { .. } => 1,
            Measurement::Trials(set) => set.iterations,
            Measurement::Idle | Measurement::Derived { .. } => 0,
        }
    }

    /// Recorded trial durations; empty outside of trial mode.
    pub fn times(&self) -> &[f64] {
        match self {
            Measurement::Trials(set) => &set.times,
            _ => &[],
        }
    }
}

/// Tool for measuring execution time.
pub struct Timer<W = Noop, C = PerfClock> {
    workload: W,
    clock: C,
    config: TimerConfig,
    measurement: Measurement,
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new(Noop)
    }
}

impl Timer {
    /// A timer holding only a combined total, with no trial history.
    fn derived(elapsed: f64, config: TimerConfig) -> Self {
        Self {
            workload: Noop,
            clock: PerfClock,
            config,
            measurement: Measurement::Derived { elapsed },
        }
    }
}

impl<W: Workload> Timer<W, PerfClock> {
    /// Create a timer for `workload` using the default clock.
    pub fn new(workload: W) -> Self {
        Timer::with_clock(workload, PerfClock)
    }
}

impl<W: Workload, C: Clock> Timer<W, C> {
    /// Create a timer for `workload` reading time from `clock`.
    pub fn with_clock(workload: W, clock: C) -> Self {
        Self {
            workload,
            clock,
            config: TimerConfig::default(),
            measurement: Measurement::Idle,
        }
    }

    pub fn with_config(mut self, config: TimerConfig) -> Self {
        self.config = config;
        self
    }

    /// Open a scoped region; the elapsed time is recorded when it is dropped.
    ///
    /// ```
    /// use micro_timer::Timer;
    ///
    /// let mut timer = Timer::default();
    /// {
    ///     let _region = timer.scope();
    ///     std::thread::sleep(std::time::Duration::from_millis(5));
    /// }
    /// assert!(timer.time().unwrap() >= 0.005);
    /// ```
    pub fn scope(&mut self) -> ScopedRegion<'_, W, C> {
        ScopedRegion::open(self)
    }

    /// Run `f` inside a scoped region and return its result.
    pub fn measure<T>(&mut self, f: impl FnOnce() -> T) -> T {
        let _region = self.scope();
        f()
    }

    /// Record a single trial.
    ///
    /// With `Some(n)` the workload runs `n` times; with `None` the count is
    /// calibrated by [`Timer::auto_number`].
    ///
    /// Every recorded trial shares one iteration count. When this trial's
    /// count differs from the current series (an explicit `n` that does not
    /// match, or a calibration that lands elsewhere because the workload got
    /// cheaper or dearer), the earlier trials are discarded and a new series
    /// starts with this one. A warning is logged when that happens.
    pub fn timeit(&mut self, iterations: Option<u64>) -> Result<&mut Self> {
        let (iterations, elapsed) = match iterations {
            Some(0) => {
                return Err(TimerError::InvalidArgument(
                    "iterations must be at least 1".to_string(),
                ))
            }
            Some(n) => (n, self.time_batch(n)),
            None => self.auto_number(),
        };
        self.record(iterations, elapsed);
        Ok(self)
    }

    /// Record `repeat` trials that all share one iteration count.
    ///
    /// The first trial fixes the count (calibrated when `iterations` is
    /// `None`); the remaining `repeat - 1` reuse it.
    pub fn repeat(&mut self, repeat: usize, iterations: Option<u64>) -> Result<&mut Self> {
        if repeat == 0 {
            return Err(TimerError::InvalidArgument(
                "repeat must be at least 1".to_string(),
            ));
        }

        self.timeit(iterations)?;
        let iterations = self.measurement.iterations();

        for _ in 1..repeat {
            let elapsed = self.time_batch(iterations);
            self.record(iterations, elapsed);
        }

        Ok(self)
    }

    /// [`Timer::repeat`] with the configured default repeat count.
    pub fn repeat_default(&mut self, iterations: Option<u64>) -> Result<&mut Self> {
        self.repeat(self.config.default_repeat, iterations)
    }

    /// Find the first count in 1, 2, 5, 10, 20, 50, ... whose trial lasts at
    /// least the configured minimum, and return it with that trial's duration.
    ///
    /// Nothing is recorded on the timer.
    pub fn auto_number(&mut self) -> (u64, f64) {
        let threshold = self.config.min_trial_time;
        let mut magnitude: u64 = 1;

        loop {
            for multiplier in [1, 2, 5] {
                let iterations = magnitude.saturating_mul(multiplier);
                let elapsed = self.time_batch(iterations);
                tracing::trace!(iterations, elapsed, "calibration step");

                if elapsed >= threshold || iterations == u64::MAX {
                    tracing::debug!(iterations, elapsed, threshold, "calibrated iteration count");
                    return (iterations, elapsed);
                }
            }
            magnitude = magnitude.saturating_mul(10);
        }
    }

    /// One timed inner loop under a fresh scoped reading.
    fn time_batch(&mut self, iterations: u64) -> f64 {
        let _pin = (self.config.pin_strategy == PinStrategy::PerTrial).then(CpuPinGuard::new);
        let _pause = self.config.pause_reclamation.then(ReclaimPause::new);

        let watch = Stopwatch::start(&self.clock);
        for _ in 0..iterations {
            self.workload.run_once();
        }
        watch.elapsed()
    }

    fn record(&mut self, iterations: u64, elapsed: f64) {
        if let Measurement::Trials(set) = &mut self.measurement {
            if set.iterations == iterations {
                set.times.push(elapsed);
                return;
            }
            tracing::warn!(
                previous = set.iterations,
                discarded = set.times.len(),
                iterations,
                "iteration count changed, starting a new trial series"
            );
        }
        self.measurement = Measurement::Trials(TrialSet::new(iterations, elapsed));
    }
}

impl<W, C> Timer<W, C> {
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    /// Elapsed time in seconds: the sum of all trials, or the scoped duration.
    pub fn time(&self) -> Option<f64> {
        self.measurement.total()
    }

    /// Iterations per trial of the current series (0 before any timing).
    pub fn iterations(&self) -> u64 {
        self.measurement.iterations()
    }

    /// List of trial durations (in seconds)
    pub fn all_times(&self) -> &[f64] {
        self.measurement.times()
    }

    /// Best trial (in seconds)
    pub fn best(&self) -> Result<f64> {
        bench::best(self.all_times())
    }

    /// Worst trial (in seconds)
    pub fn worst(&self) -> Result<f64> {
        bench::worst(self.all_times())
    }

    pub fn mean(&self) -> Result<f64> {
        bench::mean(self.all_times())
    }

    pub fn std_dev(&self) -> Result<f64> {
        bench::calculate_std_dev(self.all_times(), self.mean()?)
    }

    pub fn summary(&self) -> Result<Summary> {
        bench::compute_stats(self.all_times(), self.iterations())
    }
}

impl<W, C> fmt::Display for Timer<W, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.config.precision;

        if self.all_times().len() > 1 {
            if let Ok(stats) = self.summary() {
                return write!(
                    f,
                    "{} ± {} per loop of {} evaluations (mean ± std. dev. of {}; range = [{}, {}])",
                    format_time(stats.mean, precision),
                    format_time(stats.std_dev, precision),
                    stats.iterations,
                    stats.samples,
                    format_time(stats.best, precision),
                    format_time(stats.worst, precision),
                );
            }
        }

        match self.time() {
            Some(elapsed) => f.write_str(&format_time(elapsed, precision)),
            None => f.write_str("n/a"),
        }
    }
}

impl<W, C> fmt::Debug for Timer<W, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("config", &self.config)
            .field("measurement", &self.measurement)
            .finish_non_exhaustive()
    }
}
