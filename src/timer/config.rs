//! Timer configuration.

/// CPU pinning strategy during timed trials
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Leave scheduling to the OS
    #[default]
    Disabled,
    /// Pin to the current core for the duration of each timed inner loop
    PerTrial,
}

/// Configuration for a [`Timer`](crate::Timer)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimerConfig {
    /// Minimum duration of a calibrated trial in seconds (default: 0.2)
    pub min_trial_time: f64,
    /// Trials performed by `repeat_default` (default: 3)
    pub default_repeat: usize,
    /// Decimal places used when rendering times (default: 2)
    pub precision: usize,
    /// Pause background reclamation inside timed loops (default: true)
    pub pause_reclamation: bool,
    /// CPU pinning strategy (default: Disabled)
    pub pin_strategy: PinStrategy,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            min_trial_time: 0.2,
            default_repeat: 3,
            precision: 2,
            pause_reclamation: true,
            pin_strategy: PinStrategy::default(),
        }
    }
}
