//! Shared statistics helpers.
//!
//! All inputs are trial durations in seconds. Empty inputs are reported as
//! [`TimerError::EmptyMeasurement`] instead of a zero sentinel.

use crate::error::{Result, TimerError};

/// Aggregate statistics over a series of trials
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// Mean trial duration (seconds)
    pub mean: f64,
    /// Population standard deviation of the trial durations (seconds)
    pub std_dev: f64,
    /// Fastest trial (seconds)
    pub best: f64,
    /// Slowest trial (seconds)
    pub worst: f64,
    /// Number of trials
    pub samples: usize,
    /// Workload invocations per trial
    pub iterations: u64,
}

impl Summary {
    /// Mean time of a single invocation (seconds).
    pub fn per_iteration(&self) -> f64 {
        self.mean / self.iterations.max(1) as f64
    }
}

/// Minimum of the slice
pub fn best(times: &[f64]) -> Result<f64> {
    times
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(TimerError::EmptyMeasurement)
}

/// Maximum of the slice
pub fn worst(times: &[f64]) -> Result<f64> {
    times
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(TimerError::EmptyMeasurement)
}

/// Arithmetic mean
pub fn mean(times: &[f64]) -> Result<f64> {
    if times.is_empty() {
        return Err(TimerError::EmptyMeasurement);
    }
    Ok(times.iter().sum::<f64>() / times.len() as f64)
}

/// Population standard deviation (divisor `n`).
pub fn calculate_std_dev(times: &[f64], mean: f64) -> Result<f64> {
    if times.is_empty() {
        return Err(TimerError::EmptyMeasurement);
    }

    let variance: f64 = times
        .iter()
        .map(|t| {
            let diff = t - mean;
            diff * diff
        })
        .sum::<f64>()
        / times.len() as f64;

    Ok(variance.sqrt())
}

/// Compute all statistics for a trial series
pub fn compute_stats(times: &[f64], iterations: u64) -> Result<Summary> {
    let mean = mean(times)?;
    Ok(Summary {
        mean,
        std_dev: calculate_std_dev(times, mean)?,
        best: best(times)?,
        worst: worst(times)?,
        samples: times.len(),
        iterations,
    })
}
