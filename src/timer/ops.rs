//! Arithmetic composition of timers.
//!
//! Adding or subtracting two timers combines their totals into a new timer
//! with no trial history of its own. The operators never fail: when either
//! side has nothing measured the result is an idle timer. The checked forms
//! report that case, and can additionally require both sides to share the
//! same trial shape.

use std::ops::{Add, Sub};

use super::Timer;
use crate::error::{Result, TimerError};

/// How strictly two timers are compared before combining them
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verification {
    /// Combine any two measured timers
    #[default]
    Lenient,
    /// Require equal iteration counts and equal trial counts
    Strict,
}

impl<W, C> Timer<W, C> {
    /// `self + other`, reporting missing totals and, in strict mode, mismatched trials.
    pub fn try_add<W2, C2>(
        &self,
        other: &Timer<W2, C2>,
        verification: Verification,
    ) -> Result<Timer> {
        self.combine(other, verification, |a, b| a + b)
    }

    /// `self - other`, reporting missing totals and, in strict mode, mismatched trials.
    pub fn try_sub<W2, C2>(
        &self,
        other: &Timer<W2, C2>,
        verification: Verification,
    ) -> Result<Timer> {
        self.combine(other, verification, |a, b| a - b)
    }

    fn combine<W2, C2>(
        &self,
        other: &Timer<W2, C2>,
        verification: Verification,
        op: impl FnOnce(f64, f64) -> f64,
    ) -> Result<Timer> {
        if verification == Verification::Strict {
            self.verify_compatible(other)?;
        }
        let (lhs, rhs) = self
            .time()
            .zip(other.time())
            .ok_or(TimerError::EmptyMeasurement)?;
        Ok(<Timer>::derived(op(lhs, rhs), self.config))
    }

    fn verify_compatible<W2, C2>(&self, other: &Timer<W2, C2>) -> Result<()> {
        let (left_iterations, left_trials) = (self.iterations(), self.all_times().len());
        let (right_iterations, right_trials) = (other.iterations(), other.all_times().len());

        if left_iterations == right_iterations && left_trials == right_trials {
            Ok(())
        } else {
            Err(TimerError::VerificationFailure {
                left_iterations,
                left_trials,
                right_iterations,
                right_trials,
            })
        }
    }
}

impl<W1, C1, W2, C2> Add<&Timer<W2, C2>> for &Timer<W1, C1> {
    type Output = Timer;

    fn add(self, rhs: &Timer<W2, C2>) -> Timer {
        self.try_add(rhs, Verification::Lenient).unwrap_or_default()
    }
}

impl<W1, C1, W2, C2> Sub<&Timer<W2, C2>> for &Timer<W1, C1> {
    type Output = Timer;

    fn sub(self, rhs: &Timer<W2, C2>) -> Timer {
        self.try_sub(rhs, Verification::Lenient).unwrap_or_default()
    }
}

impl<W1, C1, W2, C2> Add<Timer<W2, C2>> for Timer<W1, C1> {
    type Output = Timer;

    fn add(self, rhs: Timer<W2, C2>) -> Timer {
        &self + &rhs
    }
}

impl<W1, C1, W2, C2> Sub<Timer<W2, C2>> for Timer<W1, C1> {
    type Output = Timer;

    fn sub(self, rhs: Timer<W2, C2>) -> Timer {
        &self - &rhs
    }
}
