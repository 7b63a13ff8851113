//! Error types for micro-timer.

use thiserror::Error;

/// Errors raised by [`Timer`](crate::Timer) operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimerError {
    /// An argument was out of range (zero iteration or repeat count).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Statistics were requested but nothing has been measured.
    #[error("No measurement recorded")]
    EmptyMeasurement,

    /// Strict composition of two timers whose trial shapes differ.
    #[error(
        "Verification failed: {left_iterations} iterations x {left_trials} trials \
         vs {right_iterations} iterations x {right_trials} trials"
    )]
    VerificationFailure {
        left_iterations: u64,
        left_trials: usize,
        right_iterations: u64,
        right_trials: usize,
    },
}

/// Result type alias for timer operations
pub type Result<T> = std::result::Result<T, TimerError>;
