//! Domain-specific assertion macros for scoreline harnesses.
//!
//! These add context-rich failure messages that make it clear which
//! checkpoint or submission broke the expectation.

#![allow(dead_code)]

/// Assert that two hour values are equal within 1e-9.
///
/// ```rust
/// assert_hours_eq!(sub.hours_from_start, -5.0);
/// ```
#[macro_export]
macro_rules! assert_hours_eq {
    ($actual:expr, $expected:expr) => {{
        let actual: f64 = $actual;
        let expected: f64 = $expected;
        if (actual - expected).abs() > 1e-9 {
            panic!(
                "assert_hours_eq! failed:\n  expected: {}\n  actual:   {}",
                expected, actual
            );
        }
    }};
}

/// Assert that a checkpoint sequence is strictly increasing in total score.
#[macro_export]
macro_rules! assert_strictly_increasing {
    ($checkpoints:expr) => {{
        let checkpoints: &[scoreline_core::TotalScore] = &$checkpoints;
        for pair in checkpoints.windows(2) {
            if pair[1].total_score <= pair[0].total_score {
                panic!(
                    "assert_strictly_increasing! failed:\n  {}\n  followed by\n  {}",
                    pair[0], pair[1]
                );
            }
        }
    }};
}

/// Collect the `total_score` column of a checkpoint sequence.
pub fn totals(checkpoints: &[scoreline_core::TotalScore]) -> Vec<u64> {
    checkpoints.iter().map(|c| c.total_score).collect()
}
