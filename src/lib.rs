//! A small debugging demo: a recursive factorial, a summation, a student
//! record and a few lines of console output.

use std::io::Write;

use anyhow::{Context, Result};

mod error;
pub mod format;
mod student;

pub use error::DemoError;
pub use student::Student;

/// Header printed before anything else.
pub const BANNER: &str = "== C++ Debugger Demo ===";
/// Message printed in the last step along with its length.
pub const MESSAGE: &str = "Hello from C++!";

/// Computes `n!` recursively.
///
/// Returns [`DemoError::FactorialOverflow`] once the product no longer fits
/// in a `u64` (any `n` above 20).
pub fn factorial(n: u32) -> Result<u64, DemoError> {
    if n <= 1 {
        return Ok(1);
    }
    factorial(n - 1)?
        .checked_mul(u64::from(n))
        .ok_or(DemoError::FactorialOverflow { n })
}

/// Sums `values` left to right, starting from zero.
pub fn sum_values(values: &[i32]) -> i64 {
    let mut sum = 0;
    for &n in values {
        sum += i64::from(n);
    }
    sum
}

/// Runs the demo, writing every line of output to `out`.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    tracing::info!("Running demo");
    writeln!(out, "{BANNER}").context("Failed to write banner")?;

    let num = 5;
    let result = factorial(num)?;
    tracing::debug!(num, result, "computed factorial");
    writeln!(out, "Factorial of {num} is: {result}").context("Failed to write factorial")?;

    let numbers = [10, 20, 30, 40, 50];
    let total = sum_values(&numbers);
    tracing::debug!(?numbers, total, "computed sum");
    writeln!(out, "Sum of vector: {total}").context("Failed to write sum")?;

    let mut student = Student::new("Ivan", 21);
    student.add_grade(85);
    student.add_grade(92);
    student.add_grade(78);
    student.add_grade(95);
    student
        .write_info(out)
        .context("Failed to write student info")?;

    writeln!(out, "{MESSAGE}").context("Failed to write message")?;
    writeln!(out, "Message length: {}", MESSAGE.len())
        .context("Failed to write message length")?;

    tracing::info!("Demo finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(5, 120)]
    #[case(10, 3_628_800)]
    #[case(20, 2_432_902_008_176_640_000)]
    fn factorial_values(#[case] n: u32, #[case] expected: u64) {
        assert_eq!(factorial(n), Ok(expected));
    }

    #[test]
    fn factorial_recurrence() {
        for n in 2..=20 {
            assert_eq!(
                factorial(n).unwrap(),
                u64::from(n) * factorial(n - 1).unwrap()
            );
        }
    }

    #[rstest]
    #[case(21)]
    #[case(100)]
    fn overflow_reports_first_overflowing_input(#[case] n: u32) {
        assert_eq!(factorial(n), Err(DemoError::FactorialOverflow { n: 21 }));
    }

    #[test]
    fn empty_sum_is_zero() {
        assert_eq!(sum_values(&[]), 0);
    }

    #[test]
    fn sum_ignores_order() {
        assert_eq!(sum_values(&[10, 20, 30, 40, 50]), 150);
        assert_eq!(sum_values(&[50, 30, 10, 40, 20]), 150);
    }

    #[test]
    fn sum_does_not_overflow_i32() {
        assert_eq!(sum_values(&[i32::MAX, i32::MAX]), 2 * i64::from(i32::MAX));
    }

    #[test]
    fn message_length() {
        assert_eq!(MESSAGE.len(), 15);
    }
}
