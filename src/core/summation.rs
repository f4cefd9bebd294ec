//! Sum of the integers `1..=n`, computed three interchangeable ways.
//!
//! Every variant returns 0 for negative `n`. Results are widened to `i128` so
//! that `n * (n + 1) / 2` cannot overflow for any `i64` input.
use clap::ValueEnum;
use std::fmt::Display;
use thiserror::Error;

/// Largest `n` the recursive variant accepts through [`SumMethod::apply`].
pub const MAX_RECURSION_DEPTH: i64 = 10_000;

/// Largest `n` the iterative variant accepts through [`SumMethod::apply`].
pub const MAX_ITERATIONS: i64 = 100_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SumError {
    #[error("n = {0} exceeds the recursion limit")]
    TooDeep(i64),
    #[error("n = {0} exceeds the iteration limit")]
    TooManyIterations(i64),
}

/// Direct formula evaluation, O(1).
pub fn sum_closed_form(n: i64) -> i128 {
    if n < 0 {
        return 0;
    }
    let n = i128::from(n);
    n * (n + 1) / 2
}

/// `sum(n) = n + sum(n - 1)`, O(n) call depth.
pub fn sum_recursive(n: i64) -> i128 {
    if n <= 0 {
        return 0;
    }
    i128::from(n) + sum_recursive(n - 1)
}

/// Accumulates `1..=n`, O(n) time and O(1) space.
pub fn sum_iterative(n: i64) -> i128 {
    if n < 0 {
        return 0;
    }
    (1..=n).fold(0i128, |acc, i| acc + i128::from(i))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum SumMethod {
    ClosedForm,
    Recursive,
    Iterative,
}

impl SumMethod {
    pub const ALL: [SumMethod; 3] = [
        SumMethod::ClosedForm,
        SumMethod::Recursive,
        SumMethod::Iterative,
    ];

    pub fn apply(&self, n: i64) -> Result<i128, SumError> {
        match self {
            SumMethod::ClosedForm => Ok(sum_closed_form(n)),
            SumMethod::Recursive if n > MAX_RECURSION_DEPTH => Err(SumError::TooDeep(n)),
            SumMethod::Recursive => Ok(sum_recursive(n)),
            SumMethod::Iterative if n > MAX_ITERATIONS => Err(SumError::TooManyIterations(n)),
            SumMethod::Iterative => Ok(sum_iterative(n)),
        }
    }
}

impl Display for SumMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SumMethod::ClosedForm => "closed-form",
                SumMethod::Recursive => "recursive",
                SumMethod::Iterative => "iterative",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        for method in SumMethod::ALL {
            assert_eq!(method.apply(0), Ok(0), "{method}");
            assert_eq!(method.apply(1), Ok(1), "{method}");
            assert_eq!(method.apply(5), Ok(15), "{method}");
            assert_eq!(method.apply(100), Ok(5050), "{method}");
        }
    }

    #[test]
    fn test_variants_agree_up_to_ten_thousand() {
        for n in 0..=10_000 {
            let expected = sum_closed_form(n);
            assert_eq!(sum_iterative(n), expected, "iterative diverged at {n}");
            assert_eq!(sum_recursive(n), expected, "recursive diverged at {n}");
        }
    }

    #[test]
    fn test_negative_input_returns_zero() {
        for n in [-1, -2, -100, i64::MIN] {
            assert_eq!(sum_closed_form(n), 0);
            assert_eq!(sum_recursive(n), 0);
            assert_eq!(sum_iterative(n), 0);
        }
    }

    #[test]
    fn test_closed_form_does_not_overflow() {
        let n = i128::from(i64::MAX);
        assert_eq!(sum_closed_form(i64::MAX), n * (n + 1) / 2);
    }

    #[test]
    fn test_recursive_limit() {
        assert_eq!(
            SumMethod::Recursive.apply(MAX_RECURSION_DEPTH + 1),
            Err(SumError::TooDeep(MAX_RECURSION_DEPTH + 1))
        );
        assert_eq!(
            SumMethod::ClosedForm.apply(MAX_RECURSION_DEPTH + 1),
            Ok(sum_closed_form(MAX_RECURSION_DEPTH + 1))
        );
    }

    #[test]
    fn test_iterative_limit() {
        assert_eq!(
            SumMethod::Iterative.apply(i64::MAX),
            Err(SumError::TooManyIterations(i64::MAX))
        );
        assert_eq!(
            SumMethod::Iterative.apply(MAX_RECURSION_DEPTH + 1),
            Ok(sum_closed_form(MAX_RECURSION_DEPTH + 1))
        );
        assert_eq!(
            SumMethod::ClosedForm.apply(i64::MAX),
            Ok(sum_closed_form(i64::MAX))
        );
    }
}
