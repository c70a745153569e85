//! Problem generation
//!
//! Problems are sampled from an injected [`RandomSource`] so that tests can
//! replay fixed sequences. Each problem draws two values `a` then `b` from the
//! operand range and shapes them per operator:
//!
//! - Addition / multiplication: `a op b` unchanged
//! - Subtraction: larger operand first, so the difference is never negative
//! - Division: divisor is `max(1, b)` and the dividend is `a * divisor`, so the
//!   quotient `a` and the divisor are range-bound but the dividend is derived

use crate::{ModelError, OperandRange, Operator, Problem, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Draw the next integer from the closed interval `[min, max]`
    fn next_in_range(&mut self, min: i64, max: i64) -> Result<i64>;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_in_range(&mut self, min: i64, max: i64) -> Result<i64> {
        (**self).next_in_range(min, max)
    }
}

/// Live random source backed by any [`rand::Rng`]
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, min: i64, max: i64) -> Result<i64> {
        if min > max {
            return Err(ModelError::Configuration(format!(
                "Cannot sample from empty range {min}..={max}"
            )));
        }
        Ok(self.rng.gen_range(min..=max))
    }
}

/// Bounded source that replays a fixed list of samples
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<i64>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<i64>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
        }
    }

    /// Number of samples not yet drawn
    pub fn remaining(&self) -> usize {
        self.values.len() - self.position
    }
}

impl RandomSource for SequenceSource {
    fn next_in_range(&mut self, min: i64, max: i64) -> Result<i64> {
        let value = *self
            .values
            .get(self.position)
            .ok_or(ModelError::RandomSourceExhausted {
                drawn: self.position,
            })?;
        if value < min || value > max {
            return Err(ModelError::Configuration(format!(
                "Replayed sample {value} lies outside {min}..={max}"
            )));
        }
        self.position += 1;
        Ok(value)
    }
}

const PREALLOCATE_LIMIT: usize = 1024;

/// Generate `count` problems for `operator` with operands from `range`.
///
/// A range with `min > max` is rejected before any sample is drawn. A count of
/// zero yields an empty vector.
pub fn generate<S>(
    operator: Operator,
    count: usize,
    range: OperandRange,
    rng: &mut S,
) -> Result<Vec<Problem>>
where
    S: RandomSource + ?Sized,
{
    range.validate()?;

    // `count` is unbounded user input; a bounded source can run dry long before it
    let mut problems = Vec::with_capacity(count.min(PREALLOCATE_LIMIT));
    for _ in 0..count {
        let a = rng.next_in_range(range.min, range.max)?;
        let b = rng.next_in_range(range.min, range.max)?;

        let problem = match operator {
            Operator::Add | Operator::Multiply => Problem::new(a, b, operator),
            Operator::Subtract => Problem::new(a.max(b), a.min(b), operator),
            Operator::Divide => {
                let divisor = b.max(1);
                Problem::new(a * divisor, divisor, operator)
            }
        };
        problems.push(problem);
    }

    tracing::trace!(
        "Generated {} {} problems in {}..={}",
        problems.len(),
        operator.name(),
        range.min,
        range.max
    );

    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: i64, max: i64) -> OperandRange {
        OperandRange { min, max }
    }

    #[test]
    fn test_fixed_sequence_addition() {
        let mut rng = SequenceSource::new(vec![3, 7, 2, 9, 1, 4, 5, 6, 8, 2]);
        let problems = generate(Operator::Add, 5, range(1, 9), &mut rng).unwrap();

        let pairs: Vec<(i64, i64)> = problems
            .iter()
            .map(|p| (p.first_operand, p.second_operand))
            .collect();
        assert_eq!(pairs, vec![(3, 7), (2, 9), (1, 4), (5, 6), (8, 2)]);
        assert!(problems.iter().all(|p| p.operator == Operator::Add));
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_subtraction_orders_operands() {
        let mut rng = SequenceSource::new(vec![2, 8, 5, 5]);
        let problems = generate(Operator::Subtract, 2, range(1, 9), &mut rng).unwrap();
        assert_eq!(problems[0], Problem::new(8, 2, Operator::Subtract));
        // equal samples give a zero-difference problem
        assert_eq!(problems[1], Problem::new(5, 5, Operator::Subtract));
    }

    #[test]
    fn test_division_is_exact_and_dividend_is_derived() {
        let mut rng = SequenceSource::new(vec![7, 9]);
        let problems = generate(Operator::Divide, 1, range(1, 9), &mut rng).unwrap();
        assert_eq!(problems[0], Problem::new(63, 9, Operator::Divide));
        assert!(!range(1, 9).contains(problems[0].first_operand));
    }

    #[test]
    fn test_division_forces_nonzero_divisor() {
        let mut rng = SequenceSource::new(vec![4, 0, 0, 0]);
        let problems = generate(Operator::Divide, 2, range(0, 9), &mut rng).unwrap();
        assert_eq!(problems[0], Problem::new(4, 1, Operator::Divide));
        assert_eq!(problems[1], Problem::new(0, 1, Operator::Divide));
    }

    #[test]
    fn test_multiplication_unmodified() {
        let mut rng = SequenceSource::new(vec![9, 3]);
        let problems = generate(Operator::Multiply, 1, range(1, 9), &mut rng).unwrap();
        assert_eq!(problems[0], Problem::new(9, 3, Operator::Multiply));
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mut rng = SequenceSource::default();
        let problems = generate(Operator::Add, 0, range(1, 9), &mut rng).unwrap();
        assert!(problems.is_empty());
    }

    #[test]
    fn test_inverted_range_rejected_before_sampling() {
        let mut rng = SequenceSource::new(vec![1, 2]);
        let result = generate(Operator::Add, 1, range(9, 1), &mut rng);
        assert!(matches!(result, Err(ModelError::Configuration(_))));
        assert_eq!(rng.remaining(), 2);
    }

    #[test]
    fn test_exhausted_sequence() {
        let mut rng = SequenceSource::new(vec![1, 2, 3]);
        let result = generate(Operator::Add, 2, range(1, 9), &mut rng);
        assert_eq!(result, Err(ModelError::RandomSourceExhausted { drawn: 3 }));
    }

    #[test]
    fn test_huge_count_exhausts_source_without_allocating() {
        let mut rng = SequenceSource::new(vec![1, 2]);
        let result = generate(Operator::Add, usize::MAX / 8, range(1, 9), &mut rng);
        assert_eq!(result, Err(ModelError::RandomSourceExhausted { drawn: 2 }));
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let first = generate(Operator::Add, 10, range(1, 9), &mut RngSource::seeded(42)).unwrap();
        let second = generate(Operator::Add, 10, range(1, 9), &mut RngSource::seeded(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_value_range() {
        let mut rng = RngSource::seeded(7);
        let problems = generate(Operator::Subtract, 4, range(3, 3), &mut rng).unwrap();
        assert!(problems.iter().all(|p| *p == Problem::new(3, 3, Operator::Subtract)));
    }
}
