//! Two-term recurrence solver.
//!
//! Index 0 holds 0, index 1 holds 1, and every later index holds the sum of
//! the two before it. [`Fibonacci`] tabulates every index up to a bound and
//! reports, for any index from 2 on, the pair of earlier values it was built
//! from. The scalar functions compute a single value without keeping a table.

use std::fmt;

use crate::error::{ConstructionError, RangeError};
use crate::memo::{Backend, MemoBuilder, Subproblem, VecBackend};
use crate::solver::{Solver, Strategy, check_bound, checked_sum};

/// Computes the value at `index` iteratively.
///
/// Indices 0 and 1 are answered directly.
///
/// ```
/// use dp_solver::fibonacci_bottom_up;
///
/// assert_eq!(fibonacci_bottom_up(0), Ok(0));
/// assert_eq!(fibonacci_bottom_up(10), Ok(55));
/// ```
pub fn fibonacci_bottom_up(index: usize) -> Result<u64, ConstructionError> {
    check_representable(index)?;
    if index < 2 {
        return Ok(index as u64);
    }
    let (mut before, mut last) = (0u64, 1u64);
    for i in 2..=index {
        let next = checked_sum(before, last, i)?;
        before = last;
        last = next;
    }
    Ok(last)
}

/// Computes the value at `index` with a memoized top-down resolution.
pub fn fibonacci_memoized(index: usize) -> Result<u64, ConstructionError> {
    check_representable(index)?;
    MemoBuilder::new()
        .backend(VecBackend::new(index + 1))
        .problem(Recurrence)
        .build()
        .resolve(index)
}

/// Rejects indices whose value exceeds `u64` before any table is sized.
fn check_representable(index: usize) -> Result<(), ConstructionError> {
    if index > Fibonacci::LARGEST_INDEX {
        return Err(ConstructionError::Overflow(format!(
            "{:?}",
            Fibonacci::LARGEST_INDEX + 1
        )));
    }
    Ok(())
}

struct Recurrence;

impl Subproblem<usize, u64> for Recurrence {
    type Error = ConstructionError;

    fn deps(&self, index: &usize) -> Vec<usize> {
        match *index {
            0 | 1 => vec![],
            i => vec![i - 2, i - 1],
        }
    }

    fn compute(&self, index: &usize, deps: Vec<u64>) -> Result<u64, ConstructionError> {
        match *index {
            0 | 1 => Ok(*index as u64),
            i => checked_sum(deps[0], deps[1], i),
        }
    }
}

/// Tabulated two-term recurrence.
///
/// # Example
///
/// ```
/// use dp_solver::{Fibonacci, Solver, Strategy};
///
/// let fib = Fibonacci::new(10, Strategy::TopDown).unwrap();
/// assert_eq!(fib.value(10), Ok(55));
/// assert_eq!(fib.solution(10), Ok((21, 34)));
/// assert_eq!(fib.maximum_computed_bound(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Fibonacci {
    values: Vec<u64>,
    strategy: Strategy,
}

impl Fibonacci {
    /// Smallest bound that leaves at least one index with a solution
    pub const MINIMUM_BOUND: usize = 2;

    /// Largest index whose value fits in a `u64`
    pub const LARGEST_INDEX: usize = 93;

    /// Tabulates every index in `0..=bound`.
    ///
    /// Fails when `bound` is below [`Fibonacci::MINIMUM_BOUND`] or above
    /// [`Fibonacci::LARGEST_INDEX`], whose successor overflows `u64`.
    pub fn new(bound: usize, strategy: Strategy) -> Result<Self, ConstructionError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("fibonacci", bound, %strategy).entered();

        if bound < Self::MINIMUM_BOUND {
            return Err(ConstructionError::BoundTooSmall {
                bound,
                minimum: Self::MINIMUM_BOUND,
            });
        }
        check_representable(bound)?;

        let values = match strategy {
            Strategy::BottomUp => Self::fill_bottom_up(bound)?,
            Strategy::TopDown => Self::fill_top_down(bound)?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(cells = values.len(), "table filled");

        Ok(Self { values, strategy })
    }

    pub fn bottom_up(bound: usize) -> Result<Self, ConstructionError> {
        Self::new(bound, Strategy::BottomUp)
    }

    pub fn top_down(bound: usize) -> Result<Self, ConstructionError> {
        Self::new(bound, Strategy::TopDown)
    }

    fn fill_bottom_up(bound: usize) -> Result<Vec<u64>, ConstructionError> {
        let mut values = Vec::with_capacity(bound + 1);
        values.extend([0, 1]);
        for i in 2..=bound {
            let value = checked_sum(values[i - 2], values[i - 1], i)?;
            values.push(value);
        }
        Ok(values)
    }

    fn fill_top_down(bound: usize) -> Result<Vec<u64>, ConstructionError> {
        let mut memo = MemoBuilder::new()
            .backend(VecBackend::new(bound + 1))
            .problem(Recurrence)
            .build();
        memo.resolve(bound)?;

        let backend = memo.into_backend();
        Ok((0..=bound)
            .map(|i| {
                *backend
                    .get(&i)
                    .expect("every index below the bound is reachable from it")
            })
            .collect())
    }

    fn bound(&self) -> usize {
        self.values.len() - 1
    }
}

impl Solver for Fibonacci {
    /// The values at `index - 2` and `index - 1`
    type Solution = (u64, u64);

    fn value(&self, index: usize) -> Result<u64, RangeError> {
        check_bound(index, self.bound())?;
        Ok(self.values[index])
    }

    fn solution(&self, index: usize) -> Result<(u64, u64), RangeError> {
        if index < Self::MINIMUM_BOUND {
            return Err(RangeError::BelowMinimum {
                point: index,
                minimum: Self::MINIMUM_BOUND,
            });
        }
        check_bound(index, self.bound())?;
        Ok((self.values[index - 2], self.values[index - 1]))
    }

    fn maximum_computed_bound(&self) -> usize {
        self.bound()
    }

    fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl fmt::Display for Fibonacci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "values: {:?}", self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: [u64; 12] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89];

    #[test]
    fn test_scalar_functions_match_known_values() {
        for (index, expected) in EXPECTED.iter().enumerate() {
            assert_eq!(fibonacci_bottom_up(index), Ok(*expected));
            assert_eq!(fibonacci_memoized(index), Ok(*expected));
        }
    }

    #[test]
    fn test_tabulated_values_and_solutions() {
        for strategy in [Strategy::BottomUp, Strategy::TopDown] {
            let fib = Fibonacci::new(11, strategy).unwrap();
            assert_eq!(
                fib.to_string(),
                "values: [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]"
            );
            for (index, expected) in EXPECTED.iter().enumerate() {
                assert_eq!(fib.value(index), Ok(*expected));
            }
            for index in 2..EXPECTED.len() {
                assert_eq!(
                    fib.solution(index),
                    Ok((EXPECTED[index - 2], EXPECTED[index - 1]))
                );
            }
            assert_eq!(fib.maximum_computed_bound(), 11);
            assert_eq!(fib.strategy(), strategy);
        }
    }

    #[test]
    fn test_base_indices_have_values_but_no_solution() {
        let fib = Fibonacci::bottom_up(5).unwrap();
        assert_eq!(fib.value(0), Ok(0));
        assert_eq!(fib.value(1), Ok(1));
        assert_eq!(
            fib.solution(1),
            Err(RangeError::BelowMinimum {
                point: 1,
                minimum: 2
            })
        );
        assert!(fib.solution(0).is_err());
    }

    #[test]
    fn test_bound_edges() {
        let fib = Fibonacci::top_down(10).unwrap();
        assert_eq!(fib.value(10), Ok(55));
        assert_eq!(fib.solution(10), Ok((21, 34)));
        assert_eq!(
            fib.value(11),
            Err(RangeError::AboveBound {
                point: 11,
                bound: 10
            })
        );
        assert!(fib.solution(11).is_err());
        // Failed calls leave the solver usable
        assert_eq!(fib.value(10), Ok(55));
    }

    #[test]
    fn test_bound_below_two_is_rejected() {
        for bound in [0, 1] {
            for strategy in [Strategy::BottomUp, Strategy::TopDown] {
                assert_eq!(
                    Fibonacci::new(bound, strategy).unwrap_err(),
                    ConstructionError::BoundTooSmall { bound, minimum: 2 }
                );
            }
        }
    }

    #[test]
    fn test_largest_representable_index() {
        assert_eq!(fibonacci_bottom_up(93), Ok(12_200_160_415_121_876_738));
        assert_eq!(fibonacci_memoized(93), Ok(12_200_160_415_121_876_738));
        assert!(Fibonacci::top_down(93).is_ok());
        assert!(matches!(
            fibonacci_bottom_up(94),
            Err(ConstructionError::Overflow(_))
        ));
        assert!(matches!(
            Fibonacci::bottom_up(94),
            Err(ConstructionError::Overflow(_))
        ));
        assert!(matches!(
            Fibonacci::top_down(100),
            Err(ConstructionError::Overflow(_))
        ));
    }

    #[test]
    fn test_huge_bounds_fail_before_allocating() {
        let overflow = ConstructionError::Overflow("94".to_string());
        for bound in [94, 1 << 40, usize::MAX] {
            assert_eq!(fibonacci_bottom_up(bound), Err(overflow.clone()));
            assert_eq!(fibonacci_memoized(bound), Err(overflow.clone()));
            for strategy in [Strategy::BottomUp, Strategy::TopDown] {
                assert_eq!(Fibonacci::new(bound, strategy).unwrap_err(), overflow);
            }
        }
    }
}
