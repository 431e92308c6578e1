//! Core solver trait and related types

use std::fmt;

use crate::error::{ConstructionError, RangeError};

/// How a solver fills its tables.
///
/// Both strategies compute identical values and back-pointers for every point
/// they both cover. They differ in which points they cover:
///
/// - [`Strategy::BottomUp`] fills every key from 0 up to the bound
/// - [`Strategy::TopDown`] resolves only the keys reachable from the bound
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Iterative fill in increasing key order
    #[default]
    BottomUp,
    /// Memoized, query-driven resolution from the bound downwards
    TopDown,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BottomUp => f.write_str("bottom-up"),
            Strategy::TopDown => f.write_str("top-down"),
        }
    }
}

/// Read-only access to a constructed solver.
///
/// A solver computes all of its tables during construction. Accessors never
/// mutate, so calling them repeatedly with the same point yields the same
/// result, and a failed call leaves the solver fully usable.
///
/// `Display` renders the internal tables for diagnostics; the format is not
/// stable.
///
/// # Example
///
/// ```
/// use dp_solver::{RodCutting, Solver, Strategy};
///
/// let prices = [0, 1, 3, 3, 3, 7, 8, 0, 14];
/// let rod = RodCutting::new(&prices, 8, Strategy::BottomUp).unwrap();
///
/// assert_eq!(rod.value(5), Ok(7));
/// assert_eq!(rod.solution(5), Ok(vec![1, 2, 2]));
/// assert!(rod.value(9).is_err());
/// ```
pub trait Solver: fmt::Display {
    /// Descriptor of the choices that realise an optimum
    type Solution;

    /// The optimum at `point`.
    fn value(&self, point: usize) -> Result<u64, RangeError>;

    /// The choices that realise [`Solver::value`] at `point`.
    fn solution(&self, point: usize) -> Result<Self::Solution, RangeError>;

    /// The largest point the tables were built for.
    fn maximum_computed_bound(&self) -> usize;

    /// The strategy the tables were built with.
    fn strategy(&self) -> Strategy;

    /// Whether `value(point)` would succeed.
    fn is_valid_point(&self, point: usize) -> bool {
        self.value(point).is_ok()
    }
}

/// A computed table cell together with the decision that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<C> {
    pub value: u64,
    pub choice: C,
}

impl<C> Entry<C> {
    pub fn new(value: u64, choice: C) -> Self {
        Self { value, choice }
    }
}

/// Fails with [`RangeError::AboveBound`] when `point > bound`.
pub(crate) fn check_bound(point: usize, bound: usize) -> Result<(), RangeError> {
    if point > bound {
        Err(RangeError::AboveBound { point, bound })
    } else {
        Ok(())
    }
}

/// Adds two optima, reporting the sub-problem key on overflow.
pub(crate) fn checked_sum(
    lhs: u64,
    rhs: u64,
    key: impl fmt::Debug,
) -> Result<u64, ConstructionError> {
    lhs.checked_add(rhs)
        .ok_or_else(|| ConstructionError::Overflow(format!("{key:?}")))
}
