//! Error types for the solver library

use thiserror::Error;

/// Error type for rejected solver input
///
/// Construction either returns a fully computed solver or one of these;
/// no partially filled solver is ever handed out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A bound given as a signed number was negative
    #[error("Bound must not be negative, got {0}")]
    NegativeBound(i64),
    /// The bound is below the smallest bound the solver can tabulate
    #[error("Bound {bound} is too small, the minimum is {minimum}")]
    BoundTooSmall { bound: usize, minimum: usize },
    /// Weight and value sequences have different lengths
    #[error("Got {weights} weights but {values} values")]
    LengthMismatch { weights: usize, values: usize },
    /// Not every length up to the requested one has a price
    #[error("Length {length} needs prices for 1..={length}, only {available} entries given")]
    MissingPrices { length: usize, available: usize },
    /// An optimum does not fit in a `u64`
    #[error("Value at {0} overflows u64")]
    Overflow(String),
    /// The dense table for the requested dimensions cannot be addressed
    #[error("A table for {items} items up to capacity {capacity} is too large")]
    TableTooLarge { items: usize, capacity: usize },
}

/// Error type for accessor calls outside the computed range
///
/// Returned by [`Solver::value`](crate::Solver::value) and
/// [`Solver::solution`](crate::Solver::solution). A `RangeError` never changes
/// solver state; later valid calls on the same instance keep working.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A point given as a signed number was negative
    #[error("Point {0} is negative")]
    Negative(i64),
    /// The point lies past the maximum computed bound
    #[error("Point {point} is above the computed bound {bound}")]
    AboveBound { point: usize, bound: usize },
    /// The point is valid for `value` but has no solution to reconstruct
    #[error("Point {point} has no solution, the first reconstructible point is {minimum}")]
    BelowMinimum { point: usize, minimum: usize },
    /// The strategy never resolved this point
    #[error("Point {point} was not computed, only {computed} is valid for a top-down solver")]
    NotComputed { point: usize, computed: usize },
}

/// Error type for solver operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Construction rejected the input
    #[error("Construction error: {0}")]
    Construction(#[from] ConstructionError),
    /// An accessor was called outside the valid range
    #[error("Range error: {0}")]
    Range(#[from] RangeError),
}

/// Converts a signed bound into a table bound.
///
/// # Examples
///
/// ```
/// use dp_solver::{signed_bound, ConstructionError};
///
/// assert_eq!(signed_bound(8), Ok(8));
/// assert_eq!(signed_bound(-1), Err(ConstructionError::NegativeBound(-1)));
/// ```
pub fn signed_bound(bound: i64) -> Result<usize, ConstructionError> {
    usize::try_from(bound).map_err(|_| ConstructionError::NegativeBound(bound))
}

/// Converts a signed query point into a table point.
pub fn signed_point(point: i64) -> Result<usize, RangeError> {
    usize::try_from(point).map_err(|_| RangeError::Negative(point))
}
