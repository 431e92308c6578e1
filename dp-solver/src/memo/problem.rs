//! Trait-based sub-problem definition.

/// A recurrence that the memo engine can resolve top-down.
///
/// Implement this trait to describe which sub-problems a key depends on and
/// how its value is derived once those dependencies are known.
///
/// # Type Parameters
///
/// - `I`: Sub-problem key type
/// - `T`: Value stored per key
///
/// # Example
///
/// ```rust
/// use dp_solver::memo::{MemoBuilder, Subproblem, VecBackend};
/// use std::convert::Infallible;
///
/// struct Factorial;
///
/// impl Subproblem<usize, u64> for Factorial {
///     type Error = Infallible;
///
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n == 0 { vec![] } else { vec![n - 1] }
///     }
///
///     fn compute(&self, n: &usize, deps: Vec<u64>) -> Result<u64, Infallible> {
///         Ok(if *n == 0 { 1 } else { (*n as u64) * deps[0] })
///     }
/// }
///
/// let mut memo = MemoBuilder::new()
///     .backend(VecBackend::new(6))
///     .problem(Factorial)
///     .build();
/// assert_eq!(memo.resolve(5), Ok(120));
/// ```
pub trait Subproblem<I, T> {
    /// Error raised when a value cannot be represented
    type Error;

    /// Returns the keys that `index` depends on.
    ///
    /// For base cases, return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Computes the value for `index` from its resolved dependencies.
    ///
    /// `deps` holds one value per key returned by [`Subproblem::deps`], in the
    /// same order.
    fn compute(&self, index: &I, deps: Vec<T>) -> Result<T, Self::Error>;
}
