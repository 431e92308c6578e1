//! Top-down resolution over a backend.

use super::backend::{Backend, Cell};
use super::problem::Subproblem;

/// A memoizing resolver for a [`Subproblem`] stored in a [`Backend`].
///
/// Each key is computed at most once. A key that is already computed is
/// returned before its dependencies are even listed, so resolving a root
/// costs one `compute` call per reachable key.
///
/// Resolution walks an explicit work stack instead of recursing, so deep
/// dependency chains are bounded by heap memory rather than call depth.
///
/// # Panics
///
/// Resolving a key whose dependencies lead back to itself panics; the
/// dependency graph must be acyclic.
pub struct Memo<B, P> {
    backend: B,
    problem: P,
}

enum Frame<I> {
    Enter(I),
    Exit(I, Vec<I>),
}

impl<B, P> Memo<B, P>
where
    B: Backend,
    P: Subproblem<B::Index, B::Value>,
{
    /// Creates a new Memo over the given backend and problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self { backend, problem }
    }

    /// Resolves `root` and every key it transitively depends on.
    ///
    /// Returns the value stored for `root`. An error from
    /// [`Subproblem::compute`] aborts resolution and leaves the remaining
    /// cells unset.
    pub fn resolve(&mut self, root: B::Index) -> Result<B::Value, P::Error> {
        let mut stack = vec![Frame::Enter(root.clone())];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(index) => {
                    match self.backend.cell(&index) {
                        Cell::Computed(_) => continue,
                        Cell::Computing => panic!("dependency cycle in sub-problem graph"),
                        Cell::Unset => {}
                    }
                    self.backend.begin(&index);
                    let deps = self.problem.deps(&index);
                    let pending: Vec<B::Index> = deps
                        .iter()
                        .filter(|dep| !self.backend.cell(dep).is_computed())
                        .cloned()
                        .collect();
                    stack.push(Frame::Exit(index, deps));
                    // Reverse so the first dependency is resolved first
                    stack.extend(pending.into_iter().rev().map(Frame::Enter));
                }
                Frame::Exit(index, deps) => {
                    let values = deps
                        .iter()
                        .map(|dep| {
                            self.backend
                                .get(dep)
                                .cloned()
                                .expect("dependency resolved before its dependent")
                        })
                        .collect();
                    let value = self.problem.compute(&index, values)?;
                    self.backend.insert(&index, value);
                }
            }
        }

        Ok(self
            .backend
            .get(&root)
            .cloned()
            .expect("root resolved once the stack drains"))
    }

    /// Returns the value at `index` if it has been resolved.
    pub fn get(&self, index: &B::Index) -> Option<&B::Value> {
        self.backend.get(index)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Consumes the memo, returning the filled backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

/// Builder for [`Memo`].
///
/// ```rust
/// use dp_solver::memo::{MemoBuilder, Subproblem, VecBackend};
/// use std::convert::Infallible;
///
/// struct Steps;
///
/// impl Subproblem<usize, u64> for Steps {
///     type Error = Infallible;
///
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         match *n {
///             0 | 1 => vec![],
///             n => vec![n - 1, n - 2],
///         }
///     }
///
///     fn compute(&self, _n: &usize, deps: Vec<u64>) -> Result<u64, Infallible> {
///         Ok(if deps.is_empty() { 1 } else { deps[0] + deps[1] })
///     }
/// }
///
/// let mut memo = MemoBuilder::new()
///     .backend(VecBackend::new(11))
///     .problem(Steps)
///     .build();
/// assert_eq!(memo.resolve(10), Ok(89));
/// ```
pub struct MemoBuilder<B, P> {
    backend: B,
    problem: P,
}

impl MemoBuilder<(), ()> {
    pub fn new() -> Self {
        Self {
            backend: (),
            problem: (),
        }
    }
}

impl Default for MemoBuilder<(), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> MemoBuilder<(), P> {
    /// Sets the storage backend.
    pub fn backend<B: Backend>(self, backend: B) -> MemoBuilder<B, P> {
        MemoBuilder {
            backend,
            problem: self.problem,
        }
    }
}

impl<B> MemoBuilder<B, ()> {
    /// Sets the recurrence to resolve.
    pub fn problem<P>(self, problem: P) -> MemoBuilder<B, P> {
        MemoBuilder {
            backend: self.backend,
            problem,
        }
    }
}

impl<B, P> MemoBuilder<B, P>
where
    B: Backend,
    P: Subproblem<B::Index, B::Value>,
{
    pub fn build(self) -> Memo<B, P> {
        Memo::with_problem(self.backend, self.problem)
    }
}
