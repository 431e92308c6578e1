//! Memoization engine for top-down dynamic programming
//!
//! This module resolves recurrences whose keys form a directed acyclic graph.
//! A [`Subproblem`] names the dependencies of each key and combines their
//! values; a [`Backend`] stores one tri-state [`Cell`] per key; [`Memo`] drives
//! resolution so each reachable key is computed exactly once.
//!
//! # Backend Types
//!
//! - [`VecBackend`]: Dense `usize` keys `0..len`
//! - [`Vec2DBackend`]: Dense `(row, col)` keys for grid-shaped tables
//!
//! Both backends are sized when created. The same backends double as the
//! tables of the bottom-up solvers, which write cells directly with
//! [`Backend::insert`].
//!
//! # Cycles
//!
//! A dependency cycle is a defect in the recurrence. [`Memo::resolve`] detects
//! it when it reaches a cell still marked [`Cell::Computing`] and panics.
//!
//! # Example
//!
//! ```rust
//! use dp_solver::memo::{Backend, MemoBuilder, Subproblem, Vec2DBackend};
//! use std::convert::Infallible;
//!
//! struct GridPaths;
//!
//! impl Subproblem<(usize, usize), u64> for GridPaths {
//!     type Error = Infallible;
//!
//!     fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
//!         match *pos {
//!             (0, _) | (_, 0) => vec![],
//!             (r, c) => vec![(r - 1, c), (r, c - 1)],
//!         }
//!     }
//!
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> Result<u64, Infallible> {
//!         Ok(if deps.is_empty() { 1 } else { deps.iter().sum() })
//!     }
//! }
//!
//! let mut memo = MemoBuilder::new()
//!     .backend(Vec2DBackend::new(5, 5))
//!     .problem(GridPaths)
//!     .build();
//! assert_eq!(memo.resolve((4, 4)), Ok(70));
//! assert!(memo.backend().get(&(2, 2)).is_some());
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, Cell, Vec2DBackend, VecBackend};
pub use cache::{Memo, MemoBuilder};
pub use problem::Subproblem;

#[cfg(test)]
mod tests;
