//! Optimal-Substructure Solvers
//!
//! Dynamic-programming solvers that tabulate an optimum for every sub-problem
//! up to a bound and reconstruct the choices behind any tabulated optimum
//! without solving again.
//!
//! # Overview
//!
//! This library provides:
//! - A [`Solver`] trait shared by every problem shape
//! - Two interchangeable fill strategies, selected with [`Strategy`]
//! - A memoization engine ([`memo`]) with tri-state table cells
//! - Three problem shapes built on top of them
//!
//! | Solver          | Key                     | Back-pointer               |
//! |-----------------|-------------------------|----------------------------|
//! | [`Fibonacci`]   | index                   | the two preceding values   |
//! | [`RodCutting`]  | rod length              | length of the first piece  |
//! | [`Knapsack`]    | (item count, capacity)  | [`Decision`]               |
//!
//! # Quick Example
//!
//! ```
//! use dp_solver::{Knapsack, RodCutting, Solver, Strategy};
//!
//! let prices = [0, 1, 3, 3, 3, 7, 8, 0, 14, 15, 18, 22, 38];
//! let rod = RodCutting::new(&prices, 8, Strategy::BottomUp).unwrap();
//! assert_eq!(rod.value(8), Ok(14));
//! assert_eq!(rod.solution(5), Ok(vec![1, 2, 2]));
//!
//! let knapsack = Knapsack::new(&[1, 2, 4, 4], &[3, 6, 3, 5], 5, Strategy::TopDown).unwrap();
//! assert_eq!(knapsack.value(5), Ok(9));
//! let picked: Vec<(usize, u64)> = knapsack
//!     .solution(5)
//!     .unwrap()
//!     .into_iter()
//!     .map(Into::into)
//!     .collect();
//! assert_eq!(picked, vec![(2, 6), (1, 3)]);
//! ```
//!
//! # Key Concepts
//!
//! ## Strategies
//!
//! [`Strategy::BottomUp`] fills every key from 0 to the bound in order.
//! [`Strategy::TopDown`] resolves the bound through [`memo::Memo`], which
//! visits only the keys the bound depends on. Both agree on every value and
//! every reconstructed solution they both cover. For the sequence and
//! interval solvers that is every key up to the bound; a top-down
//! [`Knapsack`] only covers the capacity it was built for.
//!
//! ## Errors
//!
//! Construction fails with [`ConstructionError`] and never yields a partial
//! solver. Accessors fail with [`RangeError`] outside the computed range and
//! leave the solver untouched. [`SolverError`] wraps both.
//!
//! ## Feature flags
//!
//! - `tracing`: emit a `debug` span per construction and an event once the
//!   table is filled

mod error;
mod fibonacci;
mod knapsack;
pub mod memo;
mod rod_cutting;
mod solver;

// Re-export public API
pub use error::{ConstructionError, RangeError, SolverError, signed_bound, signed_point};
pub use fibonacci::{Fibonacci, fibonacci_bottom_up, fibonacci_memoized};
pub use knapsack::{Decision, Item, Knapsack, knapsack_bottom_up, knapsack_memoized};
pub use rod_cutting::{RodCutting, cut_rod_bottom_up, cut_rod_memoized};
pub use solver::{Entry, Solver, Strategy};
