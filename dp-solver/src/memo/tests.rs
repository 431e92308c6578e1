//! Tests for the memo engine.

use std::cell::Cell as CountCell;
use std::convert::Infallible;
use std::rc::Rc;

use super::*;

/// Two-term recurrence used across the tests
struct Fibonacci;

impl Subproblem<usize, u64> for Fibonacci {
    type Error = Infallible;

    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 {
            vec![]
        } else {
            vec![n - 2, n - 1]
        }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> Result<u64, Infallible> {
        Ok(if *n <= 1 { *n as u64 } else { deps[0] + deps[1] })
    }
}

/// Fibonacci that counts how often `compute` runs
struct CountingFibonacci {
    count: Rc<CountCell<usize>>,
}

impl Subproblem<usize, u64> for CountingFibonacci {
    type Error = Infallible;

    fn deps(&self, n: &usize) -> Vec<usize> {
        Fibonacci.deps(n)
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> Result<u64, Infallible> {
        self.count.set(self.count.get() + 1);
        Fibonacci.compute(n, deps)
    }
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let mut memo = MemoBuilder::new()
        .backend(VecBackend::new(21))
        .problem(Fibonacci)
        .build();

    assert_eq!(memo.resolve(20), Ok(6765));
    assert_eq!(memo.get(&10), Some(&55));
    assert_eq!(memo.get(&0), Some(&0));
    assert_eq!(memo.get(&1), Some(&1));
}

#[test]
fn test_each_key_computed_once() {
    let count = Rc::new(CountCell::new(0));
    let mut memo = MemoBuilder::new()
        .backend(VecBackend::new(31))
        .problem(CountingFibonacci {
            count: count.clone(),
        })
        .build();

    assert_eq!(memo.resolve(30), Ok(832_040));
    // Keys 0..=30, one compute each
    assert_eq!(count.get(), 31);

    // Resolving again is a cache hit
    assert_eq!(memo.resolve(30), Ok(832_040));
    assert_eq!(memo.resolve(12), Ok(144));
    assert_eq!(count.get(), 31);
}

#[test]
fn test_diamond_dependency_memoization() {
    // 0 depends on 1 and 2, both depend on 3
    struct Diamond {
        count: Rc<CountCell<usize>>,
    }

    impl Subproblem<usize, i32> for Diamond {
        type Error = Infallible;

        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> Result<i32, Infallible> {
            self.count.set(self.count.get() + 1);
            Ok(match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 10,
            })
        }
    }

    let count = Rc::new(CountCell::new(0));
    let mut memo = MemoBuilder::new()
        .backend(VecBackend::new(4))
        .problem(Diamond {
            count: count.clone(),
        })
        .build();

    assert_eq!(memo.resolve(0), Ok(50));
    assert_eq!(count.get(), 4);
}

#[test]
fn test_only_reachable_cells_are_resolved() {
    let mut memo = MemoBuilder::new()
        .backend(VecBackend::new(50))
        .problem(Fibonacci)
        .build();

    assert_eq!(memo.resolve(10), Ok(55));
    assert!(memo.backend().cell(&10).is_computed());
    assert_eq!(memo.backend().cell(&11), &Cell::Unset);
    assert_eq!(memo.backend().cell(&49), &Cell::Unset);
}

#[test]
fn test_zero_values_are_not_mistaken_for_unset() {
    struct Zeros {
        count: Rc<CountCell<usize>>,
    }

    impl Subproblem<usize, i64> for Zeros {
        type Error = Infallible;

        fn deps(&self, n: &usize) -> Vec<usize> {
            (0..*n).collect()
        }

        fn compute(&self, _n: &usize, _deps: Vec<i64>) -> Result<i64, Infallible> {
            self.count.set(self.count.get() + 1);
            Ok(0)
        }
    }

    let count = Rc::new(CountCell::new(0));
    let mut memo = MemoBuilder::new()
        .backend(VecBackend::new(8))
        .problem(Zeros {
            count: count.clone(),
        })
        .build();

    assert_eq!(memo.resolve(7), Ok(0));
    assert_eq!(count.get(), 8);
}

#[test]
fn test_deep_chain_does_not_overflow_stack() {
    struct Chain;

    impl Subproblem<usize, u64> for Chain {
        type Error = Infallible;

        fn deps(&self, n: &usize) -> Vec<usize> {
            if *n == 0 { vec![] } else { vec![n - 1] }
        }

        fn compute(&self, n: &usize, deps: Vec<u64>) -> Result<u64, Infallible> {
            Ok(if *n == 0 { 0 } else { deps[0] + 1 })
        }
    }

    let depth = 1_000_000;
    let mut memo = MemoBuilder::new()
        .backend(VecBackend::new(depth + 1))
        .problem(Chain)
        .build();

    assert_eq!(memo.resolve(depth), Ok(depth as u64));
}

#[test]
fn test_compute_error_aborts_resolution() {
    struct Capped;

    impl Subproblem<usize, u8> for Capped {
        type Error = usize;

        fn deps(&self, n: &usize) -> Vec<usize> {
            if *n == 0 { vec![] } else { vec![n - 1] }
        }

        fn compute(&self, n: &usize, deps: Vec<u8>) -> Result<u8, usize> {
            match deps.first() {
                None => Ok(250),
                Some(prev) => prev.checked_add(1).ok_or(*n),
            }
        }
    }

    let mut memo = MemoBuilder::new()
        .backend(VecBackend::new(10))
        .problem(Capped)
        .build();

    assert_eq!(memo.resolve(9), Err(6));
    assert_eq!(memo.get(&5), Some(&255));
    assert_eq!(memo.get(&6), None);
}

#[test]
#[should_panic(expected = "dependency cycle")]
fn test_cycle_panics() {
    struct Loop;

    impl Subproblem<usize, u64> for Loop {
        type Error = Infallible;

        fn deps(&self, n: &usize) -> Vec<usize> {
            vec![(n + 1) % 3]
        }

        fn compute(&self, _n: &usize, _deps: Vec<u64>) -> Result<u64, Infallible> {
            Ok(0)
        }
    }

    let mut memo = MemoBuilder::new()
        .backend(VecBackend::new(3))
        .problem(Loop)
        .build();
    let _ = memo.resolve(0);
}

#[test]
fn test_vec2d_backend_grid_paths() {
    struct GridPaths;

    impl Subproblem<(usize, usize), u64> for GridPaths {
        type Error = Infallible;

        fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
            match *pos {
                (0, _) | (_, 0) => vec![],
                (r, c) => vec![(r - 1, c), (r, c - 1)],
            }
        }

        fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> Result<u64, Infallible> {
            Ok(if deps.is_empty() { 1 } else { deps.iter().sum() })
        }
    }

    let mut memo = MemoBuilder::new()
        .backend(Vec2DBackend::new(6, 4))
        .problem(GridPaths)
        .build();

    // C(8, 3) lattice paths to (5, 3)
    assert_eq!(memo.resolve((5, 3)), Ok(56));
    let backend = memo.into_backend();
    assert_eq!(backend.rows(), 6);
    assert_eq!(backend.cols(), 4);
    assert_eq!(
        backend.row(1),
        &[
            Cell::Computed(1),
            Cell::Computed(2),
            Cell::Computed(3),
            Cell::Computed(4)
        ]
    );
}

#[test]
fn test_backend_insert_and_get() {
    let mut backend: VecBackend<i32> = VecBackend::new(6);

    assert_eq!(backend.get(&5), None);
    backend.insert(&5, 42);
    assert_eq!(backend.get(&5), Some(&42));
    assert_eq!(backend.get(&4), None);
    assert_eq!(backend.len(), 6);
}

#[test]
#[should_panic(expected = "computed cell overwritten")]
fn test_backend_rejects_overwrite() {
    let mut backend: Vec2DBackend<i32> = Vec2DBackend::new(2, 2);
    backend.insert(&(1, 1), 1);
    backend.insert(&(1, 1), 2);
}

#[test]
#[should_panic(expected = "outside 2x3 table")]
fn test_vec2d_backend_out_of_bounds() {
    let backend: Vec2DBackend<i32> = Vec2DBackend::new(2, 3);
    let _ = backend.cell(&(0, 3));
}

#[test]
fn test_vec2d_backend_size_overflow() {
    assert!(Vec2DBackend::<i32>::try_new(3, usize::MAX).is_none());
    assert!(Vec2DBackend::<i32>::try_new(usize::MAX, 2).is_none());

    let backend = Vec2DBackend::<i32>::try_new(4, 0).unwrap();
    assert_eq!((backend.rows(), backend.cols()), (4, 0));
}
