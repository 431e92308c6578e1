//! Interval solver in the rod-cutting shape.
//!
//! A rod of whole-number length is cut into integer-length pieces, each piece
//! length `n` selling for `prices[n]`. Piece lengths may repeat and order does
//! not matter. For every length up to the bound the solver records the best
//! total price and the length of the first piece to cut; following those
//! first cuts rebuilds the full set of pieces.
//!
//! Ties between cuts go to the shortest first piece: candidates are scanned in
//! increasing cut order and only a strictly better total replaces the current
//! best. Both strategies share that scan, so they pick identical cuts.

use std::fmt;

use crate::error::{ConstructionError, RangeError};
use crate::memo::{Backend, MemoBuilder, Subproblem, VecBackend};
use crate::solver::{Entry, Solver, Strategy, check_bound, checked_sum};

/// Best total price for a rod of `length`, computed iteratively.
///
/// `prices[n]` is the price of a piece of length `n`; `prices[0]` is ignored.
pub fn cut_rod_bottom_up(prices: &[u64], length: usize) -> Result<u64, ConstructionError> {
    check_prices(prices, length)?;
    let table = RodCutting::fill_bottom_up(prices, length)?;
    Ok(table[length].value)
}

/// Best total price for a rod of `length`, computed top-down with memoization.
pub fn cut_rod_memoized(prices: &[u64], length: usize) -> Result<u64, ConstructionError> {
    check_prices(prices, length)?;
    MemoBuilder::new()
        .backend(VecBackend::new(length + 1))
        .problem(Recurrence { prices })
        .build()
        .resolve(length)
        .map(|entry| entry.value)
}

fn check_prices(prices: &[u64], length: usize) -> Result<(), ConstructionError> {
    if length > 0 && prices.len() <= length {
        return Err(ConstructionError::MissingPrices {
            length,
            available: prices.len(),
        });
    }
    Ok(())
}

/// Picks the best first cut for a rod of `length`.
///
/// `remainder(rest)` yields the optimum already known for the shorter rod
/// left after the cut. Length 0 is the base case: value 0, no cut.
fn best_cut(
    prices: &[u64],
    length: usize,
    remainder: impl Fn(usize) -> u64,
) -> Result<Entry<usize>, ConstructionError> {
    let mut best = Entry::new(0, 0);
    for cut in 1..=length {
        let candidate = checked_sum(prices[cut], remainder(length - cut), length)?;
        if cut == 1 || candidate > best.value {
            best = Entry::new(candidate, cut);
        }
    }
    Ok(best)
}

struct Recurrence<'a> {
    prices: &'a [u64],
}

impl Subproblem<usize, Entry<usize>> for Recurrence<'_> {
    type Error = ConstructionError;

    /// The rods left over after each cut `1..=length`, in cut order
    fn deps(&self, length: &usize) -> Vec<usize> {
        (1..=*length).map(|cut| length - cut).collect()
    }

    fn compute(
        &self,
        length: &usize,
        deps: Vec<Entry<usize>>,
    ) -> Result<Entry<usize>, ConstructionError> {
        best_cut(self.prices, *length, |rest| deps[length - rest - 1].value)
    }
}

/// Tabulated rod-cutting optima for every length up to a bound.
///
/// # Example
///
/// ```
/// use dp_solver::{RodCutting, Solver, Strategy};
///
/// let prices = [0, 1, 3, 3, 3, 7, 8, 0, 14, 15, 18, 22, 38];
/// let rod = RodCutting::new(&prices, 12, Strategy::TopDown).unwrap();
///
/// assert_eq!(rod.value(8), Ok(14));
/// assert_eq!(rod.solution(8), Ok(vec![8]));
/// assert_eq!(rod.solution(7), Ok(vec![1, 2, 2, 2]));
/// ```
#[derive(Debug, Clone)]
pub struct RodCutting {
    prices: Vec<u64>,
    table: Vec<Entry<usize>>,
    strategy: Strategy,
}

impl RodCutting {
    /// Tabulates every length in `0..=length`.
    ///
    /// `prices[n]` is the price of a piece of length `n` and must exist for
    /// every `n` in `1..=length`; `prices[0]` is ignored.
    pub fn new(
        prices: &[u64],
        length: usize,
        strategy: Strategy,
    ) -> Result<Self, ConstructionError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("rod_cutting", length, %strategy).entered();

        check_prices(prices, length)?;
        let table = match strategy {
            Strategy::BottomUp => Self::fill_bottom_up(prices, length)?,
            Strategy::TopDown => Self::fill_top_down(prices, length)?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(cells = table.len(), "table filled");

        Ok(Self {
            prices: prices.to_vec(),
            table,
            strategy,
        })
    }

    pub fn bottom_up(prices: &[u64], length: usize) -> Result<Self, ConstructionError> {
        Self::new(prices, length, Strategy::BottomUp)
    }

    pub fn top_down(prices: &[u64], length: usize) -> Result<Self, ConstructionError> {
        Self::new(prices, length, Strategy::TopDown)
    }

    /// Price list the solver was built from, indexed by piece length
    pub fn prices(&self) -> &[u64] {
        &self.prices
    }

    fn fill_bottom_up(
        prices: &[u64],
        length: usize,
    ) -> Result<Vec<Entry<usize>>, ConstructionError> {
        let mut table: Vec<Entry<usize>> = Vec::with_capacity(length + 1);
        for len in 0..=length {
            let entry = best_cut(prices, len, |rest| table[rest].value)?;
            table.push(entry);
        }
        Ok(table)
    }

    fn fill_top_down(
        prices: &[u64],
        length: usize,
    ) -> Result<Vec<Entry<usize>>, ConstructionError> {
        let mut memo = MemoBuilder::new()
            .backend(VecBackend::new(length + 1))
            .problem(Recurrence { prices })
            .build();
        memo.resolve(length)?;

        let backend = memo.into_backend();
        Ok((0..=length)
            .map(|len| {
                *backend
                    .get(&len)
                    .expect("every shorter rod is reachable from the full length")
            })
            .collect())
    }

    fn bound(&self) -> usize {
        self.table.len() - 1
    }
}

impl Solver for RodCutting {
    /// Piece lengths, first cut first
    type Solution = Vec<usize>;

    fn value(&self, length: usize) -> Result<u64, RangeError> {
        check_bound(length, self.bound())?;
        Ok(self.table[length].value)
    }

    fn solution(&self, length: usize) -> Result<Vec<usize>, RangeError> {
        check_bound(length, self.bound())?;
        let mut cuts = Vec::new();
        let mut remaining = length;
        while remaining > 0 {
            let cut = self.table[remaining].choice;
            cuts.push(cut);
            remaining -= cut;
        }
        Ok(cuts)
    }

    fn maximum_computed_bound(&self) -> usize {
        self.bound()
    }

    fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl fmt::Display for RodCutting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<u64> = self.table.iter().map(|entry| entry.value).collect();
        let cuts: Vec<usize> = self.table.iter().map(|entry| entry.choice).collect();
        writeln!(f, "values: {values:?}")?;
        write!(f, "solutions: {cuts:?}")
    }
}
