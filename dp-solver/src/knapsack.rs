//! Two-dimensional selection solver in the 0/1 knapsack shape.
//!
//! Given items with a weight and a value, cell `(k, c)` holds the best total
//! value obtainable from the first `k` items without exceeding capacity `c`,
//! using each item at most once, together with the [`Decision`] that produced
//! it. Walking those decisions back from `(item_count, c)` yields the chosen
//! items.
//!
//! When excluding item `k` is worth at least as much as including it, the
//! cell records [`Decision::Exclude`]. That tie-break is part of the contract:
//! both strategies apply it, so they reconstruct the same selection.

use std::fmt;

use crate::error::{ConstructionError, RangeError};
use crate::memo::{Backend, Cell, MemoBuilder, Subproblem, Vec2DBackend};
use crate::solver::{Entry, Solver, Strategy, check_bound, checked_sum};

/// A selectable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub weight: usize,
    pub value: u64,
}

impl Item {
    pub fn new(weight: usize, value: u64) -> Self {
        Self { weight, value }
    }
}

impl From<(usize, u64)> for Item {
    fn from((weight, value): (usize, u64)) -> Self {
        Self { weight, value }
    }
}

impl From<Item> for (usize, u64) {
    fn from(item: Item) -> Self {
        (item.weight, item.value)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.weight, self.value)
    }
}

/// Back-pointer stored with every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Base case: no items or no capacity left
    Edge,
    /// The optimum comes from the same capacity with one item fewer
    Exclude,
    /// The current item is selected; continue with one item fewer and its
    /// weight removed from the capacity
    Include,
}

impl Decision {
    fn symbol(self) -> char {
        match self {
            Decision::Edge => 'E',
            Decision::Exclude => 'X',
            Decision::Include => 'I',
        }
    }
}

/// Best total value for `capacity`, filling the whole table iteratively.
pub fn knapsack_bottom_up(
    weights: &[usize],
    values: &[u64],
    capacity: usize,
) -> Result<u64, ConstructionError> {
    let items = zip_items(weights, values)?;
    let table = Knapsack::fill_bottom_up(&items, capacity)?;
    Ok(entry_at(&table, (items.len(), capacity)).value)
}

/// Best total value for `capacity`, resolving only the cells it depends on.
pub fn knapsack_memoized(
    weights: &[usize],
    values: &[u64],
    capacity: usize,
) -> Result<u64, ConstructionError> {
    let items = zip_items(weights, values)?;
    let table = Knapsack::fill_top_down(&items, capacity)?;
    Ok(entry_at(&table, (items.len(), capacity)).value)
}

fn zip_items(weights: &[usize], values: &[u64]) -> Result<Vec<Item>, ConstructionError> {
    if weights.len() != values.len() {
        return Err(ConstructionError::LengthMismatch {
            weights: weights.len(),
            values: values.len(),
        });
    }
    Ok(weights
        .iter()
        .zip(values)
        .map(|(&weight, &value)| Item::new(weight, value))
        .collect())
}

/// One row per item count and one column per capacity, all unset
fn empty_table(
    items: &[Item],
    capacity: usize,
) -> Result<Vec2DBackend<Entry<Decision>>, ConstructionError> {
    capacity
        .checked_add(1)
        .and_then(|cols| Vec2DBackend::try_new(items.len() + 1, cols))
        .ok_or(ConstructionError::TableTooLarge {
            items: items.len(),
            capacity,
        })
}

fn entry_at(table: &Vec2DBackend<Entry<Decision>>, key: (usize, usize)) -> Entry<Decision> {
    *table
        .get(&key)
        .expect("only resolved cells are read back")
}

/// Chooses between leaving `item` out and putting it in.
///
/// `excluded` is the optimum without the item; `rest` is the optimum for the
/// capacity left after adding it, or `None` when the item does not fit.
fn decide(
    item: &Item,
    key: (usize, usize),
    excluded: u64,
    rest: Option<u64>,
) -> Result<Entry<Decision>, ConstructionError> {
    let Some(rest) = rest else {
        return Ok(Entry::new(excluded, Decision::Exclude));
    };
    let included = checked_sum(item.value, rest, key)?;
    if excluded >= included {
        Ok(Entry::new(excluded, Decision::Exclude))
    } else {
        Ok(Entry::new(included, Decision::Include))
    }
}

struct Recurrence<'a> {
    items: &'a [Item],
}

impl Subproblem<(usize, usize), Entry<Decision>> for Recurrence<'_> {
    type Error = ConstructionError;

    fn deps(&self, &(k, c): &(usize, usize)) -> Vec<(usize, usize)> {
        if k == 0 || c == 0 {
            return vec![];
        }
        let weight = self.items[k - 1].weight;
        if weight > c {
            vec![(k - 1, c)]
        } else {
            vec![(k - 1, c), (k - 1, c - weight)]
        }
    }

    fn compute(
        &self,
        &(k, c): &(usize, usize),
        deps: Vec<Entry<Decision>>,
    ) -> Result<Entry<Decision>, ConstructionError> {
        if k == 0 || c == 0 {
            return Ok(Entry::new(0, Decision::Edge));
        }
        let rest = deps.get(1).map(|entry| entry.value);
        decide(&self.items[k - 1], (k, c), deps[0].value, rest)
    }
}

/// Tabulated 0/1 knapsack optima with reconstruction.
///
/// # Strategy-dependent validity
///
/// A bottom-up solver fills every `(k, c)` cell, so any capacity up to the
/// constructed one can be queried afterwards. A top-down solver resolves only
/// the cells reachable from the constructed capacity, and querying any other
/// capacity fails with [`RangeError::NotComputed`] (or
/// [`RangeError::AboveBound`] past it). Build bottom-up when one solver must
/// answer several capacities.
///
/// # Example
///
/// ```
/// use dp_solver::{Item, Knapsack, Solver, Strategy};
///
/// let knapsack = Knapsack::new(&[1, 2, 4, 4], &[3, 6, 3, 5], 7, Strategy::BottomUp).unwrap();
///
/// assert_eq!(knapsack.value(5), Ok(9));
/// assert_eq!(
///     knapsack.solution(5),
///     Ok(vec![Item::new(2, 6), Item::new(1, 3)])
/// );
/// assert_eq!(knapsack.value(7), Ok(14));
/// ```
#[derive(Debug, Clone)]
pub struct Knapsack {
    items: Vec<Item>,
    table: Vec2DBackend<Entry<Decision>>,
    capacity: usize,
    strategy: Strategy,
}

impl Knapsack {
    /// Builds the table for aligned `weights` and `values` up to `capacity`.
    pub fn new(
        weights: &[usize],
        values: &[u64],
        capacity: usize,
        strategy: Strategy,
    ) -> Result<Self, ConstructionError> {
        let items = zip_items(weights, values)?;
        Self::with_items(items, capacity, strategy)
    }

    /// Builds the table for an item list up to `capacity`.
    pub fn with_items(
        items: Vec<Item>,
        capacity: usize,
        strategy: Strategy,
    ) -> Result<Self, ConstructionError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "knapsack",
            items = items.len(),
            capacity,
            %strategy
        )
        .entered();

        let table = match strategy {
            Strategy::BottomUp => Self::fill_bottom_up(&items, capacity)?,
            Strategy::TopDown => Self::fill_top_down(&items, capacity)?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rows = table.rows(),
            cols = table.cols(),
            "table filled"
        );

        Ok(Self {
            items,
            table,
            capacity,
            strategy,
        })
    }

    pub fn bottom_up(
        weights: &[usize],
        values: &[u64],
        capacity: usize,
    ) -> Result<Self, ConstructionError> {
        Self::new(weights, values, capacity, Strategy::BottomUp)
    }

    pub fn top_down(
        weights: &[usize],
        values: &[u64],
        capacity: usize,
    ) -> Result<Self, ConstructionError> {
        Self::new(weights, values, capacity, Strategy::TopDown)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    fn fill_bottom_up(
        items: &[Item],
        capacity: usize,
    ) -> Result<Vec2DBackend<Entry<Decision>>, ConstructionError> {
        let mut table = empty_table(items, capacity)?;
        for k in 0..=items.len() {
            for c in 0..=capacity {
                let entry = if k == 0 || c == 0 {
                    Entry::new(0, Decision::Edge)
                } else {
                    let item = &items[k - 1];
                    let excluded = entry_at(&table, (k - 1, c)).value;
                    let rest = c
                        .checked_sub(item.weight)
                        .map(|left| entry_at(&table, (k - 1, left)).value);
                    decide(item, (k, c), excluded, rest)?
                };
                table.insert(&(k, c), entry);
            }
        }
        Ok(table)
    }

    fn fill_top_down(
        items: &[Item],
        capacity: usize,
    ) -> Result<Vec2DBackend<Entry<Decision>>, ConstructionError> {
        let mut memo = MemoBuilder::new()
            .backend(empty_table(items, capacity)?)
            .problem(Recurrence { items })
            .build();
        memo.resolve((items.len(), capacity))?;
        Ok(memo.into_backend())
    }

    fn check_capacity(&self, capacity: usize) -> Result<(), RangeError> {
        check_bound(capacity, self.capacity)?;
        if self.strategy == Strategy::TopDown && capacity != self.capacity {
            return Err(RangeError::NotComputed {
                point: capacity,
                computed: self.capacity,
            });
        }
        Ok(())
    }
}

impl Solver for Knapsack {
    /// Selected items, highest original index first
    type Solution = Vec<Item>;

    fn value(&self, capacity: usize) -> Result<u64, RangeError> {
        self.check_capacity(capacity)?;
        Ok(entry_at(&self.table, (self.items.len(), capacity)).value)
    }

    fn solution(&self, capacity: usize) -> Result<Vec<Item>, RangeError> {
        self.check_capacity(capacity)?;

        let mut k = self.items.len();
        let mut remaining = capacity;
        while k > 0 && self.items[k - 1].weight > remaining {
            k -= 1;
        }

        let mut chosen = Vec::new();
        while k > 0 && remaining > 0 {
            match entry_at(&self.table, (k, remaining)).choice {
                Decision::Edge => break,
                Decision::Exclude => k -= 1,
                Decision::Include => {
                    let item = self.items[k - 1];
                    chosen.push(item);
                    k -= 1;
                    remaining -= item.weight;
                }
            }
        }
        Ok(chosen)
    }

    fn maximum_computed_bound(&self) -> usize {
        self.capacity
    }

    fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Knapsack {
    fn render_rows(
        &self,
        f: &mut fmt::Formatter<'_>,
        cell: impl Fn(&Entry<Decision>) -> String,
    ) -> fmt::Result {
        for k in 0..self.table.rows() {
            let row: Vec<String> = self
                .table
                .row(k)
                .iter()
                .map(|c| match c {
                    Cell::Computed(entry) => cell(entry),
                    _ => ".".to_string(),
                })
                .collect();
            writeln!(f, "  [{}]", row.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Knapsack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "values:")?;
        self.render_rows(f, |entry| entry.value.to_string())?;
        writeln!(f, "decisions:")?;
        self.render_rows(f, |entry| entry.choice.symbol().to_string())
    }
}
