//! Storage backends for sub-problem tables.

/// A single table cell.
///
/// Every cell starts out [`Cell::Unset`]. The memo engine marks a cell
/// [`Cell::Computing`] while its dependencies are being resolved and stores
/// the result exactly once as [`Cell::Computed`]. An unset cell can never be
/// mistaken for a legitimate value, including zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cell<T> {
    #[default]
    Unset,
    Computing,
    Computed(T),
}

impl<T> Cell<T> {
    /// Returns the stored value if the cell has been computed.
    pub fn computed(&self) -> Option<&T> {
        match self {
            Cell::Computed(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Cell::Computed(_))
    }
}

/// A dense storage backend for a sub-problem table.
///
/// # Contract
///
/// - Indices are fixed when the backend is created; indexing outside them panics
/// - [`Backend::insert`] is called at most once per index
/// - A computed cell is never reset or overwritten
pub trait Backend {
    /// Sub-problem key type
    type Index: Clone;
    /// Stored value type
    type Value: Clone;

    /// Returns the cell for the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index lies outside the backend's dimensions.
    fn cell(&self, index: &Self::Index) -> &Cell<Self::Value>;

    /// Returns the cell for the given index mutably.
    fn cell_mut(&mut self, index: &Self::Index) -> &mut Cell<Self::Value>;

    /// Returns the computed value at `index`, if any.
    fn get(&self, index: &Self::Index) -> Option<&Self::Value> {
        self.cell(index).computed()
    }

    /// Marks an unset cell as in progress.
    ///
    /// # Panics
    ///
    /// Panics if the cell is not [`Cell::Unset`].
    fn begin(&mut self, index: &Self::Index) {
        let cell = self.cell_mut(index);
        assert!(
            matches!(cell, Cell::Unset),
            "cell entered twice before completing"
        );
        *cell = Cell::Computing;
    }

    /// Stores the value for `index`.
    ///
    /// # Panics
    ///
    /// Panics if the cell already holds a computed value.
    fn insert(&mut self, index: &Self::Index, value: Self::Value) {
        let cell = self.cell_mut(index);
        assert!(!cell.is_computed(), "computed cell overwritten");
        *cell = Cell::Computed(value);
    }
}

/// A Vec-based backend for `usize` indices `0..len`.
#[derive(Debug, Clone)]
pub struct VecBackend<T> {
    data: Vec<Cell<T>>,
}

impl<T> VecBackend<T> {
    /// Creates a backend with `len` unset cells.
    pub fn new(len: usize) -> Self {
        let mut data = Vec::with_capacity(len);
        data.resize_with(len, || Cell::Unset);
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell<T>] {
        &self.data
    }
}

impl<T: Clone> Backend for VecBackend<T> {
    type Index = usize;
    type Value = T;

    fn cell(&self, index: &usize) -> &Cell<T> {
        &self.data[*index]
    }

    fn cell_mut(&mut self, index: &usize) -> &mut Cell<T> {
        &mut self.data[*index]
    }
}

/// A row-major 2D backend for `(row, col)` indices.
///
/// Used for grid-shaped tables where both dimensions are known up front.
#[derive(Debug, Clone)]
pub struct Vec2DBackend<T> {
    data: Vec<Cell<T>>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2DBackend<T> {
    /// Creates a `rows` x `cols` backend with every cell unset.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`; see [`Vec2DBackend::try_new`].
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::try_new(rows, cols).expect("table size overflows usize")
    }

    /// Creates a `rows` x `cols` backend, or `None` when the cell count
    /// overflows `usize`.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        let len = rows.checked_mul(cols)?;
        let mut data = Vec::with_capacity(len);
        data.resize_with(len, || Cell::Unset);
        Some(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cells of one row, in column order.
    pub fn row(&self, row: usize) -> &[Cell<T>] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    fn offset(&self, (row, col): (usize, usize)) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) outside {}x{} table",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl<T: Clone> Backend for Vec2DBackend<T> {
    type Index = (usize, usize);
    type Value = T;

    fn cell(&self, index: &(usize, usize)) -> &Cell<T> {
        &self.data[self.offset(*index)]
    }

    fn cell_mut(&mut self, index: &(usize, usize)) -> &mut Cell<T> {
        let offset = self.offset(*index);
        &mut self.data[offset]
    }
}
