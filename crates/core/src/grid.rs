//! Grid module - bounded 2D cell storage
//!
//! Uses a flat vector in row-major order. Every access goes through
//! [`Grid::index`], so callers never compute offsets themselves.
//! Coordinates: (row, col) where row grows downward and col grows rightward.

/// Fixed-size 2D grid, row-major (`row * width + col`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: u16,
    height: u16,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(width: u16, height: u16, fill: T) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![fill; len],
        }
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Calculate flat index from (row, col).
    /// Returns None if out of bounds.
    #[inline(always)]
    fn index(&self, row: u16, col: u16) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (col as usize))
    }

    /// Get the cell at (row, col), or None if out of bounds.
    pub fn get(&self, row: u16, col: u16) -> Option<&T> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Set the cell at (row, col).
    /// Returns false if out of bounds.
    pub fn set(&mut self, row: u16, col: u16, value: T) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// A single row, or None if out of bounds.
    pub fn row(&self, row: u16) -> Option<&[T]> {
        if row >= self.height {
            return None;
        }
        let start = (row as usize) * (self.width as usize);
        Some(&self.cells[start..start + self.width as usize])
    }

    /// All rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // A zero-width grid has no cells, so the chunk size only has to be non-zero.
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }
}
