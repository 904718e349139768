//! PositionGrid - top-down character view of the listener and the event.
//!
//! The listener sits at the grid origin (center cell). World x maps to
//! columns, world z maps to rows (forward is up on screen); y is ignored.
//!
//! The text form of the grid is row-major with `\n` after every row and a
//! trailing NUL, so an encoded buffer is always `(W + 1) * H + 1` bytes.

use crate::grid::Grid;
use crate::types::{Vector3, BLANK_MARK, EVENT_MARK, LISTENER_MARK, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Row/column of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub row: u16,
    pub col: u16,
}

impl CellIndex {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Byte offset of this cell in the encoded buffer of a grid `width` wide.
    ///
    /// Each row occupies `width + 1` bytes because of its line terminator.
    pub fn offset(&self, width: u16) -> usize {
        (self.row as usize) * (width as usize + 1) + self.col as usize
    }
}

/// Fixed-size character grid tracking one event mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionGrid {
    cells: Grid<char>,
    /// Cell holding the event mark from the last update.
    cursor: Option<CellIndex>,
}

impl Default for PositionGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionGrid {
    /// Create a `SCREEN_WIDTH` x `SCREEN_HEIGHT` grid.
    pub fn new() -> Self {
        Self {
            cells: Grid::new(SCREEN_WIDTH, SCREEN_HEIGHT, BLANK_MARK),
            cursor: None,
        }
    }

    /// Create a grid of a custom size.
    ///
    /// Both dimensions must be greater than 2 so the origin is never on the
    /// excluded outer ring.
    pub fn with_size(width: u16, height: u16) -> Option<Self> {
        if width <= 2 || height <= 2 {
            return None;
        }
        Some(Self {
            cells: Grid::new(width, height, BLANK_MARK),
            cursor: None,
        })
    }

    pub fn width(&self) -> u16 {
        self.cells.width()
    }

    pub fn height(&self) -> u16 {
        self.cells.height()
    }

    /// Blank every cell and forget the event mark.
    pub fn initialize(&mut self) {
        self.cells.fill(BLANK_MARK);
        self.cursor = None;
    }

    /// Project a world position onto a cell.
    ///
    /// `row = trunc(H/2 - z)` and `col = trunc(W/2 + x)` with integer halves.
    /// Returns None unless `0 < row < H` and `0 < col < W`: row 0 and col 0
    /// are never drawn, while the last row and column are.
    pub fn project(&self, position: Vector3) -> Option<CellIndex> {
        let width = self.width();
        let height = self.height();

        let row = ((height / 2) as f32 - position.z).trunc();
        let col = ((width / 2) as f32 + position.x).trunc();

        // NaN fails every comparison below.
        if 0.0 < row && row < height as f32 && 0.0 < col && col < width as f32 {
            Some(CellIndex::new(row as u16, col as u16))
        } else {
            None
        }
    }

    /// The listener cell, i.e. the projection of the world origin.
    pub fn origin(&self) -> CellIndex {
        CellIndex::new(self.height() / 2, self.width() / 2)
    }

    /// Redraw the listener and move the event mark to `position`.
    ///
    /// Positions outside the drawable area clear the event mark.
    pub fn update(&mut self, position: Vector3) {
        if let Some(prev) = self.cursor.take() {
            self.cells.set(prev.row, prev.col, BLANK_MARK);
        }

        let origin = self.origin();
        self.cells.set(origin.row, origin.col, LISTENER_MARK);

        if let Some(cell) = self.project(position) {
            self.cells.set(cell.row, cell.col, EVENT_MARK);
            self.cursor = Some(cell);
        }
    }

    /// Cell currently holding the event mark.
    pub fn cursor(&self) -> Option<CellIndex> {
        self.cursor
    }

    pub fn cell(&self, index: CellIndex) -> Option<char> {
        self.cells.get(index.row, index.col).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.rows()
    }

    /// Length of the encoded buffer: `(W + 1) * H + 1`.
    pub fn buffer_len(&self) -> usize {
        (self.width() as usize + 1) * self.height() as usize + 1
    }

    /// Encode the grid into `out` (cleared first): rows terminated by `\n`,
    /// followed by a NUL.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.clear();
        out.reserve(self.buffer_len());
        let mut utf8 = [0u8; 4];
        for row in self.rows() {
            for &ch in row {
                out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
            }
            out.push(b'\n');
        }
        out.push(0);
    }

    /// Convenience helper that allocates the encoded buffer.
    pub fn buffer(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(&mut out);
        out
    }

    /// The grid as a multi-line block (the encoded buffer without its NUL).
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(self.buffer_len());
        for row in self.rows() {
            text.extend(row.iter());
            text.push('\n');
        }
        text
    }
}
