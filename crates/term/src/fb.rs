//! Framebuffer of toned character cells.
//!
//! Cells carry a [`Tone`] rather than concrete colors; the terminal renderer
//! decides what each tone looks like.

/// What a cell is showing, used to pick its colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Header,
    Listener,
    Event,
    Hint,
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub tone: Tone,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        tone: Tone::Plain,
    };

    pub const fn new(ch: char, tone: Tone) -> Self {
        Self { ch, tone }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// 2D framebuffer, row-major (`y * width + x`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize and blank the framebuffer, keeping the allocation when possible.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize((width as usize) * (height as usize), Cell::BLANK);
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Set a cell; writes outside the buffer are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Write `s` starting at (x, y), clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, tone: Tone) {
        for (cx, ch) in (x..self.width).zip(s.chars()) {
            self.set(cx, y, Cell::new(ch, tone));
        }
    }

    /// The row at `y` as text, for tests and debugging.
    pub fn row_text(&self, y: u16) -> Option<String> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(
            self.cells[start..start + self.width as usize]
                .iter()
                .map(|c| c.ch)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abc", Tone::Hint);
        assert_eq!(fb.row_text(0).as_deref(), Some("  ab"));
        assert_eq!(fb.get(3, 0), Some(Cell::new('b', Tone::Hint)));
    }

    #[test]
    fn writes_outside_are_dropped() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set(2, 0, Cell::new('x', Tone::Plain));
        fb.put_str(0, 5, "xx", Tone::Plain);
        assert!((0..2).all(|y| fb.row_text(y).as_deref() == Some("  ")));
        assert_eq!(fb.get(0, 2), None);
    }

    #[test]
    fn reset_blanks_and_resizes() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(0, 0, "ab", Tone::Header);
        fb.reset(3, 1);
        assert_eq!(fb.width(), 3);
        assert_eq!(fb.height(), 1);
        assert_eq!(fb.row_text(0).as_deref(), Some("   "));
        assert_eq!(fb.row_text(1), None);
    }
}
