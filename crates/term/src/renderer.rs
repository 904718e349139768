//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a size change) is a full redraw;
//! later frames only rewrite runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Tone};

const WINDOW_TITLE: &str = "Event 3D Example";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::SetTitle(WINDOW_TITLE))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a frame, then keep it as the diff base.
    ///
    /// `fb` is swapped with the previous frame, so callers get a buffer back
    /// they can render the next frame into without allocating.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.last.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        match self.last.as_mut() {
            Some(prev) => std::mem::swap(prev, fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode `next` into `out` as crossterm commands.
///
/// Without a previous frame of the same size this clears the screen and
/// writes every cell; otherwise only changed runs are written.
pub fn encode_frame_into(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut tone: Option<Tone> = None;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        for cx in x..x + len {
            let cell = next.get(cx, y).unwrap_or_default();
            if tone != Some(cell.tone) {
                apply_tone_into(out, cell.tone)?;
                tone = Some(cell.tone);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Runs of changed cells as `(x, y, len)`, row by row.
///
/// Without a previous frame every row is one run.
pub fn changed_runs(prev: Option<&FrameBuffer>, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let w = next.width();
    let mut runs = Vec::new();

    for y in 0..next.height() {
        let Some(prev) = prev else {
            if w > 0 {
                runs.push((0, y, w));
            }
            continue;
        };

        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
    }

    runs
}

fn apply_tone_into(out: &mut Vec<u8>, tone: Tone) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(tone_color(tone)))?;
    if matches!(tone, Tone::Header | Tone::Listener | Tone::Event) {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if tone == Tone::Hint {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Plain => Color::Reset,
        Tone::Header => Color::White,
        Tone::Listener => Color::Cyan,
        Tone::Event => Color::Yellow,
        Tone::Hint => Color::Grey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn first_frame_is_full_rows() {
        let fb = FrameBuffer::new(3, 2);
        assert_eq!(changed_runs(None, &fb), vec![(0, 0, 3), (0, 1, 3)]);
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);
        for x in 1..=3 {
            b.set(x, 0, Cell::new('X', Tone::Plain));
        }
        assert_eq!(changed_runs(Some(&a), &b), vec![(1, 0, 3)]);
    }

    #[test]
    fn tone_change_is_a_change() {
        let a = FrameBuffer::new(2, 1);
        let mut b = FrameBuffer::new(2, 1);
        b.set(1, 0, Cell::new(' ', Tone::Event));
        assert_eq!(changed_runs(Some(&a), &b), vec![(1, 0, 1)]);
    }

    #[test]
    fn unchanged_frame_encodes_no_cells() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_str(0, 0, "ab", Tone::Header);
        let mut out = Vec::new();
        encode_frame_into(Some(&fb.clone()), &fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('a'));
    }

    #[test]
    fn size_change_forces_full_redraw() {
        let small = FrameBuffer::new(2, 1);
        let mut big = FrameBuffer::new(3, 1);
        big.put_str(0, 0, "xyz", Tone::Plain);
        let mut out = Vec::new();
        encode_frame_into(Some(&small), &big, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("xyz"));
    }
}
