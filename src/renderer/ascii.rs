//! Character-cell renderer for headless runs and logs

use std::fmt;

use super::{Color, Renderer, colors};
use crate::sim::Rect;

/// A downscaled frame where every cell is one character
#[derive(Debug, Clone)]
pub struct AsciiFrame {
    cols: usize,
    rows: usize,
    /// Screen size in pixels that maps onto the grid
    screen: (f32, f32),
    cells: Vec<char>,
}

/// Glyph used for a fill color
fn glyph(color: Color) -> char {
    if color == colors::ACTOR {
        '@'
    } else if color == colors::PLATFORM {
        '#'
    } else if color == colors::BACKGROUND {
        ' '
    } else {
        '+'
    }
}

impl AsciiFrame {
    pub fn new(cols: usize, rows: usize, screen_width: f32, screen_height: f32) -> Self {
        Self {
            cols,
            rows,
            screen: (screen_width, screen_height),
            cells: vec![' '; cols * rows],
        }
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    /// Cell range covered by `[start, end)` pixels along one axis
    fn span(start: f32, end: f32, pixels: f32, cells: usize) -> (usize, usize) {
        let scale = cells as f32 / pixels;
        let lo = (start * scale).floor().clamp(0.0, cells as f32) as usize;
        let hi = (end * scale).ceil().clamp(0.0, cells as f32) as usize;
        (lo, hi)
    }
}

impl Renderer for AsciiFrame {
    fn clear(&mut self, color: Color) {
        self.cells.fill(glyph(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let (c0, c1) = Self::span(rect.left(), rect.right(), self.screen.0, self.cols);
        let (r0, r1) = Self::span(rect.top(), rect.bottom(), self.screen.1, self.rows);
        let ch = glyph(color);
        for row in r0..r1 {
            for col in c0..c1 {
                self.cells[row * self.cols + col] = ch;
            }
        }
    }
}

impl fmt::Display for AsciiFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_maps_to_cells() {
        let mut frame = AsciiFrame::new(10, 5, 100.0, 50.0);
        frame.clear(colors::BACKGROUND);
        frame.fill_rect(Rect::new(20.0, 30.0, 20.0, 20.0), colors::PLATFORM);

        assert_eq!(frame.cell(2, 3), Some('#'));
        assert_eq!(frame.cell(3, 4), Some('#'));
        assert_eq!(frame.cell(1, 3), Some(' '));
        assert_eq!(frame.cell(4, 3), Some(' '));
        assert_eq!(frame.cell(10, 0), None);
    }

    #[test]
    fn test_offscreen_is_clipped() {
        let mut frame = AsciiFrame::new(10, 5, 100.0, 50.0);
        frame.clear(colors::BACKGROUND);
        frame.fill_rect(Rect::new(-500.0, 0.0, 100.0, 50.0), colors::PLATFORM);
        frame.fill_rect(Rect::new(95.0, 40.0, 500.0, 50.0), colors::ACTOR);

        assert_eq!(frame.cell(0, 0), Some(' '));
        assert_eq!(frame.cell(9, 4), Some('@'));
    }

    #[test]
    fn test_display() {
        let mut frame = AsciiFrame::new(4, 2, 4.0, 2.0);
        frame.clear(colors::BACKGROUND);
        frame.fill_rect(Rect::new(0.0, 1.0, 2.0, 1.0), colors::PLATFORM);
        assert_eq!(frame.to_string(), "\n##\n");
    }
}
