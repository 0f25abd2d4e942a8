//! Off-screen drawing surface for panels.
//!
//! Each panel owns a `Surface` sized to its rectangle and draws with local
//! coordinates; the engine composites finished surfaces onto the terminal
//! frame with `blit_into`. All draw calls clip to the surface bounds, so
//! chrome code never has to guard against a rectangle that drifted past the
//! edge of the terminal.

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone)]
pub struct Surface {
    area: Rect,
    buffer: Buffer,
}

impl Surface {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            buffer: Buffer::empty(area),
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn width(&self) -> u16 {
        self.area.width
    }

    pub fn height(&self) -> u16 {
        self.area.height
    }

    /// Resets every cell to the default symbol and style.
    pub fn clear(&mut self) {
        self.buffer.reset();
    }

    fn absolute(&self, x: u16, y: u16) -> Option<(u16, u16)> {
        if x >= self.area.width || y >= self.area.height {
            return None;
        }
        Some((self.area.x.saturating_add(x), self.area.y.saturating_add(y)))
    }

    pub fn set_char(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some((ax, ay)) = self.absolute(x, y) {
            if let Some(cell) = self.buffer.cell_mut((ax, ay)) {
                cell.set_char(ch).set_style(style);
            }
        }
    }

    /// Writes `text` starting at the local position, truncated at the right
    /// edge of the surface.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style) {
        if let Some((ax, ay)) = self.absolute(x, y) {
            let available = usize::from(self.area.width - x);
            self.buffer.set_stringn(ax, ay, text, available, style);
        }
    }

    /// Horizontal run of `ch` across `x0..=x1` on row `y`, clipped.
    pub fn h_line(&mut self, y: u16, x0: u16, x1: u16, ch: char, style: Style) {
        for x in x0..=x1 {
            self.set_char(x, y, ch, style);
        }
    }

    /// Vertical run of `ch` down `y0..=y1` in column `x`, clipped.
    pub fn v_line(&mut self, x: u16, y0: u16, y1: u16, ch: char, style: Style) {
        for y in y0..=y1 {
            self.set_char(x, y, ch, style);
        }
    }

    /// Local-coordinate cell lookup, mainly for inspection in tests.
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        let (ax, ay) = self.absolute(x, y)?;
        self.buffer.cell((ax, ay))
    }

    /// Copies the overlap between this surface and `target` cell by cell.
    pub fn blit_into(&self, target: &mut Buffer) {
        let overlap = self.area.intersection(target.area);
        if overlap.width == 0 || overlap.height == 0 {
            return;
        }
        for y in overlap.y..overlap.bottom() {
            for x in overlap.x..overlap.right() {
                if let (Some(src_cell), Some(dst_cell)) =
                    (self.buffer.cell((x, y)), target.cell_mut((x, y)))
                {
                    *dst_cell = src_cell.clone();
                }
            }
        }
    }
}

/// Truncates `text` to at most `cells` display columns and pads the result
/// with spaces to exactly that width. Wide glyphs count as two columns, so
/// a row written with the result always spans the same number of cells.
pub fn fit_to_width(text: &str, cells: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        if ch.is_control() {
            continue;
        }
        let w = ch.width().unwrap_or(0);
        if used + w > cells {
            break;
        }
        out.push(ch);
        used += w;
    }
    for _ in used..cells {
        out.push(' ');
    }
    out
}
