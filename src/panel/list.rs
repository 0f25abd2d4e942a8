//! Scrollable list panel: an ordered item list behind a fixed-height
//! viewport with a movable cursor.
//!
//! The viewport owns three indices: `first_visible`, `last_visible`
//! (exclusive), and `cursor`. Every structural change (new items, cursor
//! move, resize) goes through [`ListPanel::recompute_viewport`] so the
//! indices are never stale: the cursor stays clamped to the list, the
//! window follows the cursor, and a list that fits entirely snaps the
//! window back to the top.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use super::{Panel, PanelBase};
use crate::ui::surface::{fit_to_width, Surface};
use crate::ui::theme;

const ARROW_UP: char = '↑';
const ARROW_DOWN: char = '↓';

#[derive(Debug)]
pub struct ListPanel {
    base: PanelBase,
    items: Vec<String>,
    first_visible: usize,
    last_visible: usize,
    cursor: usize,
    accent: Color,
}

impl ListPanel {
    pub fn new(area: Rect, title: impl Into<String>) -> Self {
        Self {
            base: PanelBase::new(area, title),
            items: Vec::new(),
            first_visible: 0,
            last_visible: 0,
            cursor: 0,
            accent: theme::accent(),
        }
    }

    pub fn set_accent(&mut self, accent: Color) {
        self.accent = accent;
    }

    /// Rows available for items: the panel height minus the title row,
    /// the bottom rule, and the margin row below it.
    pub fn viewport_height(&self) -> usize {
        usize::from(self.base.surface().height().saturating_sub(3))
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    pub fn last_visible(&self) -> usize {
        self.last_visible
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selected item, or `None` when the list is empty.
    pub fn current_item(&self) -> Option<&str> {
        self.items.get(self.cursor).map(String::as_str)
    }

    pub fn current_item_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.cursor)
    }

    /// Replaces the whole list. The cursor keeps its position where
    /// possible and is clamped to the new length otherwise.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.recompute_viewport();
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
        self.recompute_viewport();
    }

    pub fn clear_items(&mut self) {
        self.set_items(Vec::new());
    }

    /// Moves the cursor by `delta`, clamped to the list bounds. If the
    /// cursor would leave the visible window, the window slides just far
    /// enough to keep it on screen.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() as isize - 1;
        let next = (self.cursor as isize).saturating_add(delta).clamp(0, last);
        self.cursor = next as usize;
        self.recompute_viewport();
    }

    fn recompute_viewport(&mut self) {
        let len = self.items.len();
        let vh = self.viewport_height();
        if len == 0 {
            self.cursor = 0;
            self.first_visible = 0;
            self.last_visible = 0;
            return;
        }
        self.cursor = self.cursor.min(len - 1);
        if len < vh {
            self.first_visible = 0;
        }
        if vh == 0 {
            self.first_visible = self.cursor;
        } else if self.cursor < self.first_visible {
            self.first_visible = self.cursor;
        } else if self.cursor >= self.first_visible + vh {
            self.first_visible = self.cursor + 1 - vh;
        }
        self.last_visible = len.min(self.first_visible + vh);
    }

    fn draw_items(&mut self, focused: bool) {
        let interior = usize::from(self.base.surface().width().saturating_sub(2));
        if interior == 0 {
            return;
        }
        for (row, idx) in (self.first_visible..self.last_visible).enumerate() {
            let style = if idx == self.cursor {
                theme::cursor_style(focused, self.accent)
            } else {
                Style::default()
            };
            let text = fit_to_width(&self.items[idx], interior);
            self.base
                .surface_mut()
                .set_string(1, 1 + row as u16, &text, style);
        }
    }

    /// Item rows never touch the margin columns, but indicator glyphs
    /// from earlier renders do; wipe them before drawing fresh ones.
    fn clear_side_margins(&mut self) {
        let surface = self.base.surface_mut();
        let h = surface.height();
        let w = surface.width();
        if h < 4 || w == 0 {
            return;
        }
        surface.v_line(0, 1, h - 3, ' ', Style::default());
        surface.v_line(w - 1, 1, h - 3, ' ', Style::default());
    }

    fn draw_scroll_indicators(&mut self) {
        let h = self.base.surface().height();
        let w = self.base.surface().width();
        if h < 4 || w == 0 {
            return;
        }
        let style = Style::default();
        if self.first_visible > 0 {
            self.base.surface_mut().set_char(0, 1, ARROW_UP, style);
            self.base.surface_mut().set_char(w - 1, 1, ARROW_UP, style);
        }
        if self.last_visible < self.items.len() {
            self.base.surface_mut().set_char(0, h - 3, ARROW_DOWN, style);
            self.base.surface_mut().set_char(w - 1, h - 3, ARROW_DOWN, style);
        }
    }
}

impl Panel for ListPanel {
    fn render(&mut self, focused: bool) {
        self.base.clear_interior();
        self.base.draw_title_line();
        self.base.draw_title();
        self.draw_items(focused);
        self.clear_side_margins();
        self.draw_scroll_indicators();
        self.base.draw_bottom_line();
    }

    fn resize(&mut self, area: Rect) {
        self.base.rebuild(area);
        self.recompute_viewport();
    }

    fn title(&self) -> &str {
        self.base.title()
    }

    fn surface(&self) -> &Surface {
        self.base.surface()
    }
}
