//! Panel family: shared chrome plus the static and scrollable variants.
//!
//! A panel owns a [`Surface`] for its screen region and never draws outside
//! it. Resizing is a destructive rebuild: the old surface is dropped and a
//! fresh one created at the new rectangle, so callers must not hold on to
//! surface identity across a resize.

pub mod factory;
pub mod list;

use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

use crate::ui::surface::Surface;
use crate::ui::theme;

const TEE_LEFT: char = '├';
const TEE_RIGHT: char = '┤';
const RULE: char = '─';

/// Renderable screen panel. `focused` only affects highlighting; which
/// panel is focused is decided by the engine, not stored here.
pub trait Panel {
    fn render(&mut self, focused: bool);
    fn resize(&mut self, area: Rect);
    fn title(&self) -> &str;
    fn surface(&self) -> &Surface;
}

/// Chrome shared by every panel variant: title row, tee-bordered rules,
/// interior clearing.
#[derive(Debug)]
pub struct PanelBase {
    title: String,
    surface: Surface,
}

impl PanelBase {
    pub fn new(area: Rect, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            surface: Surface::new(area),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Drops the old surface and starts over at the new rectangle.
    pub fn rebuild(&mut self, area: Rect) {
        self.surface = Surface::new(area);
    }

    /// Clears every row except the last one, which stays as a margin
    /// between this panel and whatever sits below it.
    pub fn clear_interior(&mut self) {
        let h = self.surface.height();
        let w = self.surface.width();
        if h < 2 || w == 0 {
            return;
        }
        for y in 0..h - 1 {
            self.surface.h_line(y, 0, w - 1, ' ', Style::default());
        }
    }

    fn draw_rule(&mut self, y: u16) {
        let w = self.surface.width();
        if w == 0 {
            return;
        }
        self.surface.h_line(y, 0, w - 1, RULE, Style::default());
        self.surface.set_char(0, y, TEE_LEFT, Style::default());
        self.surface.set_char(w - 1, y, TEE_RIGHT, Style::default());
    }

    pub fn draw_title_line(&mut self) {
        self.draw_rule(0);
    }

    pub fn draw_bottom_line(&mut self) {
        let y = self.surface.height().saturating_sub(2);
        self.draw_rule(y);
    }

    /// Centers the title on the top rule, blanking one cell of margin on
    /// each side so a shorter title fully covers a longer previous one.
    pub fn draw_title(&mut self) {
        let w = usize::from(self.surface.width());
        if w == 0 {
            return;
        }
        let len = self.title.width();
        let title_x = (w / 2).saturating_sub(len / 2);
        let blank_from = title_x.saturating_sub(1);
        let blank_to = (title_x + len).min(w - 1);
        self.surface.h_line(
            0,
            blank_from as u16,
            blank_to as u16,
            ' ',
            Style::default(),
        );
        self.surface
            .set_string(title_x as u16, 0, &self.title, theme::title_style());
    }
}

/// Title-and-borders panel with no content of its own.
#[derive(Debug)]
pub struct StaticPanel {
    base: PanelBase,
}

impl StaticPanel {
    pub fn new(area: Rect, title: impl Into<String>) -> Self {
        Self {
            base: PanelBase::new(area, title),
        }
    }
}

impl Panel for StaticPanel {
    fn render(&mut self, _focused: bool) {
        self.base.clear_interior();
        self.base.draw_title_line();
        self.base.draw_title();
        self.base.draw_bottom_line();
    }

    fn resize(&mut self, area: Rect) {
        self.base.rebuild(area);
    }

    fn title(&self) -> &str {
        self.base.title()
    }

    fn surface(&self) -> &Surface {
        self.base.surface()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(width: u16, height: u16, title: &str) -> StaticPanel {
        let mut panel = StaticPanel::new(Rect::new(0, 0, width, height), title);
        panel.render(false);
        panel
    }

    #[test]
    fn rules_are_tee_terminated() {
        let panel = rendered(12, 6, "Tags");
        let s = panel.surface();
        assert_eq!(s.cell(0, 0).unwrap().symbol(), "├");
        assert_eq!(s.cell(11, 0).unwrap().symbol(), "┤");
        assert_eq!(s.cell(0, 4).unwrap().symbol(), "├");
        assert_eq!(s.cell(11, 4).unwrap().symbol(), "┤");
        for x in 1..11 {
            assert_eq!(s.cell(x, 4).unwrap().symbol(), "─");
        }
    }

    #[test]
    fn title_is_centered_with_blank_margin() {
        let panel = rendered(12, 6, "Tags");
        let s = panel.surface();
        // centered at (12/2 - 4/2) = 4
        assert_eq!(s.cell(4, 0).unwrap().symbol(), "T");
        assert_eq!(s.cell(7, 0).unwrap().symbol(), "s");
        assert_eq!(s.cell(3, 0).unwrap().symbol(), " ");
        assert_eq!(s.cell(8, 0).unwrap().symbol(), " ");
        assert_eq!(s.cell(2, 0).unwrap().symbol(), "─");
        assert_eq!(s.cell(9, 0).unwrap().symbol(), "─");
    }

    #[test]
    fn bottom_margin_row_is_left_alone() {
        let mut panel = StaticPanel::new(Rect::new(0, 0, 8, 5), "X");
        panel
            .base
            .surface_mut()
            .set_string(0, 4, "keep", Style::default());
        panel.render(false);
        assert_eq!(panel.surface().cell(0, 4).unwrap().symbol(), "k");
        // interior rows were cleared
        assert_eq!(panel.surface().cell(0, 2).unwrap().symbol(), " ");
    }

    #[test]
    fn oversized_title_does_not_panic() {
        let panel = rendered(4, 4, "Previous Directory");
        assert_eq!(panel.surface().area().width, 4);
    }

    #[test]
    fn resize_recreates_the_surface() {
        let mut panel = rendered(10, 5, "Tags");
        panel.resize(Rect::new(2, 0, 6, 4));
        let area = panel.surface().area();
        assert_eq!((area.x, area.width, area.height), (2, 6, 4));
        // fresh surface: old chrome is gone until the next render
        assert_eq!(panel.surface().cell(0, 0).unwrap().symbol(), " ");
    }
}
