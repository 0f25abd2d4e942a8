//! Builds the three positioned panels from the total drawing area.

use ratatui::layout::Rect;
use thiserror::Error;

use super::list::ListPanel;

/// Narrowest panel that still has a one-cell interior between margins.
pub const MIN_PANEL_WIDTH: u16 = 3;
/// Shortest panel with a title row, one item row, bottom rule, and margin.
pub const MIN_PANEL_HEIGHT: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error(
        "drawing area {width}x{height} is too small for three panels \
         (each needs at least {MIN_PANEL_WIDTH}x{MIN_PANEL_HEIGHT})"
    )]
    TooSmall { width: u16, height: u16 },
}

/// The three logical panels, in left-to-right layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    PreviousDirectory,
    CurrentDirectory,
    Tags,
}

impl PanelKind {
    pub const ALL: [PanelKind; 3] = [
        PanelKind::PreviousDirectory,
        PanelKind::CurrentDirectory,
        PanelKind::Tags,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PanelKind::PreviousDirectory => "Previous Directory",
            PanelKind::CurrentDirectory => "Current Directory",
            PanelKind::Tags => "Tags",
        }
    }

    pub fn slot(self) -> usize {
        match self {
            PanelKind::PreviousDirectory => 0,
            PanelKind::CurrentDirectory => 1,
            PanelKind::Tags => 2,
        }
    }
}

/// Splits `total` into three side-by-side columns of rounded-third width.
/// The last column's right edge clamps to the total width, so odd widths
/// shrink the rightmost panel instead of overshooting. Fails when any
/// column lands below the minimum panel size.
pub fn split_panels(total: Rect) -> Result<[Rect; 3], LayoutError> {
    let third = ((u32::from(total.width) + 1) / 3) as u16;
    let mut rects = [Rect::default(); 3];
    for (slot, rect) in rects.iter_mut().enumerate() {
        let slot = slot as u16;
        let start = third.saturating_mul(slot);
        let end = third.saturating_mul(slot + 1).min(total.width);
        *rect = Rect::new(
            total.x.saturating_add(start),
            total.y,
            end.saturating_sub(start),
            total.height,
        );
    }
    let fits = rects
        .iter()
        .all(|r| r.width >= MIN_PANEL_WIDTH && r.height >= MIN_PANEL_HEIGHT);
    if !fits {
        return Err(LayoutError::TooSmall {
            width: total.width,
            height: total.height,
        });
    }
    Ok(rects)
}

/// Builds one panel positioned in its layout slot.
pub fn make_panel(kind: PanelKind, total: Rect) -> Result<ListPanel, LayoutError> {
    let rects = split_panels(total)?;
    Ok(ListPanel::new(rects[kind.slot()], kind.title()))
}
