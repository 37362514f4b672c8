//! Padding/extent model.
//!
//! Cells that are not instantiated still have to occupy scroll space. The engine does that by
//! growing the container's padding on each axis by one cell step per missing row/column, so the
//! content keeps its full extent while only the window is live.

use crate::window::GridGeometry;
use crate::{Axis, HorizontalAlignment, Padding, Side, Window};

/// Base padding plus the space reserved for rows/columns outside the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectivePadding {
    pub top: u64,
    pub bottom: u64,
    pub left: u64,
    pub right: u64,
}

impl EffectivePadding {
    /// Effective padding with nothing reserved.
    pub fn base(padding: Padding) -> Self {
        Self {
            top: padding.top as u64,
            bottom: padding.bottom as u64,
            left: padding.left as u64,
            right: padding.right as u64,
        }
    }

    /// Derives the effective padding for `window` from scratch.
    ///
    /// `leading = base + first * step`, `trailing = base + (count - last - 1) * step`. With no
    /// window the base padding is returned. Horizontal alignment slack (when the grid is narrower
    /// than the viewport) is added to left/right.
    pub(crate) fn for_window(geometry: &GridGeometry, window: Option<&Window>) -> Self {
        let rows = &geometry.rows;
        let cols = &geometry.cols;
        let mut out = Self {
            top: rows.padding_leading as u64,
            bottom: rows.padding_trailing as u64,
            left: cols.padding_leading as u64,
            right: cols.padding_trailing as u64,
        };

        if let Some(w) = window {
            out.top += w.first_row as u64 * rows.step();
            out.bottom += (rows.count - w.last_row - 1) as u64 * rows.step();
            out.left += w.first_col as u64 * cols.step();
            out.right += (cols.count - w.last_col - 1) as u64 * cols.step();
        }

        let (lead, trail) = alignment_slack(geometry);
        out.left += lead;
        out.right += trail;
        out
    }

    pub fn leading(&self, axis: Axis) -> u64 {
        match axis {
            Axis::Vertical => self.top,
            Axis::Horizontal => self.left,
        }
    }

    pub fn trailing(&self, axis: Axis) -> u64 {
        match axis {
            Axis::Vertical => self.bottom,
            Axis::Horizontal => self.right,
        }
    }

    pub fn edge(&self, side: Side) -> u64 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
            Side::None => 0,
        }
    }

    fn edge_mut(&mut self, side: Side) -> Option<&mut u64> {
        match side {
            Side::Top => Some(&mut self.top),
            Side::Bottom => Some(&mut self.bottom),
            Side::Left => Some(&mut self.left),
            Side::Right => Some(&mut self.right),
            Side::None => None,
        }
    }

    /// Reserves space for `cells` rows/columns that left the window through `side`.
    pub fn reserve(mut self, side: Side, cells: usize, step: u64) -> Self {
        if let Some(edge) = self.edge_mut(side) {
            *edge = edge.saturating_add(cells as u64 * step);
        }
        self
    }

    /// Releases the space of `cells` rows/columns that entered the window through `side`.
    pub fn release(mut self, side: Side, cells: usize, step: u64) -> Self {
        if let Some(edge) = self.edge_mut(side) {
            *edge = edge.saturating_sub(cells as u64 * step);
        }
        self
    }
}

/// Total scrollable content size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentExtent {
    pub width: u64,
    pub height: u64,
}

impl ContentExtent {
    pub(crate) fn of(geometry: &GridGeometry) -> Self {
        Self {
            width: geometry.cols.content_extent(),
            height: geometry.rows.content_extent(),
        }
    }

    pub fn along(&self, axis: Axis) -> u64 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }
}

/// Leftover horizontal space when the grid is narrower than the viewport, split into
/// `(left, right)` according to the alignment.
fn alignment_slack(geometry: &GridGeometry) -> (u64, u64) {
    let cols = &geometry.cols;
    let slack = (cols.viewport as u64).saturating_sub(cols.content_extent());
    if slack == 0 {
        return (0, 0);
    }
    match geometry.alignment {
        HorizontalAlignment::Leading => (0, slack),
        HorizontalAlignment::Center => (slack / 2, slack - slack / 2),
        HorizontalAlignment::Trailing => (slack, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScrollerOptions, Size, Spacing};

    fn grid(viewport: Size, total: usize, per_row: usize) -> GridGeometry {
        let options = ScrollerOptions::new(Size::new(40, 50))
            .with_items_per_row(per_row)
            .with_spacing(Spacing::new(0, 10))
            .with_padding(Padding::new(5, 7, 0, 0));
        GridGeometry::new(&options, viewport, total, per_row)
    }

    #[test]
    fn for_window_reserves_space_for_hidden_rows() {
        let g = grid(Size::new(40, 200), 100, 1);
        let w = Window {
            first_row: 3,
            last_row: 6,
            first_col: 0,
            last_col: 0,
        };
        let p = EffectivePadding::for_window(&g, Some(&w));
        assert_eq!(p.top, 5 + 3 * 60);
        assert_eq!(p.bottom, 7 + (100 - 6 - 1) * 60);
        assert_eq!(p.left, 0);
        assert_eq!(p.right, 0);
    }

    #[test]
    fn reserve_and_release_match_full_derivation() {
        let g = grid(Size::new(40, 200), 100, 1);
        let a = Window {
            first_row: 3,
            last_row: 6,
            first_col: 0,
            last_col: 0,
        };
        let b = Window {
            first_row: 5,
            last_row: 9,
            ..a
        };
        let step = g.rows.step();
        let from_a = EffectivePadding::for_window(&g, Some(&a))
            .reserve(Side::Top, 2, step)
            .release(Side::Bottom, 3, step);
        assert_eq!(from_a, EffectivePadding::for_window(&g, Some(&b)));
    }

    #[test]
    fn alignment_distributes_horizontal_slack() {
        let options = ScrollerOptions::new(Size::new(40, 50))
            .with_items_per_row(2)
            .with_horizontal_alignment(HorizontalAlignment::Center);
        let g = GridGeometry::new(&options, Size::new(101, 200), 10, 2);
        let p = EffectivePadding::for_window(&g, None);
        // content width 80, slack 21
        assert_eq!((p.left, p.right), (10, 11));

        let options = options.with_horizontal_alignment(HorizontalAlignment::Trailing);
        let g = GridGeometry::new(&options, Size::new(101, 200), 10, 2);
        let p = EffectivePadding::for_window(&g, None);
        assert_eq!((p.left, p.right), (21, 0));
    }

    #[test]
    fn extent_ignores_window() {
        let g = grid(Size::new(40, 200), 100, 1);
        let e = ContentExtent::of(&g);
        assert_eq!(e.height, 5 + 7 + 100 * 50 + 99 * 10);
        assert_eq!(e.width, 40);
    }
}
