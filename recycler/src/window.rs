//! Window calculator: scroll offset + geometry → visible index bounds.
//!
//! Everything here is pure. Identical inputs always produce identical bounds, and nothing here
//! allocates or touches item views.

use crate::{Axis, HorizontalAlignment, Padding, ScrollOffset, ScrollerOptions, Size, Window};

/// Fixed-size cell geometry along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisGeometry {
    /// Viewport size along the axis.
    pub viewport: u32,
    pub cell: u32,
    pub spacing: u32,
    pub padding_leading: u32,
    pub padding_trailing: u32,
    /// Number of rows (vertical) or columns (horizontal).
    pub count: usize,
}

impl AxisGeometry {
    /// Distance between the leading edges of two consecutive cells.
    pub fn step(&self) -> u64 {
        (self.cell as u64 + self.spacing as u64).max(1)
    }

    /// Leading edge of cell `i`, in content coordinates.
    pub fn cell_start(&self, i: usize) -> u64 {
        self.padding_leading as u64 + i as u64 * self.step()
    }

    pub fn cell_end(&self, i: usize) -> u64 {
        self.cell_start(i) + self.cell as u64
    }

    /// Total content size along the axis, independent of how many cells are instantiated.
    pub fn content_extent(&self) -> u64 {
        let pads = self.padding_leading as u64 + self.padding_trailing as u64;
        if self.count == 0 {
            return pads;
        }
        let n = self.count as u64;
        pads + n * self.cell as u64 + (n - 1) * self.spacing as u64
    }

    /// How far the viewport can scroll along this axis.
    ///
    /// `None` when the content fits inside the viewport.
    pub fn scroll_range(&self) -> Option<u64> {
        let content = self.content_extent();
        let view = self.viewport as u64;
        (content > view).then(|| content - view)
    }
}

/// Number of rows needed for `total_count` items laid out `items_per_row` per row.
pub fn row_count(total_count: usize, items_per_row: usize) -> usize {
    if items_per_row == 0 {
        return 0;
    }
    total_count.div_ceil(items_per_row)
}

/// Computes the inclusive range of cells along one axis that intersect the viewport.
///
/// The viewport covers `[offset, offset + viewport)` and cell `i` covers
/// `[cell_start(i), cell_end(i))`. Results are clamped to `[0, count - 1]` and always satisfy
/// `first <= last`. Returns `None` when `count == 0`.
pub fn axis_window(offset: u64, axis: &AxisGeometry) -> Option<(usize, usize)> {
    if axis.count == 0 {
        return None;
    }

    let step = axis.step();
    let cell = axis.cell as u64;
    let lead = axis.padding_leading as u64;
    let start = offset.saturating_sub(lead);
    let end = offset.saturating_add(axis.viewport as u64).saturating_sub(lead);

    // First cell whose trailing edge lies past the viewport start. A start inside the gap after
    // cell k resolves to k + 1.
    let first = if start < cell {
        0
    } else {
        (start - cell) / step + 1
    };
    // Last cell whose leading edge lies before the (exclusive) viewport end.
    let last = end.saturating_sub(1) / step;

    let max = (axis.count - 1) as u64;
    let first = first.min(max);
    let last = last.min(max).max(first);
    Some((first as usize, last as usize))
}

/// Computes the visible window for a grid, each axis independently.
///
/// Returns `None` for an empty collection (no rows or no columns).
pub fn compute_window(
    offset: ScrollOffset,
    rows: &AxisGeometry,
    cols: &AxisGeometry,
) -> Option<Window> {
    let (first_row, last_row) = axis_window(offset.y, rows)?;
    let (first_col, last_col) = axis_window(offset.x, cols)?;
    Some(Window {
        first_row,
        last_row,
        first_col,
        last_col,
    })
}

/// Both axes of a grid, derived from options, viewport and item count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct GridGeometry {
    pub(crate) rows: AxisGeometry,
    pub(crate) cols: AxisGeometry,
    pub(crate) alignment: HorizontalAlignment,
}

impl GridGeometry {
    pub(crate) fn new(
        options: &ScrollerOptions,
        viewport: Size,
        total_count: usize,
        items_per_row: usize,
    ) -> Self {
        let Padding {
            top,
            bottom,
            left,
            right,
        } = options.padding;
        let rows = AxisGeometry {
            viewport: viewport.height,
            cell: options.cell_size.height,
            spacing: options.spacing.y,
            padding_leading: top,
            padding_trailing: bottom,
            count: row_count(total_count, items_per_row),
        };
        let cols = AxisGeometry {
            viewport: viewport.width,
            cell: options.cell_size.width,
            spacing: options.spacing.x,
            padding_leading: left,
            padding_trailing: right,
            count: if total_count == 0 { 0 } else { items_per_row },
        };
        Self {
            rows,
            cols,
            alignment: options.horizontal_alignment,
        }
    }

    pub(crate) fn along(&self, axis: Axis) -> &AxisGeometry {
        match axis {
            Axis::Vertical => &self.rows,
            Axis::Horizontal => &self.cols,
        }
    }

    pub(crate) fn window(&self, offset: ScrollOffset) -> Option<Window> {
        compute_window(offset, &self.rows, &self.cols)
    }
}

/// Number of items per row a viewport of `width` can hold.
pub(crate) fn fitted_items_per_row(options: &ScrollerOptions, width: u32) -> usize {
    let pads = options.padding.left as u64 + options.padding.right as u64;
    let spacing = options.spacing.x as u64;
    let step = (options.cell_size.width as u64 + spacing).max(1);
    let usable = (width as u64 + spacing).saturating_sub(pads);
    ((usable / step) as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(viewport: u32, cell: u32, spacing: u32, lead: u32, count: usize) -> AxisGeometry {
        AxisGeometry {
            viewport,
            cell,
            spacing,
            padding_leading: lead,
            padding_trailing: 0,
            count,
        }
    }

    #[test]
    fn half_open_viewport_end() {
        let a = axis(500, 50, 0, 0, 1000);
        assert_eq!(axis_window(0, &a), Some((0, 9)));
        assert_eq!(axis_window(100, &a), Some((2, 11)));
        assert_eq!(axis_window(101, &a), Some((2, 12)));
    }

    #[test]
    fn start_inside_gap_skips_previous_cell() {
        // cells: [0,50) gap [50,60) [60,110) gap [110,120) ...
        let a = axis(100, 50, 10, 0, 100);
        assert_eq!(axis_window(50, &a), Some((1, 2)));
        assert_eq!(axis_window(55, &a), Some((1, 2)));
        assert_eq!(axis_window(49, &a), Some((0, 2)));
    }

    #[test]
    fn leading_padding_and_clamping() {
        let a = axis(100, 50, 0, 30, 4);
        // viewport [0,100) → content [0,70) after padding → cells 0 and 1
        assert_eq!(axis_window(0, &a), Some((0, 1)));
        // far past the end clamps to the last cell
        assert_eq!(axis_window(10_000, &a), Some((3, 3)));
        assert_eq!(axis_window(0, &axis(100, 50, 0, 0, 0)), None);
    }

    #[test]
    fn zero_viewport_still_yields_a_single_cell() {
        let a = axis(0, 50, 0, 0, 10);
        assert_eq!(axis_window(0, &a), Some((0, 0)));
        assert_eq!(axis_window(120, &a), Some((2, 2)));
    }

    #[test]
    fn content_extent_and_scroll_range() {
        let a = AxisGeometry {
            viewport: 100,
            cell: 20,
            spacing: 5,
            padding_leading: 3,
            padding_trailing: 7,
            count: 4,
        };
        // 3 + 7 + 4*20 + 3*5
        assert_eq!(a.content_extent(), 105);
        assert_eq!(a.scroll_range(), Some(5));

        let empty = AxisGeometry { count: 0, ..a };
        assert_eq!(empty.content_extent(), 10);
        assert_eq!(empty.scroll_range(), None);
    }

    #[test]
    fn row_count_rounds_up() {
        assert_eq!(row_count(0, 3), 0);
        assert_eq!(row_count(7, 3), 3);
        assert_eq!(row_count(9, 3), 3);
        assert_eq!(row_count(5, 1), 5);
    }

    #[test]
    fn fitted_items_per_row_accounts_for_spacing_and_padding() {
        let opts = ScrollerOptions::new(Size::new(100, 20))
            .with_spacing(crate::Spacing::new(10, 0))
            .with_padding(Padding::new(0, 0, 5, 5));
        // (330 + 10 - 10) / 110 = 3
        assert_eq!(fitted_items_per_row(&opts, 330), 3);
        assert_eq!(fitted_items_per_row(&opts, 10), 1);
    }
}
