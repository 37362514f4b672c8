use recycler::{Axis, ScrollOffset, Scroller, Update, ViewHost};

/// A scroll anchor that can be used to preserve visual position across a regeneration.
///
/// Typical use cases:
/// - `resize` after items were appended or removed, keeping the reader where they were
/// - a `match_container_width` reflow, where every index moves to a different row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor {
    pub index: usize,
    /// The distance from the anchor item's top-left corner to the scroll offset.
    pub offset_in_cell: ScrollOffset,
}

/// Captures an anchor for the first visible item (top-left cell of the window).
///
/// Returns `None` if the scroller is not generated or the collection is empty.
pub fn capture_first_visible_anchor<H: ViewHost>(s: &Scroller<H>) -> Option<ScrollAnchor> {
    let window = s.window()?;
    let index = window.first_row * s.items_per_row() + window.first_col;
    let origin = s.cell_origin(index)?;
    let offset = s.offset();
    Some(ScrollAnchor {
        index,
        offset_in_cell: ScrollOffset::new(
            offset.x.saturating_sub(origin.x),
            offset.y.saturating_sub(origin.y),
        ),
    })
}

/// Applies a previously captured anchor by scrolling, clamped to the scrollable range.
///
/// `remap` translates the anchor's index into the *current* collection (e.g. `|i| Some(i + 10)`
/// after a prepend of ten items).
///
/// Returns `None` when the index no longer maps to an item.
pub fn apply_anchor<H: ViewHost>(
    s: &mut Scroller<H>,
    anchor: &ScrollAnchor,
    remap: impl FnOnce(usize) -> Option<usize>,
) -> Option<Update> {
    let index = remap(anchor.index)?;
    let origin = s.cell_origin(index)?;
    let mut target = s.offset();
    // Axes that cannot scroll keep their offset.
    if let Some(range) = s.scroll_range(Axis::Horizontal) {
        target.x = origin.x.saturating_add(anchor.offset_in_cell.x).min(range);
    }
    if let Some(range) = s.scroll_range(Axis::Vertical) {
        target.y = origin.y.saturating_add(anchor.offset_in_cell.y).min(range);
    }
    Some(s.scroll(target))
}
