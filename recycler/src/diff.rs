//! Window diffing.
//!
//! Planning is pure: [`WindowDiff::between`] only looks at two windows. The scroller executes the
//! plan against the registry, the recycle cache and the host.

use crate::{Axis, Side, Window};

/// One edge of the window growing or shrinking by whole rows/columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgePass {
    /// Axis whose rows/columns enter or leave.
    pub axis: Axis,
    pub side: Side,
    /// `true` when lines enter the window, `false` when they leave.
    pub grow: bool,
    /// Inclusive range of rows/columns along `axis`.
    pub first: usize,
    pub last: usize,
    /// Inclusive range along the other axis at the time this pass runs.
    pub cross_first: usize,
    pub cross_last: usize,
}

impl EdgePass {
    /// Number of rows/columns this pass moves.
    pub fn lines(&self) -> usize {
        self.last - self.first + 1
    }

    /// Calls `f` for every item index covered by the pass, in processing order, skipping indices
    /// at or past `total_count`.
    pub fn for_each_index(&self, items_per_row: usize, total_count: usize, mut f: impl FnMut(usize)) {
        for line in self.first..=self.last {
            for cross in self.cross_first..=self.cross_last {
                let (row, col) = match self.axis {
                    Axis::Vertical => (line, cross),
                    Axis::Horizontal => (cross, line),
                };
                let index = row * items_per_row + col;
                if index < total_count {
                    f(index);
                }
            }
        }
    }
}

/// The plan that turns one window into another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowDiff {
    Unchanged,
    /// The windows share no row or no column: tear everything down and rebuild.
    Rebuild,
    /// Edge passes to run in order: all shrinking passes first (rows, then columns), then all
    /// growing passes (rows, then columns).
    Incremental { passes: [Option<EdgePass>; 8] },
}

impl WindowDiff {
    pub fn between(old: &Window, new: &Window) -> Self {
        if old == new {
            return Self::Unchanged;
        }
        if old.is_disjoint(new) {
            return Self::Rebuild;
        }

        let mut passes = [None; 8];
        let mut n = 0;
        let mut push = |pass: Option<EdgePass>| {
            if let Some(p) = pass {
                passes[n] = Some(p);
                n += 1;
            }
        };

        // Current extents while passes are applied one after another.
        let (mut r0, mut r1) = (old.first_row, old.last_row);
        let (mut c0, mut c1) = (old.first_col, old.last_col);

        // Shrink rows, then columns (over the already shrunk rows).
        push(shrink_leading(Axis::Vertical, &mut r0, new.first_row, (c0, c1)));
        push(shrink_trailing(Axis::Vertical, &mut r1, new.last_row, (c0, c1)));
        push(shrink_leading(Axis::Horizontal, &mut c0, new.first_col, (r0, r1)));
        push(shrink_trailing(Axis::Horizontal, &mut c1, new.last_col, (r0, r1)));

        // Grow rows over the surviving columns, then columns over the full new rows.
        push(grow_leading(Axis::Vertical, &mut r0, new.first_row, (c0, c1)));
        push(grow_trailing(Axis::Vertical, &mut r1, new.last_row, (c0, c1)));
        push(grow_leading(Axis::Horizontal, &mut c0, new.first_col, (r0, r1)));
        push(grow_trailing(Axis::Horizontal, &mut c1, new.last_col, (r0, r1)));

        debug_assert_eq!((r0, r1, c0, c1), (new.first_row, new.last_row, new.first_col, new.last_col));
        Self::Incremental { passes }
    }

    pub fn passes(&self) -> impl Iterator<Item = &EdgePass> + '_ {
        let passes: &[Option<EdgePass>] = match self {
            Self::Incremental { passes } => &passes[..],
            _ => &[],
        };
        passes.iter().flatten()
    }
}

fn shrink_leading(
    axis: Axis,
    cur_first: &mut usize,
    new_first: usize,
    cross: (usize, usize),
) -> Option<EdgePass> {
    if new_first <= *cur_first {
        return None;
    }
    let pass = EdgePass {
        axis,
        side: axis.leading_side(),
        grow: false,
        first: *cur_first,
        last: new_first - 1,
        cross_first: cross.0,
        cross_last: cross.1,
    };
    *cur_first = new_first;
    Some(pass)
}

fn shrink_trailing(
    axis: Axis,
    cur_last: &mut usize,
    new_last: usize,
    cross: (usize, usize),
) -> Option<EdgePass> {
    if new_last >= *cur_last {
        return None;
    }
    let pass = EdgePass {
        axis,
        side: axis.trailing_side(),
        grow: false,
        first: new_last + 1,
        last: *cur_last,
        cross_first: cross.0,
        cross_last: cross.1,
    };
    *cur_last = new_last;
    Some(pass)
}

// New lines are visited from the new boundary towards the old one, so the line adjacent to the
// already live cells is generated last.
fn grow_leading(
    axis: Axis,
    cur_first: &mut usize,
    new_first: usize,
    cross: (usize, usize),
) -> Option<EdgePass> {
    if new_first >= *cur_first {
        return None;
    }
    let pass = EdgePass {
        axis,
        side: axis.leading_side(),
        grow: true,
        first: new_first,
        last: *cur_first - 1,
        cross_first: cross.0,
        cross_last: cross.1,
    };
    *cur_first = new_first;
    Some(pass)
}

fn grow_trailing(
    axis: Axis,
    cur_last: &mut usize,
    new_last: usize,
    cross: (usize, usize),
) -> Option<EdgePass> {
    if new_last <= *cur_last {
        return None;
    }
    let pass = EdgePass {
        axis,
        side: axis.trailing_side(),
        grow: true,
        first: *cur_last + 1,
        last: new_last,
        cross_first: cross.0,
        cross_last: cross.1,
    };
    *cur_last = new_last;
    Some(pass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn w(first_row: usize, last_row: usize, first_col: usize, last_col: usize) -> Window {
        Window {
            first_row,
            last_row,
            first_col,
            last_col,
        }
    }

    fn indices(diff: &WindowDiff, grow: bool, per_row: usize, total: usize) -> Vec<usize> {
        let mut out = Vec::new();
        for pass in diff.passes().filter(|p| p.grow == grow) {
            pass.for_each_index(per_row, total, |i| out.push(i));
        }
        out
    }

    #[test]
    fn scrolling_down_a_list() {
        let diff = WindowDiff::between(&w(0, 9, 0, 0), &w(2, 11, 0, 0));
        let passes: Vec<_> = diff.passes().copied().collect();
        assert_eq!(passes.len(), 2);
        assert_eq!((passes[0].side, passes[0].grow), (Side::Top, false));
        assert_eq!((passes[1].side, passes[1].grow), (Side::Bottom, true));
        assert_eq!(indices(&diff, false, 1, 1000), [0, 1]);
        assert_eq!(indices(&diff, true, 1, 1000), [10, 11]);
    }

    #[test]
    fn scrolling_up_generates_towards_live_cells() {
        let diff = WindowDiff::between(&w(5, 9, 0, 0), &w(2, 6, 0, 0));
        assert_eq!(indices(&diff, false, 1, 100), [7, 8, 9]);
        assert_eq!(indices(&diff, true, 1, 100), [2, 3, 4]);
    }

    #[test]
    fn diagonal_move_covers_new_window_exactly_once() {
        let per_row = 10;
        let old = w(2, 4, 3, 5);
        let new = w(3, 6, 1, 4);
        let diff = WindowDiff::between(&old, &new);

        let mut live: Vec<usize> = Vec::new();
        old.for_each_index(per_row, 100, |i| live.push(i));
        for pass in diff.passes() {
            pass.for_each_index(per_row, 100, |i| {
                if pass.grow {
                    assert!(!live.contains(&i), "index {i} generated twice");
                    live.push(i);
                } else {
                    let pos = live.iter().position(|&x| x == i).unwrap();
                    live.remove(pos);
                }
            });
        }
        live.sort_unstable();
        let mut expected = Vec::new();
        new.for_each_index(per_row, 100, |i| expected.push(i));
        assert_eq!(live, expected);
    }

    #[test]
    fn disjoint_on_either_axis_rebuilds() {
        assert_eq!(WindowDiff::between(&w(0, 9, 0, 0), &w(200, 209, 0, 0)), WindowDiff::Rebuild);
        assert_eq!(WindowDiff::between(&w(0, 3, 0, 2), &w(1, 4, 3, 5)), WindowDiff::Rebuild);
        assert_eq!(WindowDiff::between(&w(0, 3, 0, 2), &w(0, 3, 0, 2)), WindowDiff::Unchanged);
    }

    #[test]
    fn partial_last_row_is_skipped() {
        // 7 items, 3 per row: row 2 only holds index 6.
        let diff = WindowDiff::between(&w(0, 1, 0, 2), &w(1, 2, 0, 2));
        assert_eq!(indices(&diff, false, 3, 7), [0, 1, 2]);
        assert_eq!(indices(&diff, true, 3, 7), [6]);
    }
}
