use core::fmt;
use core::str::FromStr;

use crate::Error;

/// The edge an item crosses when it enters or leaves the window.
///
/// `None` tags full-window (re)builds; the four edges tag incremental growth/shrink passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Rows (vertical scrolling).
    Vertical,
    /// Columns (horizontal scrolling).
    Horizontal,
}

impl Axis {
    /// The side items cross when entering/leaving on the leading edge of this axis.
    pub fn leading_side(self) -> Side {
        match self {
            Self::Vertical => Side::Top,
            Self::Horizontal => Side::Left,
        }
    }

    /// The side items cross when entering/leaving on the trailing edge of this axis.
    pub fn trailing_side(self) -> Side {
        match self {
            Self::Vertical => Side::Bottom,
            Self::Horizontal => Side::Right,
        }
    }
}

/// How a grid narrower than its viewport is positioned horizontally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

impl FromStr for HorizontalAlignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leading" | "left" | "start" => Ok(Self::Leading),
            "center" | "middle" => Ok(Self::Center),
            "trailing" | "right" | "end" => Ok(Self::Trailing),
            other => Err(Error::invalid(
                "horizontal_alignment",
                alloc::format!("unrecognized alignment {other:?}"),
            )),
        }
    }
}

/// Positioning policy for [`crate::Scroller::jump_to`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JumpPolicy {
    /// Scroll the minimal distance that brings the target fully on screen; no-op when the target
    /// is already inside the window.
    #[default]
    BringOnScreen,
    /// Put the target's center at the viewport's center, regardless of current visibility.
    Center,
}

impl FromStr for JumpPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bring-on-screen" | "bring_on_screen" | "auto" => Ok(Self::BringOnScreen),
            "center" => Ok(Self::Center),
            other => Err(Error::invalid(
                "policy",
                alloc::format!("unrecognized jump policy {other:?}"),
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollerState {
    /// No viewport has been reported yet.
    #[default]
    Uninitialized,
    /// Geometry is known; nothing is generated.
    Initialized,
    /// Views are live and scroll events drive the diff engine.
    Generated,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn along(self, axis: Axis) -> u32 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }
}

/// Space between cells: `x` between columns, `y` between rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacing {
    pub x: u32,
    pub y: u32,
}

impl Spacing {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn along(self, axis: Axis) -> u32 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }
}

/// Base (author-configured) padding of the content container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Padding {
    pub const fn new(top: u32, bottom: u32, left: u32, right: u32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub const fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn leading(self, axis: Axis) -> u32 {
        match axis {
            Axis::Vertical => self.top,
            Axis::Horizontal => self.left,
        }
    }

    pub fn trailing(self, axis: Axis) -> u32 {
        match axis {
            Axis::Vertical => self.bottom,
            Axis::Horizontal => self.right,
        }
    }
}

/// Offset of the viewport's top-left corner in content coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffset {
    pub x: u64,
    pub y: u64,
}

impl ScrollOffset {
    pub const fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    pub fn along(self, axis: Axis) -> u64 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }
}

/// A scroll position normalized against the scrollable range of each axis.
///
/// `y` counts from the bottom: `1.0` is the top of the content and `0.0` the bottom. `x` counts
/// from the left: `0.0` is the left edge and `1.0` the right edge. Values are not clamped: a
/// centered jump near the end of the content may overscroll below `0.0` (vertically) or past
/// `1.0` (horizontally). An axis is `None` when its content fits in the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedPosition {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

/// Inclusive row/column bounds of the visible window.
///
/// Only exists for non-empty collections, so `first_row <= last_row` and
/// `first_col <= last_col` always hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub first_row: usize,
    pub last_row: usize,
    pub first_col: usize,
    pub last_col: usize,
}

impl Window {
    pub fn first(&self, axis: Axis) -> usize {
        match axis {
            Axis::Vertical => self.first_row,
            Axis::Horizontal => self.first_col,
        }
    }

    pub fn last(&self, axis: Axis) -> usize {
        match axis {
            Axis::Vertical => self.last_row,
            Axis::Horizontal => self.last_col,
        }
    }

    pub fn rows(&self) -> usize {
        self.last_row - self.first_row + 1
    }

    pub fn cols(&self) -> usize {
        self.last_col - self.first_col + 1
    }

    pub fn contains_cell(&self, row: usize, col: usize) -> bool {
        (self.first_row..=self.last_row).contains(&row)
            && (self.first_col..=self.last_col).contains(&col)
    }

    /// Returns `true` when the two windows share no row or share no column.
    pub fn is_disjoint(&self, other: &Window) -> bool {
        other.last_row < self.first_row
            || other.first_row > self.last_row
            || other.last_col < self.first_col
            || other.first_col > self.last_col
    }

    /// Calls `f` for every item index inside the window, row-major, skipping indices at or past
    /// `total_count` (the last row of a grid may be partial).
    pub fn for_each_index(&self, items_per_row: usize, total_count: usize, mut f: impl FnMut(usize)) {
        for row in self.first_row..=self.last_row {
            for col in self.first_col..=self.last_col {
                let index = row * items_per_row + col;
                if index < total_count {
                    f(index);
                }
            }
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows {}..={} cols {}..={}",
            self.first_row, self.last_row, self.first_col, self.last_col
        )
    }
}
