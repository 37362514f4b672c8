use alloc::sync::Arc;

use crate::scroller::ScrollEvent;
use crate::{Error, HorizontalAlignment, Padding, Size, Spacing};

/// A callback fired after a scroll, viewport change or jump has been applied.
pub type OnScrollCallback = Arc<dyn Fn(&ScrollEvent) + Send + Sync>;

/// Default number of retired views kept for reuse.
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// Configuration for [`crate::Scroller`].
///
/// Cheap to clone: the callback is stored in an `Arc`, so adapters can tweak a field and call
/// `Scroller::set_options` without reallocating closures.
pub struct ScrollerOptions {
    /// Items laid out per row. `1` makes the grid a single-column list.
    ///
    /// Ignored once a viewport is known when `match_container_width` is set.
    pub items_per_row: usize,
    /// Derive `items_per_row` from the viewport width instead.
    pub match_container_width: bool,
    /// Maximum number of retired views kept in the recycle cache.
    pub cache_capacity: usize,
    pub horizontal_alignment: HorizontalAlignment,

    pub cell_size: Size,
    pub spacing: Spacing,
    /// Base padding around the content.
    pub padding: Padding,

    /// Optional subscription to scroll offset changes.
    pub on_scroll: Option<OnScrollCallback>,
}

impl Clone for ScrollerOptions {
    fn clone(&self) -> Self {
        Self {
            items_per_row: self.items_per_row,
            match_container_width: self.match_container_width,
            cache_capacity: self.cache_capacity,
            horizontal_alignment: self.horizontal_alignment,
            cell_size: self.cell_size,
            spacing: self.spacing,
            padding: self.padding,
            on_scroll: self.on_scroll.clone(),
        }
    }
}

impl ScrollerOptions {
    /// Creates options for a single-column list of `cell_size` cells.
    pub fn new(cell_size: Size) -> Self {
        Self {
            items_per_row: 1,
            match_container_width: false,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            horizontal_alignment: HorizontalAlignment::default(),
            cell_size,
            spacing: Spacing::default(),
            padding: Padding::default(),
            on_scroll: None,
        }
    }

    /// Creates options for a grid with a fixed number of items per row.
    pub fn grid(cell_size: Size, items_per_row: usize) -> Self {
        Self::new(cell_size).with_items_per_row(items_per_row)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.cell_size.width == 0 || self.cell_size.height == 0 {
            return Err(Error::invalid(
                "cell_size",
                alloc::format!(
                    "cells must have a non-zero size, got {}x{}",
                    self.cell_size.width,
                    self.cell_size.height
                ),
            ));
        }
        if self.items_per_row == 0 && !self.match_container_width {
            return Err(Error::invalid(
                "items_per_row",
                "must be at least 1 unless match_container_width is set",
            ));
        }
        Ok(())
    }

    /// Returns `true` when switching from `self` to `other` changes where cells go.
    pub(crate) fn layout_differs(&self, other: &Self) -> bool {
        self.items_per_row != other.items_per_row
            || self.match_container_width != other.match_container_width
            || self.horizontal_alignment != other.horizontal_alignment
            || self.cell_size != other.cell_size
            || self.spacing != other.spacing
            || self.padding != other.padding
    }

    pub fn with_items_per_row(mut self, items_per_row: usize) -> Self {
        self.items_per_row = items_per_row;
        self
    }

    pub fn with_match_container_width(mut self, match_container_width: bool) -> Self {
        self.match_container_width = match_container_width;
        self
    }

    pub fn with_cache_capacity(mut self, cache_capacity: usize) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }

    pub fn with_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    pub fn with_cell_size(mut self, cell_size: Size) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(&ScrollEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for ScrollerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollerOptions")
            .field("items_per_row", &self.items_per_row)
            .field("match_container_width", &self.match_container_width)
            .field("cache_capacity", &self.cache_capacity)
            .field("horizontal_alignment", &self.horizontal_alignment)
            .field("cell_size", &self.cell_size)
            .field("spacing", &self.spacing)
            .field("padding", &self.padding)
            .finish_non_exhaustive()
    }
}
