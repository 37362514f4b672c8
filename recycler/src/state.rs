use alloc::vec::Vec;

use crate::{ContentExtent, EffectivePadding, ScrollOffset, ScrollerState, Window};

/// A serializable snapshot of the scroller's observable state.
///
/// Useful for debugging overlays, tests, or persisting view state across sessions without
/// holding on to any host objects.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollerSnapshot {
    pub state: ScrollerState,
    pub total_count: usize,
    pub items_per_row: usize,
    pub offset: ScrollOffset,
    pub window: Option<Window>,
    pub extent: ContentExtent,
    pub padding: EffectivePadding,
    /// Active item indices, ascending.
    pub active: Vec<usize>,
    /// Cached item indices, most recently retired first.
    pub cached: Vec<usize>,
}
