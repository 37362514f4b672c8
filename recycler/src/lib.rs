//! A headless viewport virtualization engine with view recycling.
//!
//! For adapter-level utilities (animated jumps, scroll anchoring), see the `recycler-adapter`
//! crate.
//!
//! This crate renders only the visible slice of a fixed-size list or grid while keeping the
//! surrounding container scrollable as if every item existed: it maps a scroll offset to a
//! visible window of rows/columns, diffs consecutive windows to decide which views to create or
//! retire, parks retired views in a bounded LRU cache for reuse, and keeps live views in a
//! registry sorted by index (which doubles as sibling/draw order).
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - viewport size and scroll offset
//! - a [`ViewHost`] that creates, notifies, places and disposes item views
//! - the effective padding returned by each update, applied to its layout container
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod diff;
mod error;
mod host;
mod options;
mod padding;
mod registry;
mod scroller;
mod state;
mod types;
mod window;


pub use cache::{CacheStats, RecycleCache};
pub use diff::{EdgePass, WindowDiff};
pub use error::Error;
pub use host::ViewHost;
pub use options::{OnScrollCallback, ScrollerOptions};
pub use padding::{ContentExtent, EffectivePadding};
pub use registry::{ActiveRegistry, Cell};
pub use scroller::{ScrollEvent, Scroller, Update};
pub use state::ScrollerSnapshot;
pub use types::{
    Axis, HorizontalAlignment, JumpPolicy, NormalizedPosition, Padding, ScrollOffset,
    ScrollerState, Side, Size, Spacing, Window,
};
pub use window::{AxisGeometry, axis_window, compute_window, row_count};
