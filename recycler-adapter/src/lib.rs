//! Adapter utilities for the `recycler` crate.
//!
//! The `recycler` crate is UI-agnostic and focuses on the window math, diffing and view
//! lifecycle. This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Tween-based animated jumps (adapter-driven, one `tick` per frame)
//! - Scroll anchoring (keep the first visible item in place across a `resize`)
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod anchor;
mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use controller::Controller;
pub use tween::{Easing, Tween};
