use crate::{NormalizedPosition, Side};

/// The host side of the engine: creates, notifies, places and disposes item views.
///
/// The engine never inspects a [`Self::Handle`]; it only moves handles between the active
/// registry and the recycle cache and passes them back to these hooks. All calls are synchronous
/// and made from within the [`crate::Scroller`] method that triggered them.
///
/// Lifecycle of a view:
/// - cache miss: `create_view` → `on_constructed` → `attach` → `on_become_visible`
/// - cache hit: `attach` → `on_become_visible`
/// - retire: `on_become_invisible` → `detach` → (parked in the recycle cache)
/// - eviction / clear: `dispose_view`
pub trait ViewHost {
    type Handle;

    /// Creates a fresh view for `index`. Called on a recycle cache miss.
    fn create_view(&mut self, index: usize) -> Self::Handle;

    /// Releases a view for good. Called exactly once per handle.
    fn dispose_view(&mut self, handle: Self::Handle);

    /// Called once, right after `create_view`.
    fn on_constructed(&mut self, _handle: &mut Self::Handle, _index: usize) {}

    fn on_become_visible(&mut self, _handle: &mut Self::Handle, _index: usize, _side: Side) {}

    fn on_become_invisible(&mut self, _handle: &mut Self::Handle, _index: usize, _side: Side) {}

    /// Places the view among the container's children at `sibling_index`.
    fn attach(&mut self, _handle: &mut Self::Handle, _sibling_index: usize) {}

    /// Takes the view out of the container. `sibling_index` is its position before removal.
    fn detach(&mut self, _handle: &mut Self::Handle, _sibling_index: usize) {}

    /// Requests the host scroll container to move to `position` (used by jump-to).
    fn scroll_to_normalized(&mut self, _position: NormalizedPosition) {}
}
