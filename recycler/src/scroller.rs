use alloc::vec::Vec;

use crate::diff::{EdgePass, WindowDiff};
use crate::window::{GridGeometry, fitted_items_per_row};
use crate::{
    ActiveRegistry, Axis, CacheStats, Cell, ContentExtent, EffectivePadding, Error, JumpPolicy,
    NormalizedPosition, RecycleCache, ScrollOffset, ScrollerOptions, ScrollerSnapshot,
    ScrollerState, Side, Size, ViewHost, Window,
};

/// Delivered to [`ScrollerOptions::on_scroll`] after the engine has caught up with a new offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    pub offset: ScrollOffset,
    pub normalized: NormalizedPosition,
    pub window: Option<Window>,
}

/// What a scroller operation did.
///
/// `padding` is the effective padding the host should apply to its layout container after the
/// operation; `window` is the window now live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Update {
    /// Views created through [`ViewHost::create_view`].
    pub created: usize,
    /// Views taken back out of the recycle cache.
    pub reused: usize,
    /// Views that left the active registry.
    pub retired: usize,
    /// Views released through [`ViewHost::dispose_view`].
    pub disposed: usize,
    /// The window was built from scratch (generate or a disjoint jump).
    pub rebuilt: bool,
    pub window: Option<Window>,
    pub padding: EffectivePadding,
}

impl Update {
    /// Returns `true` when no view was created, reused, retired or disposed.
    pub fn is_noop(&self) -> bool {
        self.created == 0 && self.reused == 0 && self.retired == 0 && self.disposed == 0
    }

    /// Views that entered the window, fresh or recycled.
    pub fn entered(&self) -> usize {
        self.created + self.reused
    }

    /// Folds a follow-up update into this one: counts add up, the latest window and padding win.
    pub fn merge(&mut self, next: Update) {
        self.created += next.created;
        self.reused += next.reused;
        self.retired += next.retired;
        self.disposed += next.disposed;
        self.rebuilt |= next.rebuilt;
        self.window = next.window;
        self.padding = next.padding;
    }
}

/// A recycling scroller over a fixed-size list or grid.
///
/// This type is UI-agnostic:
/// - It owns the [`ViewHost`] and the opaque view handles it created, nothing else.
/// - Your adapter drives it by reporting the viewport size and scroll offset.
/// - Each operation returns an [`Update`] whose `padding` keeps the container scrollable as if
///   every item existed.
///
/// A single-column list is the grid case with `items_per_row == 1`.
///
/// Dropping a generated scroller drops its handles without calling `dispose_view`; use
/// [`Self::clear`] or [`Self::into_host`] first when disposal has side effects.
pub struct Scroller<H: ViewHost> {
    options: ScrollerOptions,
    host: H,
    state: ScrollerState,
    viewport: Size,
    offset: ScrollOffset,
    total_count: usize,
    items_per_row: usize,
    geometry: GridGeometry,
    window: Option<Window>,
    padding: EffectivePadding,
    registry: ActiveRegistry<H::Handle>,
    cache: RecycleCache<H::Handle>,
}

impl<H: ViewHost> Scroller<H> {
    /// Creates an uninitialized scroller. Report a viewport with [`Self::set_viewport`] before
    /// generating.
    pub fn new(options: ScrollerOptions, host: H) -> Result<Self, Error> {
        options.validate()?;
        rdebug!(
            items_per_row = options.items_per_row,
            match_container_width = options.match_container_width,
            cache_capacity = options.cache_capacity,
            "Scroller::new"
        );
        let items_per_row = options.items_per_row.max(1);
        let geometry = GridGeometry::new(&options, Size::default(), 0, items_per_row);
        Ok(Self {
            cache: RecycleCache::new(options.cache_capacity),
            padding: EffectivePadding::base(options.padding),
            options,
            host,
            state: ScrollerState::Uninitialized,
            viewport: Size::default(),
            offset: ScrollOffset::default(),
            total_count: 0,
            items_per_row,
            geometry,
            window: None,
            registry: ActiveRegistry::new(),
        })
    }

    pub fn options(&self) -> &ScrollerOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// Layout changes (cell size, spacing, padding, items per row, alignment) regenerate the
    /// window when generated, since item positions move. A capacity change applies immediately.
    pub fn set_options(&mut self, options: ScrollerOptions) -> Result<Update, Error> {
        options.validate()?;
        let layout_changed = self.options.layout_differs(&options);
        let capacity = options.cache_capacity;
        self.options = options;

        let mut update = self.set_cache_capacity(capacity);
        if !layout_changed {
            return Ok(update);
        }

        self.items_per_row = self.resolve_items_per_row();
        if self.is_generated() {
            update.merge(self.resize(self.total_count));
        } else {
            self.sync_geometry();
            self.padding = EffectivePadding::for_window(&self.geometry, None);
            update.padding = self.padding;
        }
        Ok(update)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Clears (disposing every view) and returns the host.
    pub fn into_host(mut self) -> H {
        let _ = self.clear();
        self.host
    }

    pub fn state(&self) -> ScrollerState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state != ScrollerState::Uninitialized
    }

    pub fn is_generated(&self) -> bool {
        self.state == ScrollerState::Generated
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Items per row currently in effect (derived from the viewport when matching its width).
    pub fn items_per_row(&self) -> usize {
        self.items_per_row
    }

    /// The live window, if generated over a non-empty collection.
    pub fn window(&self) -> Option<Window> {
        self.window
    }

    pub fn effective_padding(&self) -> EffectivePadding {
        self.padding
    }

    /// Full scrollable size, as if every item were instantiated.
    pub fn content_extent(&self) -> ContentExtent {
        ContentExtent::of(&self.geometry)
    }

    pub fn registry(&self) -> &ActiveRegistry<H::Handle> {
        &self.registry
    }

    pub fn active_len(&self) -> usize {
        self.registry.len()
    }

    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.registry.indices()
    }

    /// The live handle for `index`, if the item is in the window.
    pub fn handle(&self, index: usize) -> Option<&H::Handle> {
        self.registry.get(index)
    }

    /// Top-left corner of item `index` in content coordinates (padding included).
    ///
    /// Returns `None` for indices out of range.
    pub fn cell_origin(&self, index: usize) -> Option<ScrollOffset> {
        if index >= self.total_count {
            return None;
        }
        let row = index / self.items_per_row;
        let col = index % self.items_per_row;
        Some(ScrollOffset::new(
            self.geometry.cols.cell_start(col),
            self.geometry.rows.cell_start(row),
        ))
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_cached(&self, index: usize) -> bool {
        self.cache.contains(index)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Maximum useful offset along `axis`, or `None` when the content fits in the viewport.
    pub fn scroll_range(&self, axis: Axis) -> Option<u64> {
        self.geometry.along(axis).scroll_range()
    }

    /// Current offset normalized against the scrollable range of each axis.
    pub fn normalized_position(&self) -> NormalizedPosition {
        self.normalized_position_for(self.offset)
    }

    /// Normalizes `offset` against the scrollable range of each axis.
    ///
    /// The vertical value is measured from the bottom (`1.0` at the top), the horizontal one from
    /// the left. An axis is `None` when its content fits in the viewport.
    pub fn normalized_position_for(&self, offset: ScrollOffset) -> NormalizedPosition {
        let x = self
            .geometry
            .cols
            .scroll_range()
            .map(|range| offset.x as f32 / range as f32);
        let y = self
            .geometry
            .rows
            .scroll_range()
            .map(|range| (range as f32 - offset.y as f32) / range as f32);
        NormalizedPosition { x, y }
    }

    /// Clamps `offset` into the scrollable range; axes that cannot scroll go back to 0.
    fn clamp_offset(&self, offset: ScrollOffset) -> ScrollOffset {
        let clamp = |axis: Axis| offset.along(axis).min(self.scroll_range(axis).unwrap_or(0));
        ScrollOffset::new(clamp(Axis::Horizontal), clamp(Axis::Vertical))
    }

    pub fn snapshot(&self) -> ScrollerSnapshot {
        ScrollerSnapshot {
            state: self.state,
            total_count: self.total_count,
            items_per_row: self.items_per_row,
            offset: self.offset,
            window: self.window,
            extent: self.content_extent(),
            padding: self.padding,
            active: self.registry.indices().collect(),
            cached: self.cache.indices().collect::<Vec<_>>(),
        }
    }

    /// Reports the viewport size.
    ///
    /// The first call initializes the scroller. While generated, a size change is handled like a
    /// scroll; when `match_container_width` changes the number of items per row, the collection
    /// is regenerated instead.
    pub fn set_viewport(&mut self, viewport: Size) -> Update {
        if self.state == ScrollerState::Uninitialized {
            rdebug!(
                width = viewport.width,
                height = viewport.height,
                "Scroller initialized"
            );
            self.state = ScrollerState::Initialized;
        } else if self.viewport == viewport {
            return self.idle_update();
        }
        self.viewport = viewport;

        let items_per_row = self.resolve_items_per_row();
        if items_per_row != self.items_per_row {
            rdebug!(
                from = self.items_per_row,
                to = items_per_row,
                "items per row changed"
            );
            self.items_per_row = items_per_row;
            if self.is_generated() {
                let update = self.resize(self.total_count);
                self.emit_scroll_event();
                return update;
            }
        }

        self.sync_geometry();
        // Alignment slack depends on the viewport width.
        self.padding = EffectivePadding::for_window(&self.geometry, self.window.as_ref());
        if !self.is_generated() {
            return self.idle_update();
        }
        let update = self.refresh();
        self.emit_scroll_event();
        update
    }

    /// Instantiates the window for a collection of `total_count` items.
    ///
    /// Ignored unless initialized and not yet generated.
    pub fn generate(&mut self, total_count: usize) -> Update {
        match self.state {
            ScrollerState::Uninitialized => {
                rwarn!(total_count, "generate before a viewport is known; ignored");
                return self.idle_update();
            }
            ScrollerState::Generated => {
                rwarn!(total_count, "generate while already generated; ignored");
                return self.idle_update();
            }
            ScrollerState::Initialized => {}
        }

        rdebug!(
            total_count,
            items_per_row = self.items_per_row,
            "Scroller::generate"
        );
        self.total_count = total_count;
        self.state = ScrollerState::Generated;
        self.sync_geometry();
        // A shrunk collection may leave the old offset past the end of the content.
        self.offset = self.clamp_offset(self.offset);
        self.window = self.geometry.window(self.offset);

        let mut update = Update {
            rebuilt: true,
            ..Update::default()
        };
        if let Some(window) = self.window {
            self.build(&window, &mut update);
        }
        self.padding = EffectivePadding::for_window(&self.geometry, self.window.as_ref());
        update.window = self.window;
        update.padding = self.padding;
        update
    }

    /// Moves the viewport to `offset` and brings the live window up to date.
    ///
    /// Before `generate` only the offset is recorded.
    pub fn scroll(&mut self, offset: ScrollOffset) -> Update {
        self.offset = offset;
        if !self.is_generated() {
            return self.idle_update();
        }
        let update = self.refresh();
        self.emit_scroll_event();
        update
    }

    /// Like [`Self::scroll`], taking a normalized position as produced by
    /// [`Self::normalized_position_for`] (`y = 1.0` is the top, `x = 0.0` the left edge).
    ///
    /// Axes that are `None`, or whose content fits in the viewport, keep their offset.
    pub fn scroll_normalized(&mut self, position: NormalizedPosition) -> Update {
        let mut offset = self.offset;
        if let (Some(v), Some(range)) = (position.y, self.geometry.rows.scroll_range()) {
            offset.y = ((1.0 - v).max(0.0) * range as f32) as u64;
        }
        if let (Some(v), Some(range)) = (position.x, self.geometry.cols.scroll_range()) {
            offset.x = (v.max(0.0) * range as f32) as u64;
        }
        self.scroll(offset)
    }

    /// Tears everything down: active views are notified and disposed, the recycle cache is
    /// emptied, and the scroller returns to the initialized state with its geometry intact.
    pub fn clear(&mut self) -> Update {
        if !self.is_generated() {
            return self.idle_update();
        }
        rdebug!(
            active = self.registry.len(),
            cached = self.cache.len(),
            "Scroller::clear"
        );

        let mut update = Update::default();
        self.teardown(false, &mut update);
        let host = &mut self.host;
        let disposed = &mut update.disposed;
        self.cache.clear(|_, handle| {
            host.dispose_view(handle);
            *disposed += 1;
        });

        self.window = None;
        self.state = ScrollerState::Initialized;
        self.padding = EffectivePadding::for_window(&self.geometry, None);
        update.padding = self.padding;
        update
    }

    /// Changes the item count: a [`Self::clear`] followed by a [`Self::generate`].
    ///
    /// Indices of existing items may now mean something else, so nothing is reconciled.
    pub fn resize(&mut self, total_count: usize) -> Update {
        if self.state == ScrollerState::Uninitialized {
            rwarn!(total_count, "resize before a viewport is known; ignored");
            return self.idle_update();
        }
        rdebug!(from = self.total_count, to = total_count, "Scroller::resize");
        let mut update = self.clear();
        update.merge(self.generate(total_count));
        update
    }

    /// Changes the recycle cache bound, disposing least recently used views when shrinking.
    pub fn set_cache_capacity(&mut self, capacity: usize) -> Update {
        if capacity != self.cache.capacity() {
            rdebug!(capacity, cached = self.cache.len(), "set_cache_capacity");
        }
        self.options.cache_capacity = capacity;
        let mut update = self.idle_update();
        let host = &mut self.host;
        let disposed = &mut update.disposed;
        self.cache.set_capacity(capacity, |_, handle| {
            host.dispose_view(handle);
            *disposed += 1;
        });
        update
    }

    /// Scrolls so that item `index` is positioned according to `policy`.
    ///
    /// The host is asked to move its scroll container through
    /// [`ViewHost::scroll_to_normalized`], then the window is updated as for a scroll. Ignored
    /// when not generated or when `index` is out of range.
    pub fn jump_to(&mut self, index: usize, policy: JumpPolicy) -> Update {
        if !self.is_generated() || index >= self.total_count {
            rwarn!(
                index,
                total_count = self.total_count,
                "jump_to out of range or not generated; ignored"
            );
            return self.idle_update();
        }
        let Some(target) = self.jump_target(index, policy) else {
            return self.idle_update();
        };
        rtrace!(index, x = target.x, y = target.y, "jump_to");
        let normalized = self.normalized_position_for(target);
        self.host.scroll_to_normalized(normalized);
        self.scroll(target)
    }

    /// Computes the offset [`Self::jump_to`] would scroll to, without applying it.
    ///
    /// Returns `None` when there is nothing to do: not generated, `index` out of range, or
    /// (for [`JumpPolicy::BringOnScreen`]) the item already inside the window. Axes whose
    /// content fits in the viewport keep their current offset.
    pub fn jump_target(&self, index: usize, policy: JumpPolicy) -> Option<ScrollOffset> {
        let window = self.window?;
        if index >= self.total_count {
            return None;
        }
        let row = index / self.items_per_row;
        let col = index % self.items_per_row;
        if policy == JumpPolicy::BringOnScreen && window.contains_cell(row, col) {
            return None;
        }

        let mut target = self.offset;
        for axis in [Axis::Vertical, Axis::Horizontal] {
            let geometry = self.geometry.along(axis);
            if geometry.scroll_range().is_none() {
                continue;
            }
            let line = match axis {
                Axis::Vertical => row,
                Axis::Horizontal => col,
            };
            let view = geometry.viewport as u64;
            let offset = match policy {
                JumpPolicy::Center => {
                    let center = geometry.cell_start(line) + geometry.cell as u64 / 2;
                    center.saturating_sub(view / 2)
                }
                JumpPolicy::BringOnScreen if line < window.first(axis) => {
                    geometry.cell_start(line)
                }
                JumpPolicy::BringOnScreen if line > window.last(axis) => {
                    geometry.cell_end(line).saturating_sub(view)
                }
                JumpPolicy::BringOnScreen => continue,
            };
            match axis {
                Axis::Vertical => target.y = offset,
                Axis::Horizontal => target.x = offset,
            }
        }
        Some(target)
    }

    fn resolve_items_per_row(&self) -> usize {
        if self.options.match_container_width && self.is_initialized() {
            fitted_items_per_row(&self.options, self.viewport.width)
        } else {
            self.options.items_per_row.max(1)
        }
    }

    fn sync_geometry(&mut self) {
        self.geometry = GridGeometry::new(
            &self.options,
            self.viewport,
            self.total_count,
            self.items_per_row,
        );
    }

    fn idle_update(&self) -> Update {
        Update {
            window: self.window,
            padding: self.padding,
            ..Update::default()
        }
    }

    fn emit_scroll_event(&self) {
        // Nothing is laid out for an empty collection.
        if self.window.is_none() {
            return;
        }
        if let Some(cb) = &self.options.on_scroll {
            cb(&ScrollEvent {
                offset: self.offset,
                normalized: self.normalized_position(),
                window: self.window,
            });
        }
    }

    /// Diffs the stored window against the one for the current offset and applies the result.
    fn refresh(&mut self) -> Update {
        let mut update = self.idle_update();
        // An empty collection has no window; scrolling it is a no-op.
        let (Some(old), Some(new)) = (self.window, self.geometry.window(self.offset)) else {
            return update;
        };

        match WindowDiff::between(&old, &new) {
            WindowDiff::Unchanged => return update,
            WindowDiff::Rebuild => {
                rdebug!(%old, %new, "disjoint window; rebuilding");
                self.teardown(true, &mut update);
                self.build(&new, &mut update);
                self.padding = EffectivePadding::for_window(&self.geometry, Some(&new));
                update.rebuilt = true;
            }
            diff @ WindowDiff::Incremental { .. } => {
                rtrace!(%old, %new, "incremental window update");
                for pass in diff.passes() {
                    self.apply_pass(pass, &mut update);
                }
            }
        }

        self.window = Some(new);
        debug_assert_eq!(
            self.padding,
            EffectivePadding::for_window(&self.geometry, Some(&new)),
            "incremental padding drifted from the derived padding"
        );
        update.window = self.window;
        update.padding = self.padding;
        update
    }

    fn apply_pass(&mut self, pass: &EdgePass, update: &mut Update) {
        rtrace!(
            side = ?pass.side,
            grow = pass.grow,
            first = pass.first,
            last = pass.last,
            "edge pass"
        );
        let step = self.geometry.along(pass.axis).step();
        let (items_per_row, total_count) = (self.items_per_row, self.total_count);
        if pass.grow {
            pass.for_each_index(items_per_row, total_count, |index| {
                self.spawn(index, pass.side, update);
            });
            self.padding = self.padding.release(pass.side, pass.lines(), step);
        } else {
            pass.for_each_index(items_per_row, total_count, |index| {
                self.retire(index, pass.side, update);
            });
            self.padding = self.padding.reserve(pass.side, pass.lines(), step);
        }
    }

    /// Instantiates every index of `window`, row-major.
    fn build(&mut self, window: &Window, update: &mut Update) {
        let (items_per_row, total_count) = (self.items_per_row, self.total_count);
        window.for_each_index(items_per_row, total_count, |index| {
            self.spawn(index, Side::None, update);
        });
    }

    /// Brings `index` into the registry, reusing a cached view when there is one.
    fn spawn(&mut self, index: usize, side: Side, update: &mut Update) {
        debug_assert!(
            !self.registry.contains(index),
            "spawn: index {index} is already active"
        );
        let handle = match self.cache.take(index) {
            Some(handle) => {
                rtrace!(index, "recycle cache hit");
                update.reused += 1;
                handle
            }
            None => {
                let mut handle = self.host.create_view(index);
                self.host.on_constructed(&mut handle, index);
                update.created += 1;
                handle
            }
        };
        let pos = self.registry.insert_sorted(index, handle);
        let handle = self.registry.handle_at_mut(pos);
        self.host.attach(handle, pos);
        self.host.on_become_visible(handle, index, side);
    }

    /// Moves `index` from the registry into the recycle cache.
    fn retire(&mut self, index: usize, side: Side, update: &mut Update) {
        let removed = self.registry.remove(index);
        debug_assert!(removed.is_some(), "retire: index {index} is not active");
        let Some((pos, mut handle)) = removed else {
            return;
        };
        self.host.on_become_invisible(&mut handle, index, side);
        self.host.detach(&mut handle, pos);
        update.retired += 1;

        let host = &mut self.host;
        let disposed = &mut update.disposed;
        self.cache.put(index, handle, |_, handle| {
            host.dispose_view(handle);
            *disposed += 1;
        });
    }

    /// Empties the registry front to back, either parking views in the cache or disposing them.
    fn teardown(&mut self, to_cache: bool, update: &mut Update) {
        let host = &mut self.host;
        let cache = &mut self.cache;
        for Cell { index, mut handle } in self.registry.drain() {
            host.on_become_invisible(&mut handle, index, Side::None);
            // Draining from the front: every view sits at position 0 when it leaves.
            host.detach(&mut handle, 0);
            update.retired += 1;
            if to_cache {
                let disposed = &mut update.disposed;
                cache.put(index, handle, |_, handle| {
                    host.dispose_view(handle);
                    *disposed += 1;
                });
            } else {
                host.dispose_view(handle);
                update.disposed += 1;
            }
        }
    }
}

impl<H: ViewHost> core::fmt::Debug for Scroller<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scroller")
            .field("state", &self.state)
            .field("viewport", &self.viewport)
            .field("offset", &self.offset)
            .field("total_count", &self.total_count)
            .field("items_per_row", &self.items_per_row)
            .field("window", &self.window)
            .field("padding", &self.padding)
            .field("active", &self.registry.len())
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
