use recycler::{Error, JumpPolicy, ScrollOffset, Scroller, ScrollerOptions, Size, Update, ViewHost};

use crate::{Easing, ScrollAnchor, Tween, apply_anchor, capture_first_visible_anchor};

/// A framework-neutral controller that wraps a `recycler::Scroller` and provides common
/// adapter workflows (animated jumps, anchoring).
///
/// This type does not hold any UI objects beyond the scroller's host. Adapters drive it by
/// calling:
/// - `on_viewport_size` / `on_scroll` when UI events occur
/// - `tick(now_ms)` each frame/timer tick while `is_animating()`
///
/// During an animation, read `scroller().offset()` after each `tick` to move the real scroll
/// container along.
#[derive(Debug)]
pub struct Controller<H: ViewHost> {
    s: Scroller<H>,
    tween: Option<Tween>,
}

impl<H: ViewHost> Controller<H> {
    pub fn new(options: ScrollerOptions, host: H) -> Result<Self, Error> {
        Ok(Self::from_scroller(Scroller::new(options, host)?))
    }

    pub fn from_scroller(s: Scroller<H>) -> Self {
        Self { s, tween: None }
    }

    pub fn scroller(&self) -> &Scroller<H> {
        &self.s
    }

    pub fn scroller_mut(&mut self) -> &mut Scroller<H> {
        &mut self.s
    }

    pub fn into_scroller(self) -> Scroller<H> {
        self.s
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn on_viewport_size(&mut self, viewport: Size) -> Update {
        self.s.set_viewport(viewport)
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// This cancels any active animation.
    pub fn on_scroll(&mut self, offset: ScrollOffset) -> Update {
        self.cancel_animation();
        self.s.scroll(offset)
    }

    /// Advances the active animation, feeding the sampled offset through the scroller.
    ///
    /// Returns `None` when nothing is animating.
    pub fn tick(&mut self, now_ms: u64) -> Option<Update> {
        let tween = self.tween?;
        let update = self.s.scroll(tween.sample(now_ms));
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(update)
    }

    /// Jumps to `index` immediately (no animation).
    pub fn jump_to(&mut self, index: usize, policy: JumpPolicy) -> Update {
        self.cancel_animation();
        self.s.jump_to(index, policy)
    }

    /// Starts an animated jump to `index`.
    ///
    /// Returns the target offset, or `None` when there is nothing to do (see
    /// `Scroller::jump_target`). An animation already in flight is retargeted from where it is.
    pub fn start_jump(
        &mut self,
        index: usize,
        policy: JumpPolicy,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<ScrollOffset> {
        let to = self.s.jump_target(index, policy)?;
        match &mut self.tween {
            Some(tween) => tween.retarget(now_ms, to, duration_ms),
            None => self.tween = Some(Tween::new(self.s.offset(), to, now_ms, duration_ms, easing)),
        }
        Some(to)
    }

    /// Starts an animation towards an arbitrary offset.
    pub fn start_tween_to_offset(
        &mut self,
        offset: ScrollOffset,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) {
        self.tween = Some(Tween::new(self.s.offset(), offset, now_ms, duration_ms, easing));
    }

    pub fn capture_first_visible_anchor(&self) -> Option<ScrollAnchor> {
        capture_first_visible_anchor(&self.s)
    }

    /// Applies a previously captured anchor. This cancels any active animation.
    pub fn apply_anchor(
        &mut self,
        anchor: &ScrollAnchor,
        remap: impl FnOnce(usize) -> Option<usize>,
    ) -> Option<Update> {
        self.cancel_animation();
        apply_anchor(&mut self.s, anchor, remap)
    }

    /// Resizes the collection while keeping the first visible item where it was on screen.
    ///
    /// If that item no longer exists, the last item is anchored instead.
    pub fn resize_anchored(&mut self, total_count: usize) -> Update {
        self.cancel_animation();
        let anchor = self.capture_first_visible_anchor();
        let mut update = self.s.resize(total_count);
        if let Some(anchor) = anchor {
            let last = total_count.checked_sub(1);
            let applied = apply_anchor(&mut self.s, &anchor, |i| last.map(|last| i.min(last)));
            if let Some(next) = applied {
                update.merge(next);
            }
        }
        update
    }
}
